//! Algebraic properties of dual-number arithmetic.

use approx::assert_relative_eq;
use dual_autodiff::{derivative, DualError, DualNumber};
use proptest::prelude::*;

// Integer-valued floats keep sums and products exact.
fn small() -> impl Strategy<Value = f64> {
    (-1000i32..1000).prop_map(f64::from)
}

fn dual() -> impl Strategy<Value = DualNumber> {
    (small(), small()).prop_map(|(real, dual)| DualNumber::new(real, dual))
}

proptest! {
    #[test]
    fn prop_add_then_sub_is_identity(a in dual(), b in dual()) {
        prop_assert_eq!((a + b) - b, a);
    }

    #[test]
    fn prop_add_is_componentwise(a in dual(), b in dual()) {
        let s = a + b;
        prop_assert_eq!(s.real, a.real + b.real);
        prop_assert_eq!(s.dual, a.dual + b.dual);
    }

    #[test]
    fn prop_mul_follows_product_rule(a in dual(), b in dual()) {
        let p = a * b;
        prop_assert_eq!(p.real, a.real * b.real);
        prop_assert_eq!(p.dual, a.real * b.dual + a.dual * b.real);
    }

    #[test]
    fn prop_scalar_is_constant_dual(a in dual(), s in small()) {
        let c = DualNumber::constant(s);
        prop_assert_eq!(a + s, a + c);
        prop_assert_eq!(s + a, c + a);
        prop_assert_eq!(a - s, a - c);
        prop_assert_eq!(s - a, c - a);
        prop_assert_eq!(a * s, a * c);
        prop_assert_eq!(s * a, c * a);
    }

    #[test]
    fn prop_div_by_zero_real_always_fails(a in dual(), dual_part in small()) {
        prop_assert_eq!(
            a.checked_div(DualNumber::new(0.0, dual_part)),
            Err(DualError::DivisionByZero { op: "div" })
        );
    }

    #[test]
    fn prop_div_undoes_mul(a in dual(), b in dual()) {
        prop_assume!(b.real != 0.0);
        let q = (a * b).checked_div(b).unwrap();
        assert_relative_eq!(q, a, epsilon = 1e-9, max_relative = 1e-9);
    }

    #[test]
    fn prop_sin_cos_derivatives(r in -10.0f64..10.0) {
        prop_assert_eq!(DualNumber::variable(r).sin().dual, r.cos());
        prop_assert_eq!(DualNumber::variable(r).cos().dual, -r.sin());
    }

    #[test]
    fn prop_log_of_exp_is_identity(r in -5.0f64..5.0) {
        let (value, slope) = derivative(|x: DualNumber| x.exp().log(), r).unwrap();
        assert_relative_eq!(value, r, epsilon = 1e-12);
        assert_relative_eq!(slope, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn prop_inverse_matches_negative_power(r in 0.1f64..100.0) {
        let x = DualNumber::variable(r);
        assert_relative_eq!(
            x.inverse().unwrap(),
            x.pow(-1.0).unwrap(),
            max_relative = 1e-12
        );
    }
}

#[test]
fn constant_defaults_dual_to_zero() {
    assert_eq!(DualNumber::constant(4.0_f64).dual, 0.0);
}

#[test]
fn quotient_of_reference_values() {
    let a: DualNumber = DualNumber::new(2.0, 4.0);
    let b = DualNumber::new(3.0, 5.0);
    assert_eq!(a * b, DualNumber::new(6.0, 22.0));

    let q = a / b;
    assert_relative_eq!(q.real, 0.6667, epsilon = 1e-4);
    assert_relative_eq!(q.dual, 0.2222, epsilon = 1e-4);
}

#[cfg(feature = "serde")]
#[test]
fn serde_uses_named_fields() {
    let x: DualNumber = DualNumber::new(2.0, 3.0);
    let json = serde_json::to_string(&x).unwrap();
    assert_eq!(json, r#"{"real":2.0,"dual":3.0}"#);

    let back: DualNumber = serde_json::from_str(&json).unwrap();
    assert_eq!(back, x);
}
