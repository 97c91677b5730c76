//! Tolerance comparison for dual numbers.
//!
//! `==` on [`DualNumber`] is exact. These [`approx`] impls compare both
//! parts against the same tolerance, so a quotient can be checked with
//! `assert_relative_eq!`:
//!
//! ```
//! use approx::assert_relative_eq;
//! use dual_autodiff::DualNumber;
//!
//! let q: DualNumber = DualNumber::new(2.0, 4.0) / DualNumber::new(3.0, 5.0);
//! assert_relative_eq!(q, DualNumber::new(2.0 / 3.0, 2.0 / 9.0), epsilon = 1e-10);
//! ```

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::dual::DualNumber;

impl<T> AbsDiffEq for DualNumber<T>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.real.abs_diff_eq(&other.real, epsilon) && self.dual.abs_diff_eq(&other.dual, epsilon)
    }
}

impl<T> RelativeEq for DualNumber<T>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.real.relative_eq(&other.real, epsilon, max_relative)
            && self.dual.relative_eq(&other.dual, epsilon, max_relative)
    }
}

impl<T> UlpsEq for DualNumber<T>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.real.ulps_eq(&other.real, epsilon, max_ulps)
            && self.dual.ulps_eq(&other.dual, epsilon, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq, assert_ulps_eq};

    use super::*;

    #[test]
    fn tolerance_applies_to_both_parts() {
        let a: DualNumber = DualNumber::new(1.0, 2.0);
        let b = DualNumber::new(1.0 + 1e-12, 2.0 - 1e-12);

        assert_ne!(a, b);
        assert_abs_diff_eq!(a, b, epsilon = 1e-9);
        assert!(a.abs_diff_ne(&DualNumber::new(1.0, 2.1), 1e-9));
        assert!(a.abs_diff_ne(&DualNumber::new(1.1, 2.0), 1e-9));
    }

    #[test]
    fn relative_and_ulps() {
        let x: DualNumber = DualNumber::new(0.1 + 0.2, 1.0);
        assert_relative_eq!(x, DualNumber::new(0.3, 1.0));
        assert_ulps_eq!(x, DualNumber::new(0.3, 1.0));
    }
}
