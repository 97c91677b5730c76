//! Powers and elementary functions on dual numbers.
//!
//! Each function `g` maps `a + a′·ε` to `g(a) + (a′·g′(a))·ε`:
//!
//! | function | real part | dual part |
//! |---|---|---|
//! | `pow(e)` | `aᵉ` | `e·aᵉ⁻¹·a′` |
//! | `sin` | `sin a` | `a′·cos a` |
//! | `cos` | `cos a` | `-a′·sin a` |
//! | `tan` | `tan a` | `a′/cos² a` |
//! | `log` | `ln a` | `a′/a` |
//! | `inverse` | `1/a` | `-a′/a²` |
//! | `exp` | `eᵃ` | `a′·eᵃ` |
//! | `sqrt` | `√a` | `a′/(2√a)` |
//!
//! Where the derivative (or the value) would need a division by zero the
//! function returns [`DualError::DivisionByZero`] instead of an infinity.
//! Real parts outside the function's domain give [`DualError::Domain`].

use num_traits::Float;

use crate::dual::DualNumber;
use crate::error::DualError;

fn real_of<T: Float>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}

impl<T: Float> DualNumber<T> {
    /// Raise to a real power `e`: `aᵉ + (e·aᵉ⁻¹·a′)·ε`.
    ///
    /// # Errors
    ///
    /// - [`DualError::DivisionByZero`] if the real part is zero and
    ///   `e < 1` (the derivative term needs `0^(e-1)`).
    /// - [`DualError::Domain`] if the real part is negative and `e` is not
    ///   an integer.
    ///
    /// # Example
    ///
    /// ```
    /// use dual_autodiff::DualNumber;
    ///
    /// let x: DualNumber = DualNumber::new(2.0, 3.0);
    /// assert_eq!(x.pow(3.0)?, DualNumber::new(8.0, 36.0));
    /// assert_eq!(x.pow(-1.0)?, DualNumber::new(0.5, -0.75));
    /// assert!(DualNumber::new(0.0, 3.0).pow(-1.0).is_err());
    /// # Ok::<(), dual_autodiff::DualError>(())
    /// ```
    pub fn pow(self, e: T) -> Result<Self, DualError> {
        if self.real.is_zero() && e < T::one() {
            return Err(DualError::division_by_zero("pow"));
        }
        if self.real < T::zero() && e.fract() != T::zero() {
            return Err(DualError::domain("pow", real_of(self.real)));
        }
        Ok(DualNumber {
            real: self.real.powf(e),
            dual: e * self.real.powf(e - T::one()) * self.dual,
        })
    }

    /// In-place [`pow`](Self::pow). On error `self` is left unchanged.
    pub fn try_pow_assign(&mut self, e: T) -> Result<(), DualError> {
        *self = self.pow(e)?;
        Ok(())
    }

    /// Sine: `sin a + (a′·cos a)·ε`.
    ///
    /// # Example
    ///
    /// ```
    /// use dual_autodiff::DualNumber;
    ///
    /// let f = DualNumber::variable(0.0_f64).sin();
    /// assert_eq!(f, DualNumber::new(0.0, 1.0));
    /// ```
    pub fn sin(self) -> Self {
        DualNumber {
            real: self.real.sin(),
            dual: self.dual * self.real.cos(),
        }
    }

    /// Cosine: `cos a + (-a′·sin a)·ε`.
    pub fn cos(self) -> Self {
        DualNumber {
            real: self.real.cos(),
            dual: -self.dual * self.real.sin(),
        }
    }

    /// Tangent: `tan a + (a′/cos² a)·ε`.
    ///
    /// # Errors
    ///
    /// [`DualError::DivisionByZero`] if `cos a` is exactly zero.
    pub fn tan(self) -> Result<Self, DualError> {
        let c = self.real.cos();
        // No f32/f64 input has a cosine of exactly zero; other `Float` types may.
        if c.is_zero() {
            return Err(DualError::division_by_zero("tan"));
        }
        Ok(DualNumber {
            real: self.real.tan(),
            dual: self.dual / (c * c),
        })
    }

    /// Natural logarithm: `ln a + (a′/a)·ε`.
    ///
    /// # Errors
    ///
    /// - [`DualError::DivisionByZero`] if the real part is zero.
    /// - [`DualError::Domain`] if the real part is negative.
    ///
    /// # Example
    ///
    /// ```
    /// use dual_autodiff::{DualError, DualNumber};
    ///
    /// let f = DualNumber::new(2.0_f64, 1.0).log()?;
    /// assert!((f.real - 2.0_f64.ln()).abs() < 1e-12);
    /// assert_eq!(f.dual, 0.5);
    ///
    /// assert_eq!(
    ///     DualNumber::new(0.0_f64, 1.0).log(),
    ///     Err(DualError::DivisionByZero { op: "log" })
    /// );
    /// # Ok::<(), DualError>(())
    /// ```
    pub fn log(self) -> Result<Self, DualError> {
        if self.real.is_zero() {
            return Err(DualError::division_by_zero("log"));
        }
        if self.real < T::zero() {
            return Err(DualError::domain("log", real_of(self.real)));
        }
        Ok(DualNumber {
            real: self.real.ln(),
            dual: self.dual / self.real,
        })
    }

    /// Multiplicative inverse: `1/a + (-a′/a²)·ε`.
    ///
    /// # Errors
    ///
    /// [`DualError::DivisionByZero`] if the real part is zero.
    pub fn inverse(self) -> Result<Self, DualError> {
        if self.real.is_zero() {
            return Err(DualError::division_by_zero("inverse"));
        }
        Ok(DualNumber {
            real: self.real.recip(),
            dual: -self.dual / (self.real * self.real),
        })
    }

    /// Alias for [`inverse`](Self::inverse).
    pub fn inv(self) -> Result<Self, DualError> {
        self.inverse()
    }

    /// Exponential: `eᵃ + (a′·eᵃ)·ε`.
    pub fn exp(self) -> Self {
        let exp_val = self.real.exp();
        DualNumber {
            real: exp_val,
            dual: self.dual * exp_val,
        }
    }

    /// Square root: `√a + (a′/(2√a))·ε`.
    ///
    /// # Errors
    ///
    /// - [`DualError::DivisionByZero`] if the real part is zero.
    /// - [`DualError::Domain`] if the real part is negative.
    pub fn sqrt(self) -> Result<Self, DualError> {
        if self.real.is_zero() {
            return Err(DualError::division_by_zero("sqrt"));
        }
        if self.real < T::zero() {
            return Err(DualError::domain("sqrt", real_of(self.real)));
        }
        let sqrt_val = self.real.sqrt();
        Ok(DualNumber {
            real: sqrt_val,
            dual: self.dual / (sqrt_val + sqrt_val),
        })
    }
}
