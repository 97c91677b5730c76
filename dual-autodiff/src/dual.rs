//! Dual numbers for forward-mode automatic differentiation.
//!
//! A dual number represents a value and its derivative simultaneously,
//! enabling automatic computation of derivatives through operator
//! overloading.
//!
//! # Mathematical Background
//!
//! A dual number has the form `a + a′·ε` where `ε² = 0`. Arithmetic on
//! dual numbers follows these rules:
//!
//! - `(a + a′·ε) + (b + b′·ε) = (a+b) + (a′+b′)·ε`
//! - `(a + a′·ε) - (b + b′·ε) = (a-b) + (a′-b′)·ε`
//! - `(a + a′·ε) * (b + b′·ε) = ab + (ab′ + a′b)·ε`
//! - `(a + a′·ε) / (b + b′·ε) = (a/b) + ((a′b - ab′)/b²)·ε`
//!
//! A bare scalar `s` behaves as the constant `s + 0·ε`, on either side of
//! an operator.
//!
//! # Division
//!
//! Division by a zero real part has no finite result and is reported as
//! [`DualError::DivisionByZero`]. [`DualNumber::checked_div`] and
//! [`DualNumber::try_div_assign`] return the error; the `/` and `/=`
//! operators panic with it, the same contract as integer division on the
//! primitive types.
//!
//! ```
//! use dual_autodiff::{DualError, DualNumber};
//!
//! let x: DualNumber = DualNumber::new(2.0, 4.0);
//! let y = DualNumber::new(3.0, 5.0);
//! let q = x.checked_div(y)?;
//! assert!((q.real - 2.0 / 3.0).abs() < 1e-12);
//! assert!((q.dual - 2.0 / 9.0).abs() < 1e-12);
//!
//! assert_eq!(
//!     x.checked_div(0.0),
//!     Err(DualError::DivisionByZero { op: "div" })
//! );
//! # Ok::<(), DualError>(())
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{Float, NumCast, One, ToPrimitive, Zero};

use crate::error::DualError;

/// A dual number carrying a function value and its derivative.
///
/// `DualNumber { real, dual }` represents `real + dual·ε` where `ε² = 0`.
/// Arithmetic and the elementary functions propagate the derivative
/// alongside the value; the chain rule falls out of composition.
///
/// # Type Parameter
///
/// - `T`: the element type, `f64` by default. Integer element types
///   support construction, display, equality, `+`, `-`, `*` and negation;
///   division, powers and the elementary functions need a
///   [`Float`](num_traits::Float) element type (see [`DualNumber::cast`]).
///
/// # Equality
///
/// `==` compares both components exactly. Tolerance comparison goes
/// through the [`approx`] traits.
///
/// # Examples
///
/// ## Product rule
///
/// ```
/// use dual_autodiff::DualNumber;
///
/// let a = DualNumber::new(2.0, 4.0);
/// let b = DualNumber::new(3.0, 5.0);
///
/// assert_eq!(a * b, DualNumber::new(6.0, 22.0));
/// ```
///
/// ## Scalars on either side
///
/// ```
/// use dual_autodiff::DualNumber;
///
/// let z: DualNumber = DualNumber::new(5.0, 3.0);
///
/// assert_eq!(z + 10.0, DualNumber::new(15.0, 3.0));
/// assert_eq!(10.0 + z, DualNumber::new(15.0, 3.0));
/// assert_eq!(10.0 - z, DualNumber::new(5.0, -3.0));
/// ```
///
/// ## Representation
///
/// ```
/// use dual_autodiff::DualNumber;
///
/// assert_eq!(DualNumber::new(2, 3).to_string(), "DualNumber(real=2, dual=3)");
/// assert_eq!(
///     DualNumber::new(4.0, 0.0).to_string(),
///     "DualNumber(real=4.0, dual=0.0)"
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DualNumber<T = f64> {
    /// The function value at the evaluation point.
    pub real: T,
    /// The derivative coefficient.
    pub dual: T,
}

impl<T> DualNumber<T> {
    /// Create a dual number with explicit real and dual parts.
    ///
    /// Both parts are stored verbatim.
    ///
    /// # Example
    ///
    /// ```
    /// use dual_autodiff::DualNumber;
    ///
    /// let d = DualNumber::new(2.5, -1.5);
    /// assert_eq!(d.real, 2.5);
    /// assert_eq!(d.dual, -1.5);
    /// ```
    pub const fn new(real: T, dual: T) -> Self {
        DualNumber { real, dual }
    }

    /// Create a constant (dual part = 0).
    ///
    /// # Example
    ///
    /// ```
    /// use dual_autodiff::DualNumber;
    ///
    /// let c = DualNumber::constant(4.0);
    /// assert_eq!(c.dual, 0.0);
    /// ```
    pub fn constant(real: T) -> Self
    where
        T: Zero,
    {
        DualNumber {
            real,
            dual: T::zero(),
        }
    }

    /// Create the input variable (dual part = 1).
    ///
    /// Seed the quantity you differentiate with respect to with this.
    ///
    /// # Example
    ///
    /// ```
    /// use dual_autodiff::DualNumber;
    ///
    /// let x = DualNumber::variable(3.0);
    /// let y = x * x;
    /// assert_eq!(y.dual, 6.0); // d/dx(x²) at x=3
    /// ```
    pub fn variable(real: T) -> Self
    where
        T: One,
    {
        DualNumber {
            real,
            dual: T::one(),
        }
    }

    /// Convert both parts to another numeric type.
    ///
    /// Returns `None` if either part is not representable in `U`.
    ///
    /// # Example
    ///
    /// ```
    /// use dual_autodiff::DualNumber;
    ///
    /// let n = DualNumber::new(2, 3);
    /// let x: DualNumber<f64> = n.cast().unwrap();
    /// assert_eq!(x.to_string(), "DualNumber(real=2.0, dual=3.0)");
    /// ```
    pub fn cast<U: NumCast>(self) -> Option<DualNumber<U>>
    where
        T: ToPrimitive,
    {
        Some(DualNumber {
            real: U::from(self.real)?,
            dual: U::from(self.dual)?,
        })
    }
}

impl<T: Float> DualNumber<T> {
    /// Quotient rule: `(a/b) + ((a′b - ab′)/b²)·ε`.
    ///
    /// `rhs` may be a `DualNumber` or a bare scalar.
    ///
    /// # Errors
    ///
    /// [`DualError::DivisionByZero`] if the divisor's real part is zero.
    pub fn checked_div<R: Into<Self>>(self, rhs: R) -> Result<Self, DualError> {
        let rhs = rhs.into();
        if rhs.real.is_zero() {
            return Err(DualError::division_by_zero("div"));
        }
        Ok(DualNumber {
            real: self.real / rhs.real,
            dual: (self.dual * rhs.real - self.real * rhs.dual) / (rhs.real * rhs.real),
        })
    }

    /// In-place [`checked_div`](Self::checked_div).
    ///
    /// On error `self` is left unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use dual_autodiff::DualNumber;
    ///
    /// let mut x: DualNumber = DualNumber::new(2.0, 3.0);
    /// x.try_div_assign(2.0).unwrap();
    /// assert_eq!(x, DualNumber::new(1.0, 1.5));
    ///
    /// assert!(x.try_div_assign(0.0).is_err());
    /// assert_eq!(x, DualNumber::new(1.0, 1.5));
    /// ```
    pub fn try_div_assign<R: Into<Self>>(&mut self, rhs: R) -> Result<(), DualError> {
        *self = self.checked_div(rhs)?;
        Ok(())
    }
}

/// A bare scalar is the constant `value + 0·ε`.
impl<T: Zero> From<T> for DualNumber<T> {
    fn from(value: T) -> Self {
        DualNumber::constant(value)
    }
}

impl From<DualNumber<i32>> for DualNumber<f64> {
    fn from(d: DualNumber<i32>) -> Self {
        DualNumber::new(d.real.into(), d.dual.into())
    }
}

impl From<DualNumber<f32>> for DualNumber<f64> {
    fn from(d: DualNumber<f32>) -> Self {
        DualNumber::new(d.real.into(), d.dual.into())
    }
}

/// Renders `DualNumber(real=<real>, dual=<dual>)`.
///
/// Each part is written in its natural form: floats keep a fractional
/// part (`4.0`), integers do not (`4`).
impl<T: fmt::Debug> fmt::Display for DualNumber<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DualNumber(real={:?}, dual={:?})", self.real, self.dual)
    }
}

/// Addition: (a + a′·ε) + (b + b′·ε) = (a+b) + (a′+b′)·ε
impl<T: Add<Output = T>> Add for DualNumber<T> {
    type Output = DualNumber<T>;

    fn add(self, rhs: Self) -> Self::Output {
        DualNumber {
            real: self.real + rhs.real,
            dual: self.dual + rhs.dual,
        }
    }
}

/// Subtraction: (a + a′·ε) - (b + b′·ε) = (a-b) + (a′-b′)·ε
impl<T: Sub<Output = T>> Sub for DualNumber<T> {
    type Output = DualNumber<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        DualNumber {
            real: self.real - rhs.real,
            dual: self.dual - rhs.dual,
        }
    }
}

/// Multiplication: (a + a′·ε) * (b + b′·ε) = ab + (ab′ + a′b)·ε
///
/// This is the product rule: d/dx(f·g) = f·g′ + f′·g
impl<T: Mul<Output = T> + Add<Output = T> + Copy> Mul for DualNumber<T> {
    type Output = DualNumber<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        DualNumber {
            real: self.real * rhs.real,
            dual: self.real * rhs.dual + self.dual * rhs.real,
        }
    }
}

/// Division through [`DualNumber::checked_div`].
///
/// # Panics
///
/// Panics if the divisor's real part is zero.
impl<T: Float> Div for DualNumber<T> {
    type Output = DualNumber<T>;

    fn div(self, rhs: Self) -> Self::Output {
        match self.checked_div(rhs) {
            Ok(q) => q,
            Err(e) => panic!("{e}"),
        }
    }
}

/// Negation: -(a + a′·ε) = -a + (-a′)·ε
impl<T: Neg<Output = T>> Neg for DualNumber<T> {
    type Output = DualNumber<T>;

    fn neg(self) -> Self::Output {
        DualNumber {
            real: -self.real,
            dual: -self.dual,
        }
    }
}

impl<T: Add<Output = T> + Copy> AddAssign for DualNumber<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Sub<Output = T> + Copy> SubAssign for DualNumber<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Mul<Output = T> + Add<Output = T> + Copy> MulAssign for DualNumber<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// # Panics
///
/// Panics if the divisor's real part is zero; use
/// [`DualNumber::try_div_assign`] to handle that case.
impl<T: Float> DivAssign for DualNumber<T> {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

// Scalar operands. Coherence rules rule out a blanket `impl Add<DualNumber<T>>
// for T`, so the reflected forms are spelled out per primitive.
macro_rules! scalar_ops {
    ($($t:ty),*) => {$(
        impl Add<$t> for DualNumber<$t> {
            type Output = DualNumber<$t>;

            fn add(self, rhs: $t) -> Self::Output {
                DualNumber::new(self.real + rhs, self.dual)
            }
        }

        impl Add<DualNumber<$t>> for $t {
            type Output = DualNumber<$t>;

            fn add(self, rhs: DualNumber<$t>) -> Self::Output {
                rhs + self
            }
        }

        impl Sub<$t> for DualNumber<$t> {
            type Output = DualNumber<$t>;

            fn sub(self, rhs: $t) -> Self::Output {
                DualNumber::new(self.real - rhs, self.dual)
            }
        }

        impl Sub<DualNumber<$t>> for $t {
            type Output = DualNumber<$t>;

            fn sub(self, rhs: DualNumber<$t>) -> Self::Output {
                DualNumber::new(self - rhs.real, -rhs.dual)
            }
        }

        impl Mul<$t> for DualNumber<$t> {
            type Output = DualNumber<$t>;

            fn mul(self, rhs: $t) -> Self::Output {
                DualNumber::new(self.real * rhs, self.dual * rhs)
            }
        }

        impl Mul<DualNumber<$t>> for $t {
            type Output = DualNumber<$t>;

            fn mul(self, rhs: DualNumber<$t>) -> Self::Output {
                rhs * self
            }
        }

        impl AddAssign<$t> for DualNumber<$t> {
            fn add_assign(&mut self, rhs: $t) {
                *self = *self + rhs;
            }
        }

        impl SubAssign<$t> for DualNumber<$t> {
            fn sub_assign(&mut self, rhs: $t) {
                *self = *self - rhs;
            }
        }

        impl MulAssign<$t> for DualNumber<$t> {
            fn mul_assign(&mut self, rhs: $t) {
                *self = *self * rhs;
            }
        }
    )*};
}

macro_rules! scalar_div {
    ($($t:ty),*) => {$(
        impl Div<$t> for DualNumber<$t> {
            type Output = DualNumber<$t>;

            fn div(self, rhs: $t) -> Self::Output {
                self / DualNumber::constant(rhs)
            }
        }

        impl Div<DualNumber<$t>> for $t {
            type Output = DualNumber<$t>;

            fn div(self, rhs: DualNumber<$t>) -> Self::Output {
                DualNumber::constant(self) / rhs
            }
        }

        impl DivAssign<$t> for DualNumber<$t> {
            fn div_assign(&mut self, rhs: $t) {
                *self = *self / rhs;
            }
        }
    )*};
}

scalar_ops!(f32, f64, i32, i64);
scalar_div!(f32, f64);

/// Evaluate `f` at `x` and return `(f(x), f′(x))`.
///
/// `x` is seeded as a [`DualNumber::variable`]; `f` may use any fallible
/// operation with `?`.
///
/// # Example
///
/// ```
/// use dual_autodiff::{derivative, DualNumber};
///
/// // f(x) = x³ - 2x + 1
/// let (value, slope) = derivative(|x: DualNumber| Ok(x.pow(3.0)? - 2.0 * x + 1.0), 2.0)?;
/// assert_eq!(value, 5.0);
/// assert_eq!(slope, 10.0);
/// # Ok::<(), dual_autodiff::DualError>(())
/// ```
pub fn derivative<T, F>(f: F, x: T) -> Result<(T, T), DualError>
where
    T: One,
    F: FnOnce(DualNumber<T>) -> Result<DualNumber<T>, DualError>,
{
    let y = f(DualNumber::variable(x))?;
    Ok((y.real, y.dual))
}
