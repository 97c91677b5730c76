//! Forward-mode automatic differentiation with dual numbers.
//!
//! A [`DualNumber`] pairs a real part (a function value) with a dual part
//! (its derivative). Every arithmetic operator and elementary function
//! propagates both at once, so evaluating a function on
//! [`DualNumber::variable(x)`](DualNumber::variable) yields `f(x)` and
//! `f′(x)` together: no symbolic algebra, no finite differences.
//!
//! ```
//! use dual_autodiff::DualNumber;
//!
//! // f(x) = x·sin(x) + 3 at x=0
//! let x: DualNumber = DualNumber::variable(0.0);
//! let f = x * x.sin() + 3.0;
//!
//! assert_eq!(f.real, 3.0);
//! assert_eq!(f.dual, 0.0); // f'(x) = sin x + x·cos x
//! ```
//!
//! # Fallible operations
//!
//! Division, powers, `tan`, `log`, `inverse` and `sqrt` can hit a zero
//! (or out-of-domain) real part. They return `Result<_, DualError>`;
//! [`derivative`] lets a whole expression use `?`:
//!
//! ```
//! use dual_autodiff::{derivative, DualNumber};
//!
//! // f(x) = ln(x) / x at x=1, f'(x) = (1 - ln x)/x²
//! let (value, slope) = derivative(|x: DualNumber| x.log()?.checked_div(x), 1.0)?;
//! assert_eq!(value, 0.0);
//! assert_eq!(slope, 1.0);
//! # Ok::<(), dual_autodiff::DualError>(())
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`DualNumber`].
//!
//! # Logging
//!
//! Every [`DualError`] is reported as a `tracing` debug event carrying the
//! operation name; install a subscriber to see them.

pub mod compare;
pub mod dual;
pub mod error;
pub mod functions;

pub use dual::{derivative, DualNumber};
pub use error::DualError;
