//! Error types for dual-number operations.

use thiserror::Error;

/// Errors raised by dual-number operations that have no finite result.
///
/// Every fallible operation returns this synchronously; no partial result
/// is ever produced and the receiver of an in-place operation is left
/// untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum DualError {
    /// The operation would divide by a zero real part.
    #[error("division by zero in `{op}`")]
    DivisionByZero {
        /// Name of the operation that failed.
        op: &'static str,
    },

    /// The real part lies outside the operation's domain.
    #[error("`{op}` is undefined for real part {real}")]
    Domain {
        /// Name of the operation that failed.
        op: &'static str,
        /// The offending real part.
        real: f64,
    },
}

impl DualError {
    pub(crate) fn division_by_zero(op: &'static str) -> Self {
        tracing::debug!(op, "dual-number division by zero");
        DualError::DivisionByZero { op }
    }

    pub(crate) fn domain(op: &'static str, real: f64) -> Self {
        tracing::debug!(op, real, "dual-number domain error");
        DualError::Domain { op, real }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_operation() {
        let e = DualError::division_by_zero("log");
        assert_eq!(e.to_string(), "division by zero in `log`");

        let e = DualError::domain("sqrt", -4.0);
        assert_eq!(e.to_string(), "`sqrt` is undefined for real part -4");
    }
}
