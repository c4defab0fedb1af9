use thiserror::Error;

/// Errors raised by the fallible operations on [Fraction][crate::Fraction] and
/// [Complex][crate::Complex].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    /// The denominator resolved to zero, or a float input was not finite
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("division by zero")]
    DivisionByZero,

    /// The operand kind is not applicable to the operation. A caller can use this
    /// to fall back to a reflected operation instead of failing.
    #[error("operation `{operation}` is not applicable to {operand} operand")]
    TypeMismatch {
        operation: &'static str,
        operand: &'static str,
    },

    /// The result does not fit into the backing integer type
    #[error("integer overflow")]
    Overflow,
}

impl ArithmeticError {
    #[inline]
    pub(crate) const fn mismatch(operation: &'static str, operand: &'static str) -> Self {
        ArithmeticError::TypeMismatch { operation, operand }
    }

    /// Whether the error is the "not applicable" outcome
    #[inline]
    pub fn is_not_applicable(&self) -> bool {
        matches!(self, ArithmeticError::TypeMismatch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_test() {
        assert_eq!(
            ArithmeticError::InvalidArgument("denominator is zero").to_string(),
            "invalid argument: denominator is zero"
        );
        assert_eq!(ArithmeticError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            ArithmeticError::mismatch("add", "complex").to_string(),
            "operation `add` is not applicable to complex operand"
        );
        assert!(ArithmeticError::mismatch("pow", "float").is_not_applicable());
        assert!(!ArithmeticError::Overflow.is_not_applicable());
    }
}
