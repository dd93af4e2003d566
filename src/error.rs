use thiserror::Error;

/// Errors returned by the formatting functions.
///
/// Both kinds abort the call; no partial output is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// The format code matched none of `BF`, `DF`, `S`, `B` or `D`
    #[error("Invalid unit format: {0:?}")]
    InvalidUnitFormat(String),

    /// The measurement was negative, NaN, or above [`MAX_VALUE`](crate::MAX_VALUE)
    #[error("Invalid range: {0} is outside [0, {max}]", max = crate::MAX_VALUE)]
    InvalidRange(f64),
}

impl FormatError {
    pub fn invalid_unit_format(code: impl Into<String>) -> Self {
        Self::InvalidUnitFormat(code.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_offending_input() {
        let err = FormatError::invalid_unit_format("X");
        assert_eq!(err.to_string(), "Invalid unit format: \"X\"");

        let err = FormatError::InvalidRange(-1.0);
        assert!(err.to_string().starts_with("Invalid range: -1 is outside [0, "));
    }
}
