use core::str::FromStr;
use crate::error::FormatError;
use crate::types::{FormatCode, FormatStyle};

// ========== Format-Code Grammar ==========

impl FormatCode {
    pub const fn new(style: FormatStyle, lowercase_output: bool) -> Self {
        Self { style, lowercase_output }
    }

    /// Parses a format code string
    ///
    /// Accepted codes, matched against the whole string:
    ///
    /// - `BF` (any case) - [`FormatStyle::AbbreviatedBi`]
    /// - `DF` (any case) - [`FormatStyle::FullWord`]
    /// - `S` / `B` / `D` - [`FormatStyle::SingleLetter`] / [`FormatStyle::BinaryIec`] /
    ///   [`FormatStyle::DecimalSi`]
    /// - `s` / `b` / `d` - the same three styles with lowercase output
    ///
    /// Anything else fails with [`FormatError::InvalidUnitFormat`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use unit_formatter::{FormatCode, FormatError, FormatStyle};
    ///
    /// assert_eq!(FormatCode::parse("df")?.style, FormatStyle::FullWord);
    /// assert!(!FormatCode::parse("df")?.lowercase_output);
    /// assert!(FormatCode::parse("s")?.lowercase_output);
    /// assert!(FormatCode::parse("KB").is_err());
    /// # Ok::<(), FormatError>(())
    /// ```
    pub fn parse(code: &str) -> Result<Self, FormatError> {
        let parsed = match code {
            c if c.eq_ignore_ascii_case("BF") => Self::new(FormatStyle::AbbreviatedBi, false),
            c if c.eq_ignore_ascii_case("DF") => Self::new(FormatStyle::FullWord, false),
            "S" => Self::new(FormatStyle::SingleLetter, false),
            "B" => Self::new(FormatStyle::BinaryIec, false),
            "D" => Self::new(FormatStyle::DecimalSi, false),
            "s" => Self::new(FormatStyle::SingleLetter, true),
            "b" => Self::new(FormatStyle::BinaryIec, true),
            "d" => Self::new(FormatStyle::DecimalSi, true),
            _ => return Err(FormatError::invalid_unit_format(code)),
        };
        Ok(parsed)
    }
}

impl FromStr for FormatCode {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::bi_upper("BF", FormatStyle::AbbreviatedBi, false)]
    #[case::bi_lower("bf", FormatStyle::AbbreviatedBi, false)]
    #[case::bi_mixed("Bf", FormatStyle::AbbreviatedBi, false)]
    #[case::full_upper("DF", FormatStyle::FullWord, false)]
    #[case::full_lower("df", FormatStyle::FullWord, false)]
    #[case::single("S", FormatStyle::SingleLetter, false)]
    #[case::single_lower("s", FormatStyle::SingleLetter, true)]
    #[case::binary("B", FormatStyle::BinaryIec, false)]
    #[case::binary_lower("b", FormatStyle::BinaryIec, true)]
    #[case::decimal("D", FormatStyle::DecimalSi, false)]
    #[case::decimal_lower("d", FormatStyle::DecimalSi, true)]
    fn parses_every_alternative(
        #[case] code: &str,
        #[case] style: FormatStyle,
        #[case] lowercase_output: bool,
    ) {
        assert_eq!(FormatCode::parse(code), Ok(FormatCode::new(style, lowercase_output)));
    }

    #[rstest]
    #[case("")]
    #[case("X")]
    #[case("KB")]
    #[case("BFF")]
    #[case(" D")]
    #[case("D ")]
    #[case("SF")]
    fn rejects_anything_else(#[case] code: &str) {
        assert_eq!(
            FormatCode::parse(code),
            Err(FormatError::InvalidUnitFormat(code.to_string()))
        );
    }

    #[test]
    fn from_str_matches_parse() {
        let code: FormatCode = "BF".parse().unwrap();
        assert_eq!(code.style, FormatStyle::AbbreviatedBi);
    }
}
