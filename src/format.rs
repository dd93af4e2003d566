use crate::error::FormatError;
use crate::render::render;
use crate::scale::{scale_measurement, select_scale};
use crate::types::{FormatCode, MeasurementType};

// ========== Unit Formatting ==========

/// Format code used when the caller has no preference: decimal-SI, original case
pub const DEFAULT_FORMAT_CODE: &str = "D";

/// Formats a measurement with an already-parsed format code
///
/// Validates the range, picks the scale, rounds, and renders. This is the
/// typed core behind [`byte_format`], [`bit_format`] and [`format`].
///
/// # Example
///
/// ```rust
/// use unit_formatter::{format_measurement, FormatCode, FormatStyle, MeasurementType};
///
/// let code = FormatCode::new(FormatStyle::FullWord, false);
/// let text = format_measurement(2_000_000.0, MeasurementType::Bit, code)?;
/// assert_eq!(text, "2 Megabit");
/// # Ok::<(), unit_formatter::FormatError>(())
/// ```
pub fn format_measurement(
    value: f64,
    measurement: MeasurementType,
    code: FormatCode,
) -> Result<String, FormatError> {
    let scaled = scale_measurement(value, measurement)?;
    Ok(render(scaled, measurement, code))
}

/// Formats a byte count using powers of 1024
///
/// # Arguments
///
/// - `value` - Number of bytes, within `[0, MAX_VALUE]`
/// - `format_code` - Suffix style code, see [`FormatCode::parse`]; pass
///   [`DEFAULT_FORMAT_CODE`] for "KB"-style output
///
/// # Errors
///
/// - [`FormatError::InvalidUnitFormat`] when `format_code` is not recognised
/// - [`FormatError::InvalidRange`] when `value` is negative, NaN, or too large
///
/// # Examples
///
/// ```rust
/// use unit_formatter::byte_format;
///
/// assert_eq!(byte_format(0.0, "D")?, "0 Bytes");
/// assert_eq!(byte_format(1.0, "D")?, "1 Byte");
/// assert_eq!(byte_format(1536.0, "D")?, "1.5 KB");
/// assert_eq!(byte_format(1536.0, "d")?, "1.5 kb");
/// assert_eq!(byte_format(1536.0, "B")?, "1.5 KIB");
/// assert_eq!(byte_format(1536.0, "BF")?, "1.5 Kibibyte");
/// assert_eq!(byte_format(1536.0, "DF")?, "1.5 Kilobyte");
/// assert_eq!(byte_format(1536.0, "S")?, "1.5 K");
/// assert!(byte_format(-1.0, "D").is_err());
/// # Ok::<(), unit_formatter::FormatError>(())
/// ```
pub fn byte_format(value: f64, format_code: &str) -> Result<String, FormatError> {
    let code = FormatCode::parse(format_code)?;
    format_measurement(value, MeasurementType::Byte, code)
}

/// Formats a bit count using powers of 1000
///
/// Same codes and errors as [`byte_format`].
///
/// # Examples
///
/// ```rust
/// use unit_formatter::bit_format;
///
/// assert_eq!(bit_format(1_500_000.0, "DF")?, "1.5 Megabit");
/// assert_eq!(bit_format(12_000.0, "BF")?, "12 Kibibit");
/// assert_eq!(bit_format(999.0, "D")?, "999 Bits");
/// # Ok::<(), unit_formatter::FormatError>(())
/// ```
pub fn bit_format(value: f64, format_code: &str) -> Result<String, FormatError> {
    let code = FormatCode::parse(format_code)?;
    format_measurement(value, MeasurementType::Bit, code)
}

/// Formats `value` as bits when `format_bits` is set, as bytes otherwise
///
/// ```rust
/// assert_eq!(unit_formatter::format(2048.0, false, "D")?, "2 KB");
/// assert_eq!(unit_formatter::format(2048.0, true, "D")?, "2.04 KB");
/// # Ok::<(), unit_formatter::FormatError>(())
/// ```
pub fn format(value: f64, format_bits: bool, format_code: &str) -> Result<String, FormatError> {
    if format_bits {
        bit_format(value, format_code)
    } else {
        byte_format(value, format_code)
    }
}

/// Formats an integer byte count with the default code
///
/// Infallible shorthand for `byte_format(bytes as f64, "D")`, used for
/// allocator counters and other sizes that are known to be in range.
///
/// # Examples
///
/// ```rust
/// use unit_formatter::format_memory_size;
///
/// assert_eq!(format_memory_size(0), "0 Bytes");
/// assert_eq!(format_memory_size(1024), "1 KB");
/// assert_eq!(format_memory_size(1536), "1.5 KB");
/// assert_eq!(format_memory_size(1073741824), "1 GB");
/// ```
pub fn format_memory_size(bytes: u64) -> String {
    // u64::MAX is about 1.8e19, far below MAX_VALUE, so no range check is needed
    let measurement = MeasurementType::Byte;
    let scaled = select_scale(bytes as f64, measurement.base());
    render(scaled, measurement, FormatCode::default())
}
