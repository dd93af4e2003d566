use core::fmt;
use crate::format::format_memory_size;

// ========== Unit Table ==========

/// Scale names ordered by exponent: index `n` stands for `base^n`.
///
/// Index 0 is the unscaled quantity and renders as the measurement type
/// itself ("Bit"/"Byte") rather than as a prefixed unit.
pub const UNIT_NAMES: [&str; 9] = [
    "Byte", "Kilo", "Mega", "Giga", "Tera", "Peta", "Exa", "Zetta", "Yotta",
];

/// Index of the last entry in [`UNIT_NAMES`] ("Yotta").
pub(crate) const LAST_UNIT_INDEX: usize = UNIT_NAMES.len() - 1;

/// Largest measurement accepted by the formatter (inclusive).
///
/// This is the largest value representable at the Yotta scale under base 1024.
pub const MAX_VALUE: f64 = 1.2379400392854e27;

// ========== Measurement ==========

/// What a measured quantity counts, which also fixes the scaling base
///
/// # Example
///
/// ```rust
/// use unit_formatter::MeasurementType;
///
/// assert_eq!(MeasurementType::Bit.base(), 1000.0);
/// assert_eq!(MeasurementType::Byte.base(), 1024.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasurementType {
    /// Bits, scaled by powers of 1000
    Bit,

    /// Bytes, scaled by powers of 1024
    Byte,
}

impl MeasurementType {
    /// Scaling base for this measurement type
    pub const fn base(self) -> f64 {
        match self {
            MeasurementType::Bit => 1000.0,
            MeasurementType::Byte => 1024.0,
        }
    }

    /// Capitalized singular name, as shown at the unscaled index
    pub const fn name(self) -> &'static str {
        match self {
            MeasurementType::Bit => "Bit",
            MeasurementType::Byte => "Byte",
        }
    }

    /// Lowercase name used when composing prefixed units ("Kilobit")
    pub(crate) const fn suffix(self) -> &'static str {
        match self {
            MeasurementType::Bit => "bit",
            MeasurementType::Byte => "byte",
        }
    }
}

// ========== Format Code ==========

/// Unit suffix rendering style selected by a format code
///
/// Examples below are for the Kilo scale of a byte measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatStyle {
    /// Unit name plus measurement type: "Kilobyte" (code `DF`)
    FullWord,

    /// First two letters of the unit name, "bi", measurement type: "Kibibyte" (code `BF`)
    AbbreviatedBi,

    /// First letter of the unit name alone: "K" (code `S`)
    SingleLetter,

    /// First letter plus "B": "KB" (code `D`, the default)
    DecimalSi,

    /// First letter plus "IB": "KIB" (code `B`)
    BinaryIec,
}

/// Parsed format code: a style plus the lowercase-output flag
///
/// Obtained from a code string with [`FormatCode::parse`] or [`str::parse`].
/// The default is the `D` code (decimal-SI, original case).
///
/// # Example
///
/// ```rust
/// use unit_formatter::{FormatCode, FormatStyle};
///
/// let code: FormatCode = "b".parse().unwrap();
/// assert_eq!(code.style, FormatStyle::BinaryIec);
/// assert!(code.lowercase_output);
///
/// assert_eq!(FormatCode::default(), "D".parse().unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatCode {
    /// Suffix style
    pub style: FormatStyle,

    /// Lowercase the whole rendered unit text
    pub lowercase_output: bool,
}

impl Default for FormatCode {
    fn default() -> Self {
        Self::new(FormatStyle::DecimalSi, false)
    }
}

// ========== Scaled Result ==========

/// A measurement divided down to its display scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledQuantity {
    /// `value / base^unit_index`
    pub quantity: f64,

    /// Index into [`UNIT_NAMES`], never above 8
    pub unit_index: usize,
}

impl ScaledQuantity {
    /// Scale name for this result, e.g. "Kilo"
    pub fn unit_name(&self) -> &'static str {
        UNIT_NAMES[self.unit_index]
    }
}

// ========== Usage Report ==========

/// Snapshot of the tracking allocator's counters, in bytes
///
/// Taken by [`usage_report()`](crate::usage_report). The `Display` impl
/// renders every field with the default format code.
///
/// # Example
///
/// ```rust
/// let report = unit_formatter::usage_report();
/// assert!(report.peak >= report.current);
/// println!("{}", report);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UsageReport {
    /// Bytes currently allocated, as requested by callers
    pub current: usize,

    /// Highest value of `current` since start or the last peak reset
    pub peak: usize,

    /// Bytes currently allocated, measured in allocator block sizes
    pub real_current: usize,

    /// Highest value of `real_current` since start or the last peak reset
    pub real_peak: usize,
}

impl fmt::Display for UsageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "current {}, peak {} (real: current {}, peak {})",
            format_memory_size(self.current as u64),
            format_memory_size(self.peak as u64),
            format_memory_size(self.real_current as u64),
            format_memory_size(self.real_peak as u64),
        )
    }
}
