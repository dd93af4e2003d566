//! # Unit Formatter - Human-Readable Bit and Byte Quantities
//!
//! Turns raw bit or byte counts into strings such as `"1.46 MB"`, `"12 Kibibit"`
//! or `"1.5 kib"`, and tracks the process's own allocations so current and
//! peak memory usage can go through the same formatter.
//!
//! ## Quick Start
//!
//! ```rust
//! use unit_formatter::{bit_format, byte_format};
//!
//! assert_eq!(byte_format(1536.0, "D")?, "1.5 KB");
//! assert_eq!(bit_format(1_500_000.0, "DF")?, "1.5 Megabit");
//! # Ok::<(), unit_formatter::FormatError>(())
//! ```
//!
//! ## Format Codes
//!
//! | Code | Style | Kilo scale, bytes |
//! |------|-------|-------------------|
//! | `DF` | full word | `Kilobyte` |
//! | `BF` | "bi" abbreviation | `Kibibyte` |
//! | `S` | single letter | `K` |
//! | `D` | decimal SI (default) | `KB` |
//! | `B` | binary IEC | `KIB` |
//!
//! `BF`/`DF` are case-insensitive. Writing `s`, `b` or `d` in lowercase also
//! lowercases the rendered unit. Below the first scale every style shows the
//! measurement type itself: `"0 Bytes"`, `"1 Bit"`, `"512 Bytes"`, or `"B"`
//! for the single-letter style.
//!
//! Bytes scale by 1024, bits by 1000. Accepted values run from 0 to
//! [`MAX_VALUE`] inclusive; quantities are rounded to 3 decimals, then
//! truncated to 2.
//!
//! ## Memory Usage
//!
//! With the default `global` feature the crate installs [`TrackingAllocator`]
//! as the global allocator:
//!
//! ```rust
//! let text = unit_formatter::format_memory_peak_usage(false, "D")?;
//! println!("peak: {}", text);
//! unit_formatter::memory_reset_peak_usage();
//! # Ok::<(), unit_formatter::FormatError>(())
//! ```
//!
//! Applications that bring their own global allocator disable the `global`
//! feature; the formatting functions do not depend on it.

mod types;
mod error;
mod grammar;
mod scale;
mod render;
mod format;
mod platform;
mod runtime;
mod logging;
mod api;

pub use types::{
    FormatCode, FormatStyle, MeasurementType, ScaledQuantity, UsageReport, MAX_VALUE, UNIT_NAMES,
};
pub use error::FormatError;
pub use scale::scale_measurement;
pub use format::{
    bit_format, byte_format, format, format_measurement, format_memory_size, DEFAULT_FORMAT_CODE,
};
pub use runtime::TrackingAllocator;
pub use api::{
    format_memory_peak_usage,
    format_memory_usage,
    memory_peak_usage,
    memory_reset_peak_usage,
    memory_usage,
    usage_report,
    UsageSource,
};
