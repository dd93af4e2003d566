use core::sync::atomic::Ordering;
use log::debug;
use crate::error::FormatError;
use crate::format::byte_format;
use crate::logging::smart_try_flush_log;
use crate::platform::{CURRENT_BYTES, PEAK_BYTES, REAL_CURRENT_BYTES, REAL_PEAK_BYTES};
use crate::runtime::TrackingAllocator;
use crate::types::UsageReport;

// ========== Usage Sources ==========

/// Something that can report current and peak allocation in bytes
///
/// [`TrackingAllocator`] is the built-in source. Implement this for other
/// counters (or fixed values in tests) to reuse the formatting helpers.
///
/// # Example
///
/// ```rust
/// use unit_formatter::UsageSource;
///
/// struct Fixed(usize);
///
/// impl UsageSource for Fixed {
///     fn current(&self, _real_usage: bool) -> usize { self.0 }
///     fn peak(&self, _real_usage: bool) -> usize { self.0 }
///     fn reset_peak(&self) {}
/// }
///
/// assert_eq!(Fixed(3 << 20).format_current(false, "DF")?, "3 Megabyte");
/// # Ok::<(), unit_formatter::FormatError>(())
/// ```
pub trait UsageSource {
    /// Bytes allocated right now; `real_usage` includes allocator overhead
    fn current(&self, real_usage: bool) -> usize;

    /// Highest allocation since start or the last [`reset_peak`](UsageSource::reset_peak)
    fn peak(&self, real_usage: bool) -> usize;

    /// Moves the peak baseline down to the current usage
    fn reset_peak(&self);

    /// Current usage rendered through [`byte_format`]
    fn format_current(&self, real_usage: bool, format_code: &str) -> Result<String, FormatError> {
        byte_format(self.current(real_usage) as f64, format_code)
    }

    /// Peak usage rendered through [`byte_format`]
    fn format_peak(&self, real_usage: bool, format_code: &str) -> Result<String, FormatError> {
        byte_format(self.peak(real_usage) as f64, format_code)
    }

    /// All four counters at once
    fn report(&self) -> UsageReport {
        UsageReport {
            current: self.current(false),
            peak: self.peak(false),
            real_current: self.current(true),
            real_peak: self.peak(true),
        }
    }
}

impl UsageSource for TrackingAllocator {
    fn current(&self, real_usage: bool) -> usize {
        smart_try_flush_log();
        if real_usage {
            REAL_CURRENT_BYTES.load(Ordering::Relaxed)
        } else {
            CURRENT_BYTES.load(Ordering::Relaxed)
        }
    }

    fn peak(&self, real_usage: bool) -> usize {
        smart_try_flush_log();
        if real_usage {
            REAL_PEAK_BYTES.load(Ordering::Relaxed)
        } else {
            PEAK_BYTES.load(Ordering::Relaxed)
        }
    }

    fn reset_peak(&self) {
        smart_try_flush_log();
        let current = CURRENT_BYTES.load(Ordering::Relaxed);
        let real_current = REAL_CURRENT_BYTES.load(Ordering::Relaxed);
        PEAK_BYTES.store(current, Ordering::Relaxed);
        REAL_PEAK_BYTES.store(real_current, Ordering::Relaxed);
        debug!(
            "Peak usage reset to {} bytes ({} bytes real)",
            current, real_current
        );
    }
}

// ========== Public API ==========

/// Bytes currently allocated through the tracking allocator
///
/// With `real_usage` set, the figure counts the block sizes the system
/// allocator handed out, which includes its rounding overhead.
/// Returns 0 if [`TrackingAllocator`] is not the global allocator.
///
/// # Example
///
/// ```rust
/// let held = std::hint::black_box(vec![0u8; 1 << 20]);
/// assert!(unit_formatter::memory_usage(false) >= held.len());
/// assert!(unit_formatter::memory_usage(true) >= held.len());
/// ```
pub fn memory_usage(real_usage: bool) -> usize {
    TrackingAllocator.current(real_usage)
}

/// Highest [`memory_usage`] since start or the last [`memory_reset_peak_usage`]
pub fn memory_peak_usage(real_usage: bool) -> usize {
    TrackingAllocator.peak(real_usage)
}

/// Resets both peak counters to the current usage
///
/// # Example
///
/// ```rust
/// drop(vec![0u8; 8 << 20]);
/// unit_formatter::memory_reset_peak_usage();
/// assert!(unit_formatter::memory_peak_usage(false) < 8 << 20);
/// ```
pub fn memory_reset_peak_usage() {
    TrackingAllocator.reset_peak()
}

/// Formats [`memory_usage`] with a format code
///
/// ```rust
/// let text = unit_formatter::format_memory_usage(false, "DF")?;
/// println!("allocated: {text}");
/// # Ok::<(), unit_formatter::FormatError>(())
/// ```
pub fn format_memory_usage(real_usage: bool, format_code: &str) -> Result<String, FormatError> {
    TrackingAllocator.format_current(real_usage, format_code)
}

/// Formats [`memory_peak_usage`] with a format code
pub fn format_memory_peak_usage(real_usage: bool, format_code: &str) -> Result<String, FormatError> {
    TrackingAllocator.format_peak(real_usage, format_code)
}

/// Snapshot of all tracking allocator counters
pub fn usage_report() -> UsageReport {
    TrackingAllocator.report()
}
