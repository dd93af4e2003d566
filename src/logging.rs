use core::sync::atomic::Ordering;
use log::info;
use crate::platform::{LOG_FLUSHED, REAL_USAGE_METHOD, TRACKING_STARTED};

// ========== Logging System ==========

/// Notes that the tracking allocator has counted its first allocation
///
/// Runs inside the allocation path, so it only flips a flag: the log record
/// itself is emitted later by [`smart_try_flush_log`], outside the allocator.
#[inline]
pub(crate) fn record_tracking_started() {
    if !TRACKING_STARTED.load(Ordering::Relaxed) {
        mark_tracking_started();
    }
}

#[cold]
fn mark_tracking_started() {
    TRACKING_STARTED.store(true, Ordering::Relaxed);
}

/// Emits the pending "tracking active" record once a logger can take it
pub(crate) fn smart_try_flush_log() {
    // If already output, no need to try again
    if LOG_FLUSHED.load(Ordering::Relaxed) || !TRACKING_STARTED.load(Ordering::Relaxed) {
        return;
    }

    if LOG_FLUSHED
        .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
        .is_ok()
    {
        let _ = std::panic::catch_unwind(|| {
            info!(
                "Unit-formatter: tracking allocator active - real usage measured via {}",
                REAL_USAGE_METHOD
            );
        });
    }
}
