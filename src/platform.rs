use core::alloc::Layout;
use core::sync::atomic::{AtomicBool, AtomicUsize};

// ========== Allocation Counters ==========

// Process-wide counters maintained by the tracking allocator.
// "Real" counters measure usable block sizes as reported by the platform allocator.
pub(crate) static CURRENT_BYTES: AtomicUsize = AtomicUsize::new(0);
pub(crate) static PEAK_BYTES: AtomicUsize = AtomicUsize::new(0);
pub(crate) static REAL_CURRENT_BYTES: AtomicUsize = AtomicUsize::new(0);
pub(crate) static REAL_PEAK_BYTES: AtomicUsize = AtomicUsize::new(0);

pub(crate) static TRACKING_STARTED: AtomicBool = AtomicBool::new(false);
pub(crate) static LOG_FLUSHED: AtomicBool = AtomicBool::new(false);

// ========== Usable Size Detection ==========

/// Name of the mechanism behind real-usage figures, for the startup log line
#[cfg(all(target_os = "linux", target_env = "gnu"))]
pub(crate) const REAL_USAGE_METHOD: &str = "malloc_usable_size";

#[cfg(target_os = "macos")]
pub(crate) const REAL_USAGE_METHOD: &str = "malloc_size";

#[cfg(not(any(all(target_os = "linux", target_env = "gnu"), target_os = "macos")))]
pub(crate) const REAL_USAGE_METHOD: &str = "requested layout size";

/// Size of the block the system allocator actually handed out for `ptr`
///
/// # Safety
///
/// `ptr` must be a live allocation obtained from `std::alloc::System` with `layout`.
#[cfg(all(target_os = "linux", target_env = "gnu"))]
#[inline]
pub(crate) unsafe fn usable_size(ptr: *mut u8, _layout: Layout) -> usize {
    libc::malloc_usable_size(ptr as *mut libc::c_void)
}

#[cfg(target_os = "macos")]
#[inline]
pub(crate) unsafe fn usable_size(ptr: *mut u8, _layout: Layout) -> usize {
    libc::malloc_size(ptr as *const libc::c_void)
}

// Windows HeapAlloc, musl and the rest: no cheap query, fall back to the request
#[cfg(not(any(all(target_os = "linux", target_env = "gnu"), target_os = "macos")))]
#[inline]
pub(crate) unsafe fn usable_size(_ptr: *mut u8, layout: Layout) -> usize {
    layout.size()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::alloc::{GlobalAlloc, System};

    #[test]
    fn usable_size_covers_the_request() {
        let layout = Layout::from_size_align(100, 8).unwrap();
        unsafe {
            let ptr = System.alloc(layout);
            assert!(!ptr.is_null());
            assert!(usable_size(ptr, layout) >= layout.size());
            System.dealloc(ptr, layout);
        }
    }

    #[test]
    fn usable_size_covers_over_aligned_requests() {
        let layout = Layout::from_size_align(40, 64).unwrap();
        unsafe {
            let ptr = System.alloc(layout);
            assert!(!ptr.is_null());
            assert!(usable_size(ptr, layout) >= layout.size());
            System.dealloc(ptr, layout);
        }
    }
}
