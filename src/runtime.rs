use std::alloc::System;
use core::alloc::{GlobalAlloc, Layout};
use core::sync::atomic::Ordering;
use crate::logging::record_tracking_started;
use crate::platform::{
    usable_size, CURRENT_BYTES, PEAK_BYTES, REAL_CURRENT_BYTES, REAL_PEAK_BYTES,
};

// ========== Tracking Allocator Implementation ==========

/// Global allocator that counts live and peak allocation on top of [`System`]
///
/// With the default `global` feature this crate installs it as the process
/// allocator. Without it, install it in the application:
///
/// ```rust,ignore
/// #[global_allocator]
/// static GLOBAL: unit_formatter::TrackingAllocator = unit_formatter::TrackingAllocator;
/// ```
///
/// The counters it maintains are read through [`memory_usage()`](crate::memory_usage),
/// [`memory_peak_usage()`](crate::memory_peak_usage) and the
/// [`UsageSource`](crate::UsageSource) impl.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrackingAllocator;

impl TrackingAllocator {
    #[inline]
    unsafe fn record_alloc(ptr: *mut u8, layout: Layout) {
        let size = layout.size();
        let current = CURRENT_BYTES.fetch_add(size, Ordering::Relaxed) + size;
        PEAK_BYTES.fetch_max(current, Ordering::Relaxed);

        let real = usable_size(ptr, layout);
        let real_current = REAL_CURRENT_BYTES.fetch_add(real, Ordering::Relaxed) + real;
        REAL_PEAK_BYTES.fetch_max(real_current, Ordering::Relaxed);

        record_tracking_started();
    }

    #[inline]
    fn record_release(size: usize, real: usize) {
        CURRENT_BYTES.fetch_sub(size, Ordering::Relaxed);
        REAL_CURRENT_BYTES.fetch_sub(real, Ordering::Relaxed);
    }
}

unsafe impl GlobalAlloc for TrackingAllocator {
    #[inline]
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            Self::record_alloc(ptr, layout);
        }
        ptr
    }

    #[inline]
    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc_zeroed(layout);
        if !ptr.is_null() {
            Self::record_alloc(ptr, layout);
        }
        ptr
    }

    #[inline]
    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        // Query before freeing, the block is gone afterwards
        let real = usable_size(ptr, layout);
        System.dealloc(ptr, layout);
        Self::record_release(layout.size(), real);
    }

    #[inline]
    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let old_real = usable_size(ptr, layout);
        let new_ptr = System.realloc(ptr, layout, new_size);

        // On failure the old block is untouched and stays counted
        if !new_ptr.is_null() {
            Self::record_release(layout.size(), old_real);
            let new_layout = Layout::from_size_align_unchecked(new_size, layout.align());
            Self::record_alloc(new_ptr, new_layout);
        }
        new_ptr
    }
}

#[cfg(feature = "global")]
#[global_allocator]
static GLOBAL: TrackingAllocator = TrackingAllocator;
