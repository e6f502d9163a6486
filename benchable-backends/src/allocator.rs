//! Allocation Tracking
//!
//! `TrackingAllocator` wraps the system allocator and counts allocations in
//! process-wide relaxed atomics. Install it as the global allocator in the
//! binary that runs memory-allocation suites:
//!
//! ```ignore
//! #[global_allocator]
//! static GLOBAL: TrackingAllocator = TrackingAllocator;
//! ```
//!
//! The memory backend calls `reset_allocation_counter()` before each case
//! body and reads `current_allocation()` after it. Counters are process
//! globals; suites run single-threaded (see the concurrency model), so a
//! case body's own allocations dominate what is counted.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicU64, Ordering};

static ALLOCATED_BYTES: AtomicU64 = AtomicU64::new(0);
static ALLOCATION_COUNT: AtomicU64 = AtomicU64::new(0);
static FREED_BYTES: AtomicU64 = AtomicU64::new(0);

/// Global allocator interceptor counting bytes and allocations.
pub struct TrackingAllocator;

// SAFETY: defers all allocation to `System`; only adds relaxed counter
// updates, which cannot violate the GlobalAlloc contract.
unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            ALLOCATED_BYTES.fetch_add(layout.size() as u64, Ordering::Relaxed);
            ALLOCATION_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        FREED_BYTES.fetch_add(layout.size() as u64, Ordering::Relaxed);
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = System.realloc(ptr, layout, new_size);
        if !new_ptr.is_null() {
            ALLOCATED_BYTES.fetch_add(new_size as u64, Ordering::Relaxed);
            ALLOCATION_COUNT.fetch_add(1, Ordering::Relaxed);
            FREED_BYTES.fetch_add(layout.size() as u64, Ordering::Relaxed);
        }
        new_ptr
    }
}

/// Zero all allocation counters.
pub fn reset_allocation_counter() {
    ALLOCATED_BYTES.store(0, Ordering::Relaxed);
    ALLOCATION_COUNT.store(0, Ordering::Relaxed);
    FREED_BYTES.store(0, Ordering::Relaxed);
}

/// Bytes allocated and allocation count since the last reset.
pub fn current_allocation() -> (u64, u64) {
    (
        ALLOCATED_BYTES.load(Ordering::Relaxed),
        ALLOCATION_COUNT.load(Ordering::Relaxed),
    )
}

/// Bytes allocated since the last reset and not yet freed.
pub fn retained_allocation() -> u64 {
    let allocated = ALLOCATED_BYTES.load(Ordering::Relaxed);
    let freed = FREED_BYTES.load(Ordering::Relaxed);
    allocated.saturating_sub(freed)
}

/// Serializes tests that touch the process-wide counters.
#[cfg(test)]
pub(crate) fn counter_test_lock() -> std::sync::MutexGuard<'static, ()> {
    use std::sync::{Mutex, OnceLock};
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    // The tracking allocator is not installed as the global allocator in
    // this test binary, so these tests drive the counters through the
    // GlobalAlloc impl directly.

    #[test]
    fn counters_track_alloc_and_dealloc() {
        let _guard = counter_test_lock();
        reset_allocation_counter();

        let layout = Layout::from_size_align(256, 8).unwrap();
        unsafe {
            let ptr = TrackingAllocator.alloc(layout);
            assert!(!ptr.is_null());
            let (bytes, count) = current_allocation();
            assert_eq!(bytes, 256);
            assert_eq!(count, 1);
            assert_eq!(retained_allocation(), 256);

            TrackingAllocator.dealloc(ptr, layout);
        }
        assert_eq!(retained_allocation(), 0);
        // Freeing never decreases the allocated totals.
        assert_eq!(current_allocation(), (256, 1));
    }

    #[test]
    fn realloc_counts_both_sides() {
        let _guard = counter_test_lock();
        reset_allocation_counter();

        let layout = Layout::from_size_align(128, 8).unwrap();
        unsafe {
            let ptr = TrackingAllocator.alloc(layout);
            assert!(!ptr.is_null());
            let grown = TrackingAllocator.realloc(ptr, layout, 512);
            assert!(!grown.is_null());

            let (bytes, count) = current_allocation();
            assert_eq!(bytes, 128 + 512);
            assert_eq!(count, 2);
            assert_eq!(retained_allocation(), 512);

            let grown_layout = Layout::from_size_align(512, 8).unwrap();
            TrackingAllocator.dealloc(grown, grown_layout);
        }
        assert_eq!(retained_allocation(), 0);
    }

    #[test]
    fn reset_zeroes_everything() {
        let _guard = counter_test_lock();
        let layout = Layout::from_size_align(64, 8).unwrap();
        unsafe {
            let ptr = TrackingAllocator.alloc(layout);
            TrackingAllocator.dealloc(ptr, layout);
        }

        reset_allocation_counter();
        assert_eq!(current_allocation(), (0, 0));
        assert_eq!(retained_allocation(), 0);
    }
}
