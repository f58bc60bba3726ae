use std::ops::BitOr;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Thread identifier type
///
/// The numeric identity handed to the cryptographic library for its
/// internal per-thread bookkeeping (error queues, debug output). The
/// library treats the value as opaque.
pub type ThreadId = usize;

// Global counter for assigning unique thread IDs
static THREAD_ID_COUNTER: AtomicUsize = AtomicUsize::new(1);

// Thread-local storage for each thread's assigned ID
thread_local! {
    static THREAD_ID: ThreadId = {
        // Each thread gets a unique ID once, when this is first accessed
        THREAD_ID_COUNTER.fetch_add(1, Ordering::SeqCst)
    };
}

/// Get a unique identifier of the current thread
///
/// Always returns the same ID for the lifetime of the thread, never
/// blocks, and has no side effect beyond the first-use assignment. Safe
/// to call from inside the library's critical sections.
pub fn get_current_thread_id() -> ThreadId {
    THREAD_ID.with(|&id| id)
}

/// Lock operation mode bitfield
///
/// Mirrors the mode word the cryptographic library passes to its locking
/// callbacks: a LOCK or UNLOCK bit plus an informational READ or WRITE
/// bit. The read/write distinction is recorded but not acted on; every
/// slot and handle is a single exclusive mutex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockMode(i32);

impl LockMode {
    /// Acquire the lock
    pub const LOCK: LockMode = LockMode(0x01);
    /// Release the lock
    pub const UNLOCK: LockMode = LockMode(0x02);
    /// Caller intends read access (informational)
    pub const READ: LockMode = LockMode(0x04);
    /// Caller intends write access (informational)
    pub const WRITE: LockMode = LockMode(0x08);

    /// Reconstruct a mode from the raw wire value
    pub const fn from_bits(bits: i32) -> Self {
        LockMode(bits)
    }

    /// Raw wire value of this mode
    pub const fn bits(self) -> i32 {
        self.0
    }

    /// True if the LOCK bit is set; false means release
    pub const fn is_lock(self) -> bool {
        self.0 & Self::LOCK.0 != 0
    }

    /// True if the READ bit is set
    pub const fn is_read(self) -> bool {
        self.0 & Self::READ.0 != 0
    }
}

impl BitOr for LockMode {
    type Output = LockMode;

    fn bitor(self, rhs: LockMode) -> LockMode {
        LockMode(self.0 | rhs.0)
    }
}
