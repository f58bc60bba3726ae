use parking_lot::RawMutex;
use parking_lot::lock_api::RawMutex as RawMutexApi;

/// A dynamically-created lock handle.
///
/// The cryptographic library requests these on demand for transient or
/// instance-scoped synchronization the static slots do not cover. Each
/// handle is one heap allocation owning exactly one mutex; its identity
/// is its address, which the library carries around as an opaque token
/// and hands back unchanged on every lock, unlock, and destroy call.
///
/// No registry is kept on this side. The library is solely responsible
/// for handle bookkeeping: it must never use a handle after requesting
/// its destruction, and this crate does not defend against that race.
pub struct DynLock {
    mutex: RawMutex,
}

impl DynLock {
    /// Allocate a fresh handle and hand ownership to the caller as a raw
    /// pointer.
    ///
    /// Allocation failure aborts the process; returning null would leave
    /// the library with no usable lock and no fallback strategy, which
    /// is strictly worse than terminating.
    pub fn create() -> *mut DynLock {
        let handle = Box::new(DynLock {
            mutex: RawMutex::INIT,
        });
        Box::into_raw(handle)
    }

    /// Block until the handle's mutex is acquired.
    ///
    /// # Safety
    /// `handle` must be a pointer previously returned by
    /// [`create`](Self::create) whose destruction has not been requested.
    pub unsafe fn lock(handle: *mut DynLock) {
        unsafe { (*handle).mutex.lock() };
    }

    /// Release the handle's mutex.
    ///
    /// # Safety
    /// Same validity requirement as [`lock`](Self::lock), and the mutex
    /// must be held via a matching prior lock call.
    pub unsafe fn unlock(handle: *mut DynLock) {
        unsafe { (*handle).mutex.unlock() };
    }

    /// Destroy the handle's mutex and release its memory.
    ///
    /// # Safety
    /// `handle` must be a pointer previously returned by
    /// [`create`](Self::create), not yet destroyed, with no concurrent
    /// or future lock/unlock call referencing it. Use after this call
    /// begins is undefined behavior, per the library's own contract.
    pub unsafe fn destroy(handle: *mut DynLock) {
        unsafe { drop(Box::from_raw(handle)) };
    }
}
