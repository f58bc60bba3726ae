use crate::core::dynlock::DynLock;
use crate::core::types::LockMode;
use std::sync::Arc;

/// Thread-identity callback: returns a stable numeric id for the calling thread
pub type ThreadIdFn = fn() -> u64;

/// Static locking callback: acquires or releases one numbered lock slot
pub type StaticLockFn = fn(mode: LockMode, slot: usize);

/// Dynamic lock creation callback: returns an opaque handle owning one mutex
pub type DynCreateFn = fn() -> *mut DynLock;

/// Dynamic locking callback: acquires or releases the mutex inside a handle
pub type DynLockFn = fn(mode: LockMode, handle: *mut DynLock);

/// Dynamic lock destruction callback: tears down a handle and frees it
pub type DynDestroyFn = fn(handle: *mut DynLock);

/// The registration and cleanup surface of the embedded cryptographic library.
///
/// This trait is the crate's only external interface: everything the
/// lifecycle service needs from the library it is making thread-safe.
/// The five callback setters are the inversion-of-control seam — once
/// registered, the library invokes the callbacks from any of its threads
/// at times of its own choosing, with no further involvement from this
/// crate. Passing `None` to a setter deregisters the callback, after
/// which the library must not invoke it.
///
/// Implementations for a real library are thin shims over its C API; the
/// test suite implements it with a recording double.
pub trait CryptoLibrary {
    /// One-time library bootstrap: error-string tables, core init,
    /// internal PRNG seeding/polling. Called exactly once, at the start
    /// of lifecycle init, before any lock slot exists.
    fn bootstrap(&self);

    /// Number of static lock slots the library requires. Queried once
    /// during init; the mutex table is sized to this value.
    fn num_locks(&self) -> usize;

    fn set_thread_id_callback(&self, cb: Option<ThreadIdFn>);
    fn set_locking_callback(&self, cb: Option<StaticLockFn>);
    fn set_dynlock_create_callback(&self, cb: Option<DynCreateFn>);
    fn set_dynlock_lock_callback(&self, cb: Option<DynLockFn>);
    fn set_dynlock_destroy_callback(&self, cb: Option<DynDestroyFn>);

    /// Release the calling thread's library-internal error state.
    fn release_thread_state(&self);

    /// Usage-aware global cleanup. Safe even if other threads recently
    /// finished using the library.
    fn cleanup_usage_aware(&self);

    /// Thread-unsafe global cleanup: error strings, digest/cipher
    /// registries, generic extension data. The caller must guarantee no
    /// other thread is concurrently using the library.
    fn cleanup_global(&self);

    /// Release the process-global compression-method table.
    fn free_compression_methods(&self);
}

// Library handles are routinely shared between the lifecycle service and
// the threads driving the library, so the contract passes through Arc.
impl<L: CryptoLibrary + ?Sized> CryptoLibrary for Arc<L> {
    fn bootstrap(&self) {
        (**self).bootstrap()
    }

    fn num_locks(&self) -> usize {
        (**self).num_locks()
    }

    fn set_thread_id_callback(&self, cb: Option<ThreadIdFn>) {
        (**self).set_thread_id_callback(cb)
    }

    fn set_locking_callback(&self, cb: Option<StaticLockFn>) {
        (**self).set_locking_callback(cb)
    }

    fn set_dynlock_create_callback(&self, cb: Option<DynCreateFn>) {
        (**self).set_dynlock_create_callback(cb)
    }

    fn set_dynlock_lock_callback(&self, cb: Option<DynLockFn>) {
        (**self).set_dynlock_lock_callback(cb)
    }

    fn set_dynlock_destroy_callback(&self, cb: Option<DynDestroyFn>) {
        (**self).set_dynlock_destroy_callback(cb)
    }

    fn release_thread_state(&self) {
        (**self).release_thread_state()
    }

    fn cleanup_usage_aware(&self) {
        (**self).cleanup_usage_aware()
    }

    fn cleanup_global(&self) {
        (**self).cleanup_global()
    }

    fn free_compression_methods(&self) {
        (**self).free_compression_methods()
    }
}
