use cryptolock::{
    CryptoLibrary, DynCreateFn, DynDestroyFn, DynLock, DynLockFn, LockMode, StaticLockFn,
    ThreadIdFn,
};
use parking_lot::Mutex;
use std::sync::Arc;

// The mutex table is process-global, so scenarios that start and stop
// the locking layer must not interleave within one test binary.
lazy_static::lazy_static! {
    pub static ref SERIAL: Mutex<()> = Mutex::new(());
}

/// Recording double for the embedded cryptographic library.
///
/// Stores whatever callbacks the lifecycle registers and logs every call
/// made against the library surface, in order. Driver methods invoke the
/// stored callbacks exactly the way the real library would: straight
/// function calls from whichever thread asks.
pub struct FakeLibrary {
    num_locks: usize,
    calls: Mutex<Vec<&'static str>>,
    thread_id_cb: Mutex<Option<ThreadIdFn>>,
    locking_cb: Mutex<Option<StaticLockFn>>,
    dyn_create_cb: Mutex<Option<DynCreateFn>>,
    dyn_lock_cb: Mutex<Option<DynLockFn>>,
    dyn_destroy_cb: Mutex<Option<DynDestroyFn>>,
}

#[allow(dead_code)]
impl FakeLibrary {
    pub fn new(num_locks: usize) -> Arc<Self> {
        Arc::new(FakeLibrary {
            num_locks,
            calls: Mutex::new(Vec::new()),
            thread_id_cb: Mutex::new(None),
            locking_cb: Mutex::new(None),
            dyn_create_cb: Mutex::new(None),
            dyn_lock_cb: Mutex::new(None),
            dyn_destroy_cb: Mutex::new(None),
        })
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().push(call);
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().clone()
    }

    pub fn all_callbacks_registered(&self) -> bool {
        self.thread_id_cb.lock().is_some()
            && self.locking_cb.lock().is_some()
            && self.dyn_create_cb.lock().is_some()
            && self.dyn_lock_cb.lock().is_some()
            && self.dyn_destroy_cb.lock().is_some()
    }

    pub fn no_callbacks_registered(&self) -> bool {
        self.thread_id_cb.lock().is_none()
            && self.locking_cb.lock().is_none()
            && self.dyn_create_cb.lock().is_none()
            && self.dyn_lock_cb.lock().is_none()
            && self.dyn_destroy_cb.lock().is_none()
    }

    // Drivers: what the library does with the registered callbacks.

    pub fn thread_id(&self) -> u64 {
        let cb = (*self.thread_id_cb.lock()).expect("thread-id callback not registered");
        cb()
    }

    /// The registered static locking function, as the plain fn pointer
    /// the library would stash and call from any thread.
    pub fn locking_fn(&self) -> StaticLockFn {
        (*self.locking_cb.lock()).expect("locking callback not registered")
    }

    pub fn lock(&self, slot: usize) {
        (self.locking_fn())(LockMode::LOCK | LockMode::WRITE, slot);
    }

    pub fn unlock(&self, slot: usize) {
        (self.locking_fn())(LockMode::UNLOCK | LockMode::WRITE, slot);
    }

    pub fn dyn_create(&self) -> *mut DynLock {
        let cb = (*self.dyn_create_cb.lock()).expect("dynlock create callback not registered");
        cb()
    }

    pub fn dyn_lock_fn(&self) -> DynLockFn {
        (*self.dyn_lock_cb.lock()).expect("dynlock lock callback not registered")
    }

    pub fn dyn_lock(&self, handle: *mut DynLock) {
        (self.dyn_lock_fn())(LockMode::LOCK | LockMode::WRITE, handle);
    }

    pub fn dyn_unlock(&self, handle: *mut DynLock) {
        (self.dyn_lock_fn())(LockMode::UNLOCK | LockMode::WRITE, handle);
    }

    pub fn dyn_destroy(&self, handle: *mut DynLock) {
        let cb = (*self.dyn_destroy_cb.lock()).expect("dynlock destroy callback not registered");
        cb(handle);
    }
}

impl CryptoLibrary for FakeLibrary {
    fn bootstrap(&self) {
        self.record("bootstrap");
    }

    fn num_locks(&self) -> usize {
        self.record("num_locks");
        self.num_locks
    }

    fn set_thread_id_callback(&self, cb: Option<ThreadIdFn>) {
        self.record(if cb.is_some() {
            "set_thread_id_callback"
        } else {
            "clear_thread_id_callback"
        });
        *self.thread_id_cb.lock() = cb;
    }

    fn set_locking_callback(&self, cb: Option<StaticLockFn>) {
        self.record(if cb.is_some() {
            "set_locking_callback"
        } else {
            "clear_locking_callback"
        });
        *self.locking_cb.lock() = cb;
    }

    fn set_dynlock_create_callback(&self, cb: Option<DynCreateFn>) {
        self.record(if cb.is_some() {
            "set_dynlock_create_callback"
        } else {
            "clear_dynlock_create_callback"
        });
        *self.dyn_create_cb.lock() = cb;
    }

    fn set_dynlock_lock_callback(&self, cb: Option<DynLockFn>) {
        self.record(if cb.is_some() {
            "set_dynlock_lock_callback"
        } else {
            "clear_dynlock_lock_callback"
        });
        *self.dyn_lock_cb.lock() = cb;
    }

    fn set_dynlock_destroy_callback(&self, cb: Option<DynDestroyFn>) {
        self.record(if cb.is_some() {
            "set_dynlock_destroy_callback"
        } else {
            "clear_dynlock_destroy_callback"
        });
        *self.dyn_destroy_cb.lock() = cb;
    }

    fn release_thread_state(&self) {
        self.record("release_thread_state");
    }

    fn cleanup_usage_aware(&self) {
        self.record("cleanup_usage_aware");
    }

    fn cleanup_global(&self) {
        self.record("cleanup_global");
    }

    fn free_compression_methods(&self) {
        self.record("free_compression_methods");
    }
}
