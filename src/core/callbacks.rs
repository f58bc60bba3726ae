use crate::core::dynlock::DynLock;
use crate::core::table::MutexTable;
use crate::core::types::{LockMode, get_current_thread_id};
use anyhow::{Result, bail};
use parking_lot::RwLock;
use std::sync::Arc;

// The process-wide mutex table: None before init, populated after a
// successful init, None again after teardown. Kept behind an RwLock so
// install/uninstall are the only writers; the lock path takes a brief
// read guard, clones the Arc out, and releases the guard before parking
// on a slot.
lazy_static::lazy_static! {
    static ref STATIC_TABLE: RwLock<Option<Arc<MutexTable>>> = RwLock::new(None);
}

/// Publish a freshly-built mutex table as the process-wide table.
///
/// Fails if a table is already installed (double init).
pub(crate) fn install_table(table: MutexTable) -> Result<()> {
    let mut slot = STATIC_TABLE.write();
    if slot.is_some() {
        bail!("locking layer already initialized");
    }
    *slot = Some(Arc::new(table));
    Ok(())
}

/// Withdraw the process-wide table, returning the last reference to it
/// (plus any still held by in-flight callbacks).
pub(crate) fn uninstall_table() -> Option<Arc<MutexTable>> {
    STATIC_TABLE.write().take()
}

pub(crate) fn installed_table() -> Option<Arc<MutexTable>> {
    STATIC_TABLE.read().as_ref().cloned()
}

/// Thread-identity callback registered with the library.
pub fn thread_id_fn() -> u64 {
    get_current_thread_id() as u64
}

/// Static locking callback registered with the library.
///
/// LOCK blocks the calling thread until the slot's mutex is acquired;
/// UNLOCK releases it. The read/write bits in `mode` are ignored. The
/// library guarantees `slot` is in range and that every UNLOCK matches a
/// prior LOCK on the same slot from the same thread.
///
/// Panics if no table is installed: a call arriving outside the
/// init/teardown window means the library kept a stale callback pointer,
/// and failing fast beats touching freed state.
pub fn static_lock_fn(mode: LockMode, slot: usize) {
    let table = installed_table()
        .expect("static locking callback invoked with no mutex table installed");
    if mode.is_lock() {
        table.lock(slot);
    } else {
        // Matching prior lock on this slot is the library's contract
        unsafe { table.unlock(slot) };
    }
}

/// Dynamic lock creation callback registered with the library.
pub fn dyn_create_fn() -> *mut DynLock {
    DynLock::create()
}

/// Dynamic locking callback registered with the library.
///
/// Same LOCK/UNLOCK semantics as [`static_lock_fn`], operating on the
/// single mutex inside `handle`. The library guarantees the handle came
/// from [`dyn_create_fn`] and has not been destroyed.
pub fn dyn_lock_fn(mode: LockMode, handle: *mut DynLock) {
    if handle.is_null() {
        return;
    }
    unsafe {
        if mode.is_lock() {
            DynLock::lock(handle);
        } else {
            DynLock::unlock(handle);
        }
    }
}

/// Dynamic lock destruction callback registered with the library.
pub fn dyn_destroy_fn(handle: *mut DynLock) {
    if handle.is_null() {
        return;
    }
    unsafe { DynLock::destroy(handle) };
}
