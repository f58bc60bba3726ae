//! C API bindings for the cryptolock locking layer.
//!
//! These entry points let a C embedder drive the locking layer directly:
//! it queries the library for its declared lock count, calls
//! `cryptolock_init` with it, and registers the callback functions below
//! with the library's own registration API. Signatures match the classic
//! locking-callback contract, including the source file/line diagnostic
//! parameters, which are accepted and ignored.
//!
//! Library bootstrap and cleanup sequencing stay on the C side; this
//! surface only owns the mutex table and the callback bodies.

use crate::core::callbacks;
use crate::core::dynlock::DynLock;
use crate::core::table::MutexTable;
use crate::core::types::{LockMode, get_current_thread_id};
use std::ffi::c_void;
use std::os::raw::{c_char, c_int, c_ulong};

/// Initialize the locking layer with `num_locks` static lock slots.
///
/// Call once, before the library is used from more than one thread, with
/// the slot count the library declares it needs.
///
/// # Returns
/// * `0` on success
/// * `1` if the locking layer is already initialized
/// * `-1` if `num_locks` is negative
///
/// # Safety
/// Must not be called concurrently with `cryptolock_destroy` or with any
/// locking callback; the embedder serializes the lifecycle outside the
/// library's contention window.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cryptolock_init(num_locks: c_int) -> c_int {
    if num_locks < 0 {
        return -1;
    }
    match callbacks::install_table(MutexTable::new(num_locks as usize)) {
        Ok(()) => 0,
        Err(_) => 1, // Already initialized
    }
}

/// Tear the locking layer down, destroying every static lock slot.
///
/// # Returns
/// * `0` on success
/// * `1` if the locking layer was not initialized
///
/// # Safety
/// The caller must guarantee the library is quiescent: no thread may
/// hold a slot or invoke a locking callback from this call onward. The
/// embedder must also deregister the callbacks from the library so stray
/// calls fail fast instead of touching freed state.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cryptolock_destroy() -> c_int {
    match callbacks::uninstall_table() {
        Some(_) => 0,
        None => 1,
    }
}

/// Get a stable numeric identity for the calling thread.
///
/// Suitable for the library's thread-id callback. Distinct live threads
/// observe distinct values; the value is stable for the thread's
/// lifetime.
///
/// # Safety
/// This function is safe to call from FFI contexts.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cryptolock_thread_id() -> c_ulong {
    get_current_thread_id() as c_ulong
}

/// Static locking callback: acquire or release lock slot `n`.
///
/// `mode` is the library's mode bitfield (LOCK 0x01, UNLOCK 0x02, READ
/// 0x04, WRITE 0x08); read/write intent is ignored. `file` and `line`
/// identify the call site inside the library and are ignored.
///
/// # Safety
/// - The locking layer must be initialized; a call outside the
///   init/destroy window aborts the process rather than touching freed
///   state.
/// - `n` must be in range for the declared slot count, and every UNLOCK
///   must match a prior LOCK on the same slot from the same thread.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cryptolock_locking_function(
    mode: c_int,
    n: c_int,
    _file: *const c_char,
    _line: c_int,
) {
    callbacks::static_lock_fn(LockMode::from_bits(mode), n as usize);
}

/// Create a dynamic lock handle.
///
/// # Returns
/// * Opaque pointer to the handle; allocation failure aborts the process
///   (the library has no fallback locking strategy, so a null return
///   would be strictly worse than terminating)
///
/// # Safety
/// - The returned pointer must be released by `cryptolock_dynlock_destroy`
///   and by no other means.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cryptolock_dynlock_create(
    _file: *const c_char,
    _line: c_int,
) -> *mut c_void {
    DynLock::create() as *mut c_void
}

/// Acquire or release the mutex inside a dynamic lock handle.
///
/// # Safety
/// - `value` must be a pointer obtained from `cryptolock_dynlock_create`
///   whose destruction has not been requested (NULL is ignored).
/// - Every UNLOCK must match a prior LOCK on the same handle from the
///   same thread.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cryptolock_dynlock_lock(
    mode: c_int,
    value: *mut c_void,
    _file: *const c_char,
    _line: c_int,
) {
    callbacks::dyn_lock_fn(LockMode::from_bits(mode), value as *mut DynLock);
}

/// Destroy a dynamic lock handle and free its memory.
///
/// # Safety
/// - `value` must be a pointer obtained from `cryptolock_dynlock_create`,
///   not yet destroyed (NULL is ignored).
/// - No concurrent or future lock/unlock call may reference the handle
///   once this call begins.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cryptolock_dynlock_destroy(
    value: *mut c_void,
    _file: *const c_char,
    _line: c_int,
) {
    callbacks::dyn_destroy_fn(value as *mut DynLock);
}
