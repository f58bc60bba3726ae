// Core types
pub mod types;

// The embedded library's registration/cleanup contract
pub mod library;

// Static lock slots
pub mod table;

// Dynamic lock handles
pub mod dynlock;

// Registered callback functions + process-global state
pub mod callbacks;

use crate::core::library::CryptoLibrary;
use crate::core::table::MutexTable;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Lifecycle service for the locking layer.
///
/// Owns the one-time process-wide setup and teardown around an embedded
/// cryptographic library: bootstrapping the library, building the static
/// mutex table, registering the locking callbacks, and unwinding all of
/// it once the library is quiescent.
///
/// `start` must run before any other thread touches the library, and
/// `stop` only after every such thread has finished (typically: start
/// before spawning workers, stop after joining them). Neither operation
/// is safe to race against the other or against in-flight callbacks; a
/// second `start` while the layer is live is rejected with an error.
///
/// # Example
///
/// ```rust
/// use cryptolock::{CryptoLibrary, CryptoLock};
/// use cryptolock::{DynCreateFn, DynDestroyFn, DynLockFn, StaticLockFn, ThreadIdFn};
///
/// // A library shim; a real one wraps the C API.
/// struct QuietLibrary;
///
/// impl CryptoLibrary for QuietLibrary {
///     fn bootstrap(&self) {}
///     fn num_locks(&self) -> usize { 4 }
///     fn set_thread_id_callback(&self, _cb: Option<ThreadIdFn>) {}
///     fn set_locking_callback(&self, _cb: Option<StaticLockFn>) {}
///     fn set_dynlock_create_callback(&self, _cb: Option<DynCreateFn>) {}
///     fn set_dynlock_lock_callback(&self, _cb: Option<DynLockFn>) {}
///     fn set_dynlock_destroy_callback(&self, _cb: Option<DynDestroyFn>) {}
///     fn release_thread_state(&self) {}
///     fn cleanup_usage_aware(&self) {}
///     fn cleanup_global(&self) {}
///     fn free_compression_methods(&self) {}
/// }
///
/// let locking = CryptoLock::new(QuietLibrary);
/// locking.start().unwrap();
/// // ... spawn workers, drive the library concurrently ...
/// locking.stop();
/// ```
pub struct CryptoLock<L: CryptoLibrary> {
    library: L,
}

impl<L: CryptoLibrary> CryptoLock<L> {
    /// Wrap a library handle in a lifecycle service.
    pub fn new(library: L) -> Self {
        CryptoLock { library }
    }

    /// Access the wrapped library.
    pub fn library(&self) -> &L {
        &self.library
    }

    /// Perform the one-time process-wide setup.
    ///
    /// In order: bootstrap the library (error strings, core init, PRNG
    /// poll), build and publish a mutex table sized to the library's
    /// declared lock count, then register the five locking callbacks.
    /// From the moment registration completes, the library may invoke
    /// the callbacks from any of its threads.
    ///
    /// # Errors
    /// Fails if the locking layer is already initialized. Table
    /// allocation failure aborts the process outright; a half-built
    /// locking layer would corrupt the library's state silently.
    pub fn start(&self) -> Result<()> {
        self.library.bootstrap();

        let slots = self.library.num_locks();
        callbacks::install_table(MutexTable::new(slots))
            .context("failed to publish static mutex table")?;
        debug!(slots, "crypto locking layer initialized");

        self.library
            .set_thread_id_callback(Some(callbacks::thread_id_fn));
        self.library
            .set_locking_callback(Some(callbacks::static_lock_fn));
        self.library
            .set_dynlock_create_callback(Some(callbacks::dyn_create_fn));
        self.library
            .set_dynlock_lock_callback(Some(callbacks::dyn_lock_fn));
        self.library
            .set_dynlock_destroy_callback(Some(callbacks::dyn_destroy_fn));

        Ok(())
    }

    /// Tear the locking layer down.
    ///
    /// Caller contract: no other thread is using the library at this
    /// point. In order: release this thread's library-internal error
    /// state, run the usage-aware global cleanup, run the thread-unsafe
    /// global cleanup, free the compression-method table, withdraw and
    /// drop the mutex table, and finally clear all five callbacks so a
    /// stray call from not-yet-unloaded library code fails fast instead
    /// of touching freed state.
    pub fn stop(&self) {
        self.library.release_thread_state();
        self.library.cleanup_usage_aware();
        self.library.cleanup_global();
        self.library.free_compression_methods();

        match callbacks::uninstall_table() {
            Some(table) => {
                if Arc::strong_count(&table) > 1 {
                    // Teardown anomaly: reported, not fatal. Process exit
                    // reclaims the slots regardless.
                    error!(
                        slots = table.len(),
                        "mutex table still referenced during teardown, slots leak until exit"
                    );
                }
                debug!(slots = table.len(), "crypto locking layer shut down");
            }
            None => warn!("teardown requested but locking layer was not initialized"),
        }

        self.library.set_thread_id_callback(None);
        self.library.set_locking_callback(None);
        self.library.set_dynlock_create_callback(None);
        self.library.set_dynlock_lock_callback(None);
        self.library.set_dynlock_destroy_callback(None);
    }
}
