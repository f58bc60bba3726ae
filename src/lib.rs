//! # Cryptolock
//!
//! Thread-safety glue for legacy cryptographic libraries that outsource
//! their locking to the embedding process.
//!
//! Libraries of the OpenSSL 1.0.x generation keep internal state (PRNG,
//! session caches, error queues) that is not safe for concurrent access
//! unless the embedder registers a set of locking callbacks. Cryptolock
//! implements that contract: a fixed table of statically-numbered lock
//! slots, heap-allocated dynamic lock handles created on demand by the
//! library, a stable per-thread identity source, and a lifecycle service
//! that wires everything up once per process and tears it down at exit.
//!
//! ## Features
//!
//! - One-shot process-wide init and teardown, restartable in test harnesses
//! - Static lock slots sized to the library's declared lock count
//! - Opaque dynamic lock handles with address identity
//! - Stable numeric thread identities
//! - C ABI entry points for embedders driving the registration from C

mod core;
pub use core::{
    CryptoLock,
    dynlock::DynLock,
    library::{CryptoLibrary, DynCreateFn, DynDestroyFn, DynLockFn, StaticLockFn, ThreadIdFn},
    table::MutexTable,
    types::{LockMode, ThreadId, get_current_thread_id},
};

pub mod ffi;
