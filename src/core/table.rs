use parking_lot::RawMutex;
use parking_lot::lock_api::RawMutex as RawMutexApi;

/// The fixed table of static lock slots.
///
/// One mutex per slot the cryptographic library declares it needs,
/// index-addressed. The table is sized once at construction and never
/// grows; every slot is lockable from the moment `new` returns (a
/// partially-initialized table is not observable — allocation failure
/// aborts the process, which is the intended behavior for a subsystem
/// the library cannot run without).
///
/// Slots are raw mutexes rather than guard-based ones because the
/// library's callback protocol splits acquire and release across two
/// independent calls, possibly while the same thread holds several other
/// slots. There is nowhere for a guard to live.
pub struct MutexTable {
    slots: Box<[RawMutex]>,
}

impl MutexTable {
    /// Create a table with `n` initialized, unlocked slots.
    pub fn new(n: usize) -> Self {
        let slots = (0..n).map(|_| RawMutex::INIT).collect();
        MutexTable { slots }
    }

    /// Number of slots in the table.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True if the library declared zero static slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Block the calling thread until slot `slot` is acquired.
    ///
    /// The library guarantees `slot < len()`; an out-of-range index is a
    /// contract violation and panics.
    pub fn lock(&self, slot: usize) {
        self.slots[slot].lock();
    }

    /// Release slot `slot`.
    ///
    /// # Safety
    /// The slot's mutex must be held, acquired by a matching prior
    /// [`lock`](Self::lock) call. Unlocking an unheld slot is undefined
    /// behavior per the underlying raw mutex contract.
    pub unsafe fn unlock(&self, slot: usize) {
        unsafe { self.slots[slot].unlock() };
    }
}
