use core::{
    cell::UnsafeCell,
    mem::MaybeUninit,
    sync::atomic::{AtomicU8, Ordering},
};

/// 0 = EMPTY, 1 = WRITING, 2 = SET
const EMPTY: u8 = 0;
const WRITING: u8 = 1;
const SET: u8 = 2;

/// A write-once slot that never blocks.
///
/// Unlike a once-cell with `get_or_init`, losing the race to set the value
/// does not wait for the winner: the loser gets its value back.
pub struct HookCell<T> {
    state: AtomicU8,
    value: UnsafeCell<MaybeUninit<T>>,
}

impl<T> Default for HookCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> HookCell<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: AtomicU8::new(EMPTY),
            value: UnsafeCell::new(MaybeUninit::uninit()),
        }
    }

    /// Returns `Some(&T)` once a value has been published.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        if self.state.load(Ordering::Acquire) == SET {
            // SAFETY: SET guarantees the write is done and never repeated
            Some(unsafe { (*self.value.get()).assume_init_ref() })
        } else {
            None
        }
    }

    /// Stores `value` if the cell is still empty.
    ///
    /// # Errors
    /// Hands `value` back if another value was set, or is being set.
    pub fn try_set(&self, value: T) -> Result<(), T> {
        if self
            .state
            .compare_exchange(EMPTY, WRITING, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(value);
        }

        // We are the only writer
        unsafe {
            (*self.value.get()).write(value);
        }

        // Publish value before marking SET
        self.state.store(SET, Ordering::Release);
        Ok(())
    }
}

impl<T> Drop for HookCell<T> {
    fn drop(&mut self) {
        if *self.state.get_mut() == SET {
            // SAFETY: SET means initialized, and `&mut self` means no readers
            unsafe { self.value.get_mut().assume_init_drop() }
        }
    }
}

// Safety: readers only see the value after SET; there is a single writer.
// `try_set` moves a `T` in through `&self`, so sharing also needs `T: Send`.
unsafe impl<T: Send + Sync> Sync for HookCell<T> {}
unsafe impl<T: Send> Send for HookCell<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sync<T: Sync>() {}

    #[test]
    fn shareable_when_value_is_send_and_sync() {
        assert_sync::<HookCell<fn(u8) -> u8>>();
        assert_sync::<HookCell<u64>>();
    }

    #[test]
    fn empty_until_set() {
        let cell = HookCell::<u32>::new();
        assert!(cell.get().is_none());

        assert_eq!(cell.try_set(7), Ok(()));
        assert_eq!(cell.get(), Some(&7));
    }

    #[test]
    fn second_set_hands_value_back() {
        let cell = HookCell::new();
        assert_eq!(cell.try_set(1u8), Ok(()));
        assert_eq!(cell.try_set(2u8), Err(2));
        assert_eq!(cell.get(), Some(&1));
    }

    #[test]
    fn drops_stored_value() {
        use std::rc::Rc;

        let shared = Rc::new(());
        {
            let cell = HookCell::new();
            assert!(cell.try_set(Rc::clone(&shared)).is_ok());
            assert_eq!(Rc::strong_count(&shared), 2);
        }
        assert_eq!(Rc::strong_count(&shared), 1);
    }
}
