//! Lock used for the game's interior state.
//!
//! With `std` this is [`std::sync::Mutex`], recovering from poisoning.
//! Without `std` the spin lock from the `spin` crate is used instead.

#[cfg(feature = "std")]
use std::sync::{Mutex as Inner, MutexGuard};

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use spin::{Mutex as Inner, MutexGuard};

/// A mutex whose `lock` never fails.
pub struct Mutex<T>(Inner<T>);

impl<T> Mutex<T> {
    pub const fn new(value: T) -> Self {
        Self(Inner::new(value))
    }

    #[cfg(feature = "std")]
    pub fn lock(&self) -> MutexGuard<'_, T> {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    #[cfg(all(not(feature = "std"), feature = "alloc"))]
    pub fn lock(&self) -> MutexGuard<'_, T> {
        self.0.lock()
    }
}
