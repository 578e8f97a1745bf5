use crate::error::DeckError;

#[cfg(feature = "std")]
pub type MutexGuard<'a, T> = std::sync::MutexGuard<'a, T>;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub type MutexGuard<'a, T> = spin::MutexGuard<'a, T>;

#[cfg(feature = "std")]
pub struct Mutex<T>(std::sync::Mutex<T>);

#[cfg(feature = "std")]
impl<T> Mutex<T> {
    pub const fn new(value: T) -> Self {
        Self(std::sync::Mutex::new(value))
    }

    /// Poisoning is reported, not recovered.
    pub fn lock(&self) -> Result<MutexGuard<'_, T>, DeckError> {
        self.0.lock().map_err(|_| DeckError::Poisoned)
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub struct Mutex<T>(spin::Mutex<T>);

#[cfg(all(not(feature = "std"), feature = "alloc"))]
impl<T> Mutex<T> {
    pub const fn new(value: T) -> Self {
        Self(spin::Mutex::new(value))
    }

    #[expect(
        clippy::unnecessary_wraps,
        reason = "matches the std lock signature"
    )]
    pub fn lock(&self) -> Result<MutexGuard<'_, T>, DeckError> {
        Ok(self.0.lock())
    }
}
