//! Completion callback seam.
//!
//! The platform hands the vibrator an opaque callback object whose only
//! operation is `on_complete`. The call itself is synchronous (a one-way
//! transaction on the platform's transport) and reports success or failure.

use std::sync::Arc;
use vibrator_core::Result;

/// Upward notification that a requested vibration has finished.
///
/// Implemented for closures, which is convenient for tests and tools:
///
/// ```
/// use std::sync::Arc;
/// use vibrator_hal::callback::{CallbackRef, VibratorCallback};
///
/// let callback: CallbackRef = Arc::new(|| -> vibrator_core::Result<()> { Ok(()) });
/// assert!(callback.on_complete().is_ok());
/// ```
pub trait VibratorCallback: Send + Sync {
    /// Signal that the vibration duration has elapsed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Callback`](vibrator_core::Error::Callback) if the
    /// notification could not be delivered.
    fn on_complete(&self) -> Result<()>;
}

impl<F> VibratorCallback for F
where
    F: Fn() -> Result<()> + Send + Sync,
{
    fn on_complete(&self) -> Result<()> {
        self()
    }
}

/// Shared handle to a completion callback.
pub type CallbackRef = Arc<dyn VibratorCallback>;
