//! Vibrator HAL for LED-class haptic drivers.
//!
//! The HAL answers the platform's vibrator service contract for hardware
//! that can only be switched on for a duration or off. Everything else the
//! contract offers (amplitude, compositions, always-on effects, frequency
//! introspection) is reported as unsupported.
//!
//! # Request Flow
//!
//! ```text
//! platform ──► VibratorService::on(ms, cb)
//!                 │
//!                 ├─ classify ms ──► stop | click(seq value) | timed(ms)
//!                 ├─ ordered node writes ──► ControlSink (sysfs)
//!                 └─ cb given? ──► NotifierSet: sleep ms, cb.on_complete()
//! ```
//!
//! `on` returns as soon as the writes are done; it never waits for the
//! vibration to finish.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use vibrator_hal::{CallbackRef, Vibrator, VibratorService};
//! use vibrator_hardware::settings::VibratorSettings;
//! use vibrator_hardware::sysfs::SysfsSink;
//!
//! #[tokio::main]
//! async fn main() -> vibrator_core::Result<()> {
//!     let vibrator = Vibrator::new(SysfsSink::new(), VibratorSettings::default());
//!
//!     let callback: CallbackRef = Arc::new(|| -> vibrator_core::Result<()> {
//!         println!("done");
//!         Ok(())
//!     });
//!     vibrator.on(30, Some(callback)).await?;
//!     Ok(())
//! }
//! ```

pub mod callback;
pub mod notifier;
pub mod service;
pub mod vibrator;

pub use callback::{CallbackRef, VibratorCallback};
pub use notifier::NotifierSet;
pub use service::VibratorService;
pub use vibrator::{VibrationRequest, Vibrator};
