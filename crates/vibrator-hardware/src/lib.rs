//! Driver-facing layer of the vibrator HAL.
//!
//! The LED-class vibrator driver is controlled entirely through writable
//! pseudo-files. This crate models those writes and the places they go:
//!
//! - [`node`]: a single `(node, value)` write and ordered write sequences.
//! - [`traits`]: the [`ControlSink`] trait every destination implements,
//!   and [`write_sequence`] which applies a sequence fail-fast.
//! - [`sysfs`]: the real destination, optionally re-rooted for staging.
//! - [`mock`]: an in-memory recorder with failure injection.
//! - [`devices`]: enum dispatch over the sinks.
//! - [`settings`]: node layout, click waveform table and notifier policy.
//!
//! # Example
//!
//! ```
//! use vibrator_hardware::mock::MockSink;
//! use vibrator_hardware::settings::VibratorSettings;
//! use vibrator_hardware::write_sequence;
//!
//! #[tokio::main]
//! async fn main() -> vibrator_core::Result<()> {
//!     let settings = VibratorSettings::default();
//!     let (sink, handle) = MockSink::new();
//!
//!     write_sequence(&sink, &settings.stop).await?;
//!
//!     assert_eq!(handle.writes(), settings.stop.writes());
//!     Ok(())
//! }
//! ```

pub mod devices;
pub mod mock;
pub mod node;
pub mod settings;
pub mod sysfs;
pub mod traits;

pub use devices::AnyControlSink;
pub use node::{NodeSequence, NodeWrite};
pub use settings::VibratorSettings;
pub use traits::{ControlSink, write_sequence};
