//! Constants for the vibrator driver and the platform haptic contract.
//!
//! The capability bits mirror the values published by the platform's
//! vibrator service contract. The duration thresholds decide which control
//! sequence a request is translated into:
//!
//! ```text
//!   timeout_ms < 1        -> stop
//!   1 ..= 102             -> click haptic (waveform sequence code)
//!   103 ..                -> normal vibration (explicit duration)
//! ```
//!
//! # Usage
//!
//! ```
//! use vibrator_core::constants::*;
//!
//! fn is_click(timeout_ms: i32) -> bool {
//!     (MIN_ON_DURATION_MS..CLICK_THRESHOLD_MS).contains(&timeout_ms)
//! }
//!
//! assert!(is_click(50));
//! assert!(!is_click(103));
//! ```

// ============================================================================
// Platform Capability Bits
// ============================================================================

/// `on` accepts a completion callback.
pub const CAP_ON_CALLBACK: u32 = 1 << 0;

/// `perform` accepts a completion callback.
pub const CAP_PERFORM_CALLBACK: u32 = 1 << 1;

/// Amplitude can be controlled.
pub const CAP_AMPLITUDE_CONTROL: u32 = 1 << 2;

/// External control can be enabled.
pub const CAP_EXTERNAL_CONTROL: u32 = 1 << 3;

/// Amplitude can be controlled while under external control.
pub const CAP_EXTERNAL_AMPLITUDE_CONTROL: u32 = 1 << 4;

/// Composed effects are supported.
pub const CAP_COMPOSE_EFFECTS: u32 = 1 << 5;

/// Always-on effects are supported.
pub const CAP_ALWAYS_ON_CONTROL: u32 = 1 << 6;

/// Resonant frequency can be queried.
pub const CAP_GET_RESONANT_FREQUENCY: u32 = 1 << 7;

/// Q factor can be queried.
pub const CAP_GET_Q_FACTOR: u32 = 1 << 8;

/// Frequency can be controlled.
pub const CAP_FREQUENCY_CONTROL: u32 = 1 << 9;

/// PWLE composition is supported.
pub const CAP_COMPOSE_PWLE_EFFECTS: u32 = 1 << 10;

// ============================================================================
// Duration Thresholds
// ============================================================================

/// Smallest duration that turns the motor on. Anything lower is a stop.
pub const MIN_ON_DURATION_MS: i32 = 1;

/// First duration handled as a normal vibration instead of a click.
pub const CLICK_THRESHOLD_MS: i32 = 103;

// ============================================================================
// Default Driver Layout
// ============================================================================

/// Directory holding the LED-class vibrator control nodes.
pub const DEFAULT_NODE_DIR: &str = "/sys/class/leds/vibrator";

/// Starts (`1`) or stops (`0`) playback.
pub const NODE_ACTIVATE: &str = "activate";

/// Selects RAM waveform playback (`1`) or continuous drive (`0`).
pub const NODE_ACTIVATE_MODE: &str = "activate_mode";

/// Playback duration in milliseconds for continuous drive.
pub const NODE_DURATION: &str = "duration";

/// Waveform sequence slot and code.
pub const NODE_SEQ: &str = "seq";

/// Waveform loop count for the sequence slot.
pub const NODE_LOOP: &str = "loop";

/// Waveform index to play.
pub const NODE_INDEX: &str = "index";

/// Loop value that clears the loop count of the first sequence slot.
pub const RESET_LOOP_VALUE: &str = "0x00 0x00";
