use crate::constants::{CAP_ON_CALLBACK, CAP_PERFORM_CALLBACK};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Capability bitmask reported to the platform.
///
/// Bit values follow the platform contract (see [`crate::constants`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capabilities(u32);

impl Capabilities {
    /// Capabilities of the LED-class vibrator: callbacks on `on` and `perform`.
    pub const SUPPORTED: Self = Self(CAP_ON_CALLBACK | CAP_PERFORM_CALLBACK);

    /// Wrap raw capability bits.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Get the raw capability bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Check whether every bit of `flag` is set.
    #[must_use]
    pub const fn contains(self, flag: u32) -> bool {
        self.0 & flag == flag
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}

/// Duration-to-waveform table used for click haptics.
///
/// Different motor assemblies ship with different waveform libraries in
/// the driver RAM, so the code written to the sequence node for a given
/// duration depends on which library the device carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequenceTable {
    /// Waveform library found on most devices.
    #[default]
    Standard,

    /// Alternate waveform library with finer buckets for very short clicks.
    Alternate,
}

impl SequenceTable {
    /// Select the sequence value for a click lasting `timeout_ms`.
    ///
    /// Only meaningful for click durations (`1..=102`); the last bucket
    /// covers everything above 80 ms.
    ///
    /// # Examples
    ///
    /// ```
    /// use vibrator_core::SequenceTable;
    ///
    /// assert_eq!(SequenceTable::Standard.sequence_value(50), "0x00 0x09");
    /// assert_eq!(SequenceTable::Alternate.sequence_value(50), "0x00 0x04");
    /// ```
    #[must_use]
    pub fn sequence_value(self, timeout_ms: i32) -> &'static str {
        match self {
            Self::Standard => match timeout_ms {
                ..=9 => "0x00 0x02",
                10..=19 => "0x00 0x06",
                20..=39 => "0x00 0x07",
                40..=79 => "0x00 0x09",
                _ => "0x00 0x01",
            },
            Self::Alternate => match timeout_ms {
                ..=2 => "0x00 0x07",
                3..=9 => "0x00 0x0e",
                10..=19 => "0x00 0x01",
                20..=39 => "0x00 0x0d",
                40..=59 => "0x00 0x04",
                60..=79 => "0x00 0x06",
                _ => "0x00 0x0a",
            },
        }
    }
}

impl fmt::Display for SequenceTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Alternate => write!(f, "alternate"),
        }
    }
}

impl std::str::FromStr for SequenceTable {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "standard" => Ok(Self::Standard),
            "alternate" => Ok(Self::Alternate),
            _ => Err(crate::Error::config(format!("Invalid sequence table: {s}"))),
        }
    }
}

/// What happens to pending completion notifiers when a new request arrives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotifierPolicy {
    /// Every notifier fires after its own duration, regardless of later
    /// `on`/`off` calls. Overlapping requests stack their notifications.
    #[default]
    Independent,

    /// Each `on`/`off` aborts the notifiers scheduled by earlier calls.
    CancelPending,
}

// ============================================================================
// Platform Contract Types
// ============================================================================
//
// These mirror the platform haptic contract so that unsupported operations
// keep their real signatures. The vibrator never inspects them.

/// Predefined haptic effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Effect {
    Click,
    DoubleClick,
    Tick,
    Thud,
    Pop,
    HeavyClick,
    RingtoneOne,
    TextureTick,
}

/// Strength of a predefined effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectStrength {
    Light,
    Medium,
    Strong,
}

/// Primitives usable in a composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum CompositePrimitive {
    Noop,
    Click,
    Thud,
    Spin,
    QuickRise,
    SlowRise,
    QuickFall,
    LightTick,
    LowTick,
}

/// One step of a composed effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositeEffect {
    /// Delay before this primitive starts, in milliseconds.
    pub delay_ms: i32,

    /// Primitive to play.
    pub primitive: CompositePrimitive,

    /// Relative scale in `0.0..=1.0`.
    pub scale: f32,
}

/// Braking strategies for PWLE compositions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Braking {
    None,
    Clab,
}

/// Active segment of a piecewise-linear envelope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivePwle {
    pub start_amplitude: f32,
    pub start_frequency: f32,
    pub end_amplitude: f32,
    pub end_frequency: f32,
    pub duration_ms: i32,
}

/// Braking segment of a piecewise-linear envelope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrakingPwle {
    pub braking: Braking,
    pub duration_ms: i32,
}

/// One segment of a PWLE composition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PrimitivePwle {
    Active(ActivePwle),
    Braking(BrakingPwle),
}
