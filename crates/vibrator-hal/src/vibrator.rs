//! Vibration request handler.
//!
//! Translates `on`/`off` requests into driver command sequences:
//!
//! ```text
//! timeout_ms < 1      stop
//! 1 ..= 102           setup_click  -> seq=<table value>  -> execute_click
//! >= 103              setup_normal -> duration=<ms>      -> execute_normal
//! ```
//!
//! Writes are applied in order and the first failure is returned as is.
//! Nothing is rolled back and no compensating stop is issued; the driver
//! keeps whatever state the earlier writes produced.

use crate::callback::CallbackRef;
use crate::notifier::NotifierSet;
use crate::service::VibratorService;
use std::time::Duration;
use tracing::trace;
use vibrator_core::constants::{CLICK_THRESHOLD_MS, MIN_ON_DURATION_MS};
use vibrator_core::{Capabilities, Effect, NotifierPolicy, Result, SequenceTable};
use vibrator_hardware::settings::VibratorSettings;
use vibrator_hardware::{AnyControlSink, ControlSink, write_sequence};

/// Driver command selected for an `on` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VibrationRequest {
    /// Duration below one millisecond: stop the motor.
    Stop,

    /// Short haptic played from the waveform library.
    Click {
        /// Value written to the sequence node.
        sequence_value: &'static str,
    },

    /// Continuous vibration with an explicit duration.
    Timed {
        /// Milliseconds written to the duration node.
        duration_ms: i32,
    },
}

impl VibrationRequest {
    /// Classify a requested duration.
    ///
    /// # Examples
    ///
    /// ```
    /// use vibrator_core::SequenceTable;
    /// use vibrator_hal::VibrationRequest;
    ///
    /// let table = SequenceTable::Standard;
    /// assert_eq!(VibrationRequest::classify(0, table), VibrationRequest::Stop);
    /// assert_eq!(
    ///     VibrationRequest::classify(15, table),
    ///     VibrationRequest::Click { sequence_value: "0x00 0x06" },
    /// );
    /// assert_eq!(
    ///     VibrationRequest::classify(103, table),
    ///     VibrationRequest::Timed { duration_ms: 103 },
    /// );
    /// ```
    pub fn classify(timeout_ms: i32, table: SequenceTable) -> Self {
        if timeout_ms < MIN_ON_DURATION_MS {
            Self::Stop
        } else if timeout_ms < CLICK_THRESHOLD_MS {
            Self::Click {
                sequence_value: table.sequence_value(timeout_ms),
            }
        } else {
            Self::Timed {
                duration_ms: timeout_ms,
            }
        }
    }
}

/// Vibrator HAL driving the LED-class vibrator through a [`ControlSink`].
///
/// Stateless between requests apart from the pending completion notifiers.
///
/// # Examples
///
/// ```
/// use vibrator_hal::{Vibrator, VibratorService};
/// use vibrator_hardware::mock::MockSink;
/// use vibrator_hardware::settings::VibratorSettings;
///
/// #[tokio::main]
/// async fn main() -> vibrator_core::Result<()> {
///     let settings = VibratorSettings::default();
///     let (sink, handle) = MockSink::new();
///     let vibrator = Vibrator::new(sink, settings.clone());
///
///     vibrator.on(500, None).await?;
///
///     assert_eq!(handle.values_for(&settings.duration_node), vec!["500"]);
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct Vibrator<S = AnyControlSink> {
    sink: S,
    settings: VibratorSettings,
    notifiers: NotifierSet,
}

impl<S: ControlSink> Vibrator<S> {
    /// Create a vibrator writing to `sink` with the given layout.
    pub fn new(sink: S, settings: VibratorSettings) -> Self {
        Self {
            sink,
            settings,
            notifiers: NotifierSet::new(),
        }
    }

    /// Get the settings in use.
    pub fn settings(&self) -> &VibratorSettings {
        &self.settings
    }

    /// Get the control sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Number of completion notifiers that have not fired yet.
    pub fn pending_notifiers(&self) -> usize {
        self.notifiers.pending()
    }

    /// Abort every pending completion notifier.
    pub fn cancel_notifiers(&self) {
        self.notifiers.cancel_all();
    }

    fn apply_policy(&self) {
        if self.settings.notifier_policy == NotifierPolicy::CancelPending {
            self.notifiers.cancel_all();
        }
    }

    async fn stop(&self) -> Result<()> {
        write_sequence(&self.sink, &self.settings.stop).await
    }

    async fn click(&self, sequence_value: &str) -> Result<()> {
        write_sequence(&self.sink, &self.settings.setup_click).await?;
        self.sink.write(&self.settings.seq_node, sequence_value).await?;
        write_sequence(&self.sink, &self.settings.execute_click).await
    }

    async fn vibrate(&self, duration_ms: i32) -> Result<()> {
        write_sequence(&self.sink, &self.settings.setup_normal).await?;
        self.sink
            .write(&self.settings.duration_node, &duration_ms.to_string())
            .await?;
        write_sequence(&self.sink, &self.settings.execute_normal).await
    }
}

impl<S: ControlSink> VibratorService for Vibrator<S> {
    fn get_capabilities(&self) -> Result<Capabilities> {
        trace!("Vibrator reporting capabilities");
        Ok(Capabilities::SUPPORTED)
    }

    async fn off(&self) -> Result<()> {
        trace!("Vibrator off");
        self.apply_policy();
        self.stop().await
    }

    async fn on(&self, timeout_ms: i32, callback: Option<CallbackRef>) -> Result<()> {
        trace!("Vibrator on for timeout_ms: {}", timeout_ms);

        match VibrationRequest::classify(timeout_ms, self.settings.sequence_table) {
            VibrationRequest::Stop => return self.off().await,
            VibrationRequest::Click { sequence_value } => {
                self.apply_policy();
                self.click(sequence_value).await?;
            }
            VibrationRequest::Timed { duration_ms } => {
                self.apply_policy();
                self.vibrate(duration_ms).await?;
            }
        }

        if let Some(callback) = callback {
            // timeout_ms is at least 1 here
            let delay = Duration::from_millis(u64::from(timeout_ms.unsigned_abs()));
            self.notifiers.schedule(delay, callback);
        }
        Ok(())
    }

    fn get_supported_effects(&self) -> Result<Vec<Effect>> {
        Ok(Vec::new())
    }
}
