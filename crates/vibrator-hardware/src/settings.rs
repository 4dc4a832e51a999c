//! Vibrator settings: driver node layout and runtime options.
//!
//! Settings describe *which* nodes receive *which* values for each driver
//! command, plus the click waveform table and the notifier policy. The
//! defaults reproduce the LED-class vibrator layout:
//!
//! ```text
//! stop            activate=0
//! setup click     activate=0, activate_mode=1, loop=0x00 0x00
//!   sequence      seq=<table value>
//! execute click   index=1, activate=1
//! setup normal    activate=0, activate_mode=0
//!   duration      duration=<ms>
//! execute normal  activate=1
//! ```
//!
//! Settings can be stored as JSON; fields missing from a file keep their
//! defaults.

use crate::node::NodeSequence;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;
use vibrator_core::constants::{
    DEFAULT_NODE_DIR, NODE_ACTIVATE, NODE_ACTIVATE_MODE, NODE_DURATION, NODE_INDEX, NODE_LOOP,
    NODE_SEQ, RESET_LOOP_VALUE,
};
use vibrator_core::{Error, NotifierPolicy, Result, SequenceTable};

/// Driver node layout and runtime options for the vibrator.
///
/// # Examples
///
/// ```
/// use vibrator_hardware::settings::VibratorSettings;
/// use vibrator_core::SequenceTable;
///
/// let settings = VibratorSettings::default().with_sequence_table(SequenceTable::Alternate);
/// assert!(settings.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VibratorSettings {
    /// Stops any ongoing vibration.
    pub stop: NodeSequence,

    /// Prepares the driver for a waveform (click) playback.
    pub setup_click: NodeSequence,

    /// Starts the prepared waveform.
    pub execute_click: NodeSequence,

    /// Prepares the driver for a timed vibration.
    pub setup_normal: NodeSequence,

    /// Starts the timed vibration.
    pub execute_normal: NodeSequence,

    /// Node receiving the click waveform sequence value.
    pub seq_node: PathBuf,

    /// Node receiving the vibration duration in milliseconds.
    pub duration_node: PathBuf,

    /// Waveform table used to pick the click sequence value.
    pub sequence_table: SequenceTable,

    /// Interaction between pending notifiers and later requests.
    pub notifier_policy: NotifierPolicy,
}

impl Default for VibratorSettings {
    fn default() -> Self {
        Self::for_dir(DEFAULT_NODE_DIR)
    }
}

impl VibratorSettings {
    /// Default layout with every node placed inside `dir`.
    pub fn for_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            stop: NodeSequence::in_dir(dir, &[(NODE_ACTIVATE, "0")]),
            setup_click: NodeSequence::in_dir(
                dir,
                &[
                    (NODE_ACTIVATE, "0"),
                    (NODE_ACTIVATE_MODE, "1"),
                    (NODE_LOOP, RESET_LOOP_VALUE),
                ],
            ),
            execute_click: NodeSequence::in_dir(dir, &[(NODE_INDEX, "1"), (NODE_ACTIVATE, "1")]),
            setup_normal: NodeSequence::in_dir(
                dir,
                &[(NODE_ACTIVATE, "0"), (NODE_ACTIVATE_MODE, "0")],
            ),
            execute_normal: NodeSequence::in_dir(dir, &[(NODE_ACTIVATE, "1")]),
            seq_node: dir.join(NODE_SEQ),
            duration_node: dir.join(NODE_DURATION),
            sequence_table: SequenceTable::default(),
            notifier_policy: NotifierPolicy::default(),
        }
    }

    /// Set the click waveform table.
    pub fn with_sequence_table(mut self, table: SequenceTable) -> Self {
        self.sequence_table = table;
        self
    }

    /// Set the notifier policy.
    pub fn with_notifier_policy(mut self, policy: NotifierPolicy) -> Self {
        self.notifier_policy = policy;
        self
    }

    /// Parse settings from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the text is not valid settings JSON or
    /// the result fails [`validate`](Self::validate).
    pub fn from_json(text: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(text)
            .map_err(|e| Error::config(format!("Invalid settings: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or [`Error::Config`]
    /// if its content is invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading vibrator settings from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::config(format!("Cannot serialize settings: {e}")))
    }

    /// Check the settings for mistakes that would make the vibrator unusable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a node path is empty, or if the stop or
    /// an execute sequence has no writes.
    pub fn validate(&self) -> Result<()> {
        if self.seq_node.as_os_str().is_empty() {
            return Err(Error::config("seq_node must not be empty"));
        }
        if self.duration_node.as_os_str().is_empty() {
            return Err(Error::config("duration_node must not be empty"));
        }

        let required = [
            ("stop", &self.stop),
            ("execute_click", &self.execute_click),
            ("execute_normal", &self.execute_normal),
        ];
        for (name, sequence) in required {
            if sequence.is_empty() {
                return Err(Error::config(format!("{name} sequence must not be empty")));
            }
        }

        let all = [
            ("stop", &self.stop),
            ("setup_click", &self.setup_click),
            ("execute_click", &self.execute_click),
            ("setup_normal", &self.setup_normal),
            ("execute_normal", &self.execute_normal),
        ];
        for (name, sequence) in all {
            if sequence.iter().any(|w| w.node.as_os_str().is_empty()) {
                return Err(Error::config(format!("{name} sequence has an empty node path")));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeWrite;

    #[test]
    fn test_default_layout() {
        let settings = VibratorSettings::default();

        assert_eq!(
            settings.stop.writes(),
            &[NodeWrite::new("/sys/class/leds/vibrator/activate", "0")]
        );
        assert_eq!(settings.setup_click.len(), 3);
        assert_eq!(settings.execute_click.len(), 2);
        assert_eq!(settings.setup_normal.len(), 2);
        assert_eq!(settings.execute_normal.len(), 1);
        assert_eq!(settings.seq_node, Path::new("/sys/class/leds/vibrator/seq"));
        assert_eq!(settings.duration_node, Path::new("/sys/class/leds/vibrator/duration"));
        assert_eq!(settings.sequence_table, SequenceTable::Standard);
        assert_eq!(settings.notifier_policy, NotifierPolicy::Independent);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_for_dir() {
        let settings = VibratorSettings::for_dir("/stage/vib");
        assert!(settings.stop.iter().all(|w| w.node.starts_with("/stage/vib")));
        assert_eq!(settings.seq_node, Path::new("/stage/vib/seq"));
    }

    #[test]
    fn test_json_round_trip() {
        let settings = VibratorSettings::default()
            .with_sequence_table(SequenceTable::Alternate)
            .with_notifier_policy(NotifierPolicy::CancelPending);

        let json = settings.to_json_pretty().unwrap();
        let parsed = VibratorSettings::from_json(&json).unwrap();

        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let parsed = VibratorSettings::from_json(r#"{ "sequence_table": "alternate" }"#).unwrap();

        assert_eq!(parsed.sequence_table, SequenceTable::Alternate);
        assert_eq!(parsed.stop, VibratorSettings::default().stop);
    }

    #[test]
    fn test_invalid_json() {
        let result = VibratorSettings::from_json(r#"{ "sequence_table": "legacy" }"#);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_validate_rejects_empty_stop() {
        let result = VibratorSettings::from_json(r#"{ "stop": [] }"#);
        assert!(matches!(result, Err(Error::Config(msg)) if msg.contains("stop")));
    }

    #[test]
    fn test_validate_rejects_empty_node() {
        let mut settings = VibratorSettings::default();
        settings.duration_node = PathBuf::new();
        assert!(settings.validate().is_err());

        let mut settings = VibratorSettings::default();
        settings.setup_click = NodeSequence::new(vec![NodeWrite::new("", "1")]);
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vibrator.json");
        std::fs::write(&path, r#"{ "notifier_policy": "cancel_pending" }"#).unwrap();

        let settings = VibratorSettings::load(&path).unwrap();
        assert_eq!(settings.notifier_policy, NotifierPolicy::CancelPending);

        let missing = VibratorSettings::load(dir.path().join("missing.json"));
        assert!(matches!(missing, Err(Error::Io(_))));
    }
}
