//! Control-node writes and ordered write sequences.
//!
//! The driver exposes one pseudo-file per control point. A command is an
//! ordered list of `(node, value)` pairs; the driver expects the whole list
//! in order, and nothing is rolled back if a write in the middle fails.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// A single write of `value` to the control node at `node`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeWrite {
    /// Path of the control node.
    pub node: PathBuf,

    /// Literal value written to the node.
    pub value: String,
}

impl NodeWrite {
    /// Create a new node write.
    pub fn new(node: impl Into<PathBuf>, value: impl Into<String>) -> Self {
        Self {
            node: node.into(),
            value: value.into(),
        }
    }

    /// Get the node path.
    pub fn node(&self) -> &Path {
        &self.node
    }

    /// Get the value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for NodeWrite {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} <- {:?}", self.node.display(), self.value)
    }
}

/// Ordered list of node writes applied as one driver command.
///
/// # Examples
///
/// ```
/// use vibrator_hardware::node::{NodeSequence, NodeWrite};
///
/// let stop = NodeSequence::new(vec![NodeWrite::new("/sys/class/leds/vibrator/activate", "0")]);
/// assert_eq!(stop.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeSequence(Vec<NodeWrite>);

impl NodeSequence {
    /// Create a sequence from its writes.
    pub fn new(writes: Vec<NodeWrite>) -> Self {
        Self(writes)
    }

    /// Build a sequence of writes to nodes inside `dir`.
    ///
    /// ```
    /// use vibrator_hardware::node::NodeSequence;
    ///
    /// let seq = NodeSequence::in_dir("/sys/class/leds/vibrator", &[("activate", "0")]);
    /// assert_eq!(seq.writes()[0].node.to_str(), Some("/sys/class/leds/vibrator/activate"));
    /// ```
    pub fn in_dir(dir: impl AsRef<Path>, writes: &[(&str, &str)]) -> Self {
        let dir = dir.as_ref();
        Self(
            writes
                .iter()
                .map(|(node, value)| NodeWrite::new(dir.join(node), *value))
                .collect(),
        )
    }

    /// Get the writes in order.
    pub fn writes(&self) -> &[NodeWrite] {
        &self.0
    }

    /// Number of writes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether the sequence has no writes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NodeWrite> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a NodeSequence {
    type Item = &'a NodeWrite;
    type IntoIter = std::slice::Iter<'a, NodeWrite>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Vec<NodeWrite>> for NodeSequence {
    fn from(writes: Vec<NodeWrite>) -> Self {
        Self(writes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_dir_keeps_order() {
        let seq = NodeSequence::in_dir("/sys/vib", &[("activate", "0"), ("activate_mode", "1")]);
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.writes()[0], NodeWrite::new("/sys/vib/activate", "0"));
        assert_eq!(seq.writes()[1], NodeWrite::new("/sys/vib/activate_mode", "1"));
    }

    #[test]
    fn test_node_write_display() {
        let write = NodeWrite::new("/sys/vib/seq", "0x00 0x02");
        assert_eq!(write.to_string(), "/sys/vib/seq <- \"0x00 0x02\"");
    }

    #[test]
    fn test_sequence_serializes_as_list() {
        let seq = NodeSequence::in_dir("/sys/vib", &[("activate", "1")]);
        let json = serde_json::to_string(&seq).unwrap();
        assert_eq!(json, r#"[{"node":"/sys/vib/activate","value":"1"}]"#);
    }
}
