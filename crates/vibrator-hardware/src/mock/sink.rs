//! Mock control sink for testing and development.
//!
//! Records every write instead of touching the filesystem, and can be told
//! to fail specific writes so fail-fast behaviour can be exercised.

use crate::node::NodeWrite;
use crate::traits::ControlSink;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use vibrator_core::{Error, Result};

#[derive(Debug, Default)]
struct MockState {
    /// Successful writes, in the order they were issued
    writes: Vec<NodeWrite>,

    /// Writes to this node fail
    fail_node: Option<PathBuf>,

    /// Remaining successful writes before every write fails
    fail_after: Option<usize>,
}

fn lock(state: &Mutex<MockState>) -> MutexGuard<'_, MockState> {
    // A panicking test thread must not hide the recorded writes
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Mock control sink.
///
/// Created together with a [`MockSinkHandle`] that inspects recorded writes
/// and injects failures.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use vibrator_hardware::mock::MockSink;
/// use vibrator_hardware::node::NodeWrite;
/// use vibrator_hardware::traits::ControlSink;
///
/// #[tokio::main]
/// async fn main() -> vibrator_core::Result<()> {
///     let (sink, handle) = MockSink::new();
///
///     sink.write(Path::new("/sys/vib/activate"), "1").await?;
///
///     assert_eq!(handle.writes(), vec![NodeWrite::new("/sys/vib/activate", "1")]);
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct MockSink {
    state: Arc<Mutex<MockState>>,
}

impl MockSink {
    /// Create a new mock sink and its control handle.
    pub fn new() -> (Self, MockSinkHandle) {
        let state = Arc::new(Mutex::new(MockState::default()));
        let handle = MockSinkHandle {
            state: Arc::clone(&state),
        };
        (Self { state }, handle)
    }
}

impl Default for MockSink {
    fn default() -> Self {
        Self::new().0
    }
}

impl ControlSink for MockSink {
    async fn write(&self, node: &Path, value: &str) -> Result<()> {
        let mut state = lock(&self.state);

        if state.fail_node.as_deref() == Some(node) {
            return Err(Error::node_write(
                node,
                value,
                io::Error::new(io::ErrorKind::PermissionDenied, "injected failure"),
            ));
        }

        if let Some(remaining) = state.fail_after.as_mut() {
            if *remaining == 0 {
                return Err(Error::node_write(
                    node,
                    value,
                    io::Error::new(io::ErrorKind::BrokenPipe, "injected failure"),
                ));
            }
            *remaining -= 1;
        }

        state.writes.push(NodeWrite::new(node, value));
        Ok(())
    }
}

/// Handle for inspecting and steering a [`MockSink`].
///
/// Cloneable; every clone observes the same sink.
#[derive(Debug, Clone)]
pub struct MockSinkHandle {
    state: Arc<Mutex<MockState>>,
}

impl MockSinkHandle {
    /// Snapshot of the successful writes so far.
    pub fn writes(&self) -> Vec<NodeWrite> {
        lock(&self.state).writes.clone()
    }

    /// Values written to `node`, in order.
    pub fn values_for(&self, node: impl AsRef<Path>) -> Vec<String> {
        let node = node.as_ref();
        lock(&self.state)
            .writes
            .iter()
            .filter(|write| write.node == node)
            .map(|write| write.value.clone())
            .collect()
    }

    /// Forget the recorded writes.
    pub fn clear(&self) {
        lock(&self.state).writes.clear();
    }

    /// Make every write to `node` fail.
    pub fn fail_on_node(&self, node: impl Into<PathBuf>) {
        lock(&self.state).fail_node = Some(node.into());
    }

    /// Let `count` more writes succeed, then fail every write.
    pub fn fail_after(&self, count: usize) {
        lock(&self.state).fail_after = Some(count);
    }

    /// Remove all injected failures.
    pub fn reset_failures(&self) {
        let mut state = lock(&self.state);
        state.fail_node = None;
        state.fail_after = None;
    }
}
