//! Control sink trait definition.
//!
//! A control sink is whatever accepts the driver's `(node, value)` writes:
//! the real sysfs tree on a device, or a recording mock in tests. The
//! vibrator only consumes success or failure from each write.
//!
//! The trait uses native `async fn` methods (Rust 1.90 + Edition 2024 RPITIT).
//! Like every RPITIT trait it is not object-safe; use generics or the enum
//! wrapper in [`devices`](crate::devices) for dispatch.

#![allow(async_fn_in_trait)]

use crate::node::NodeSequence;
use std::path::Path;
use tracing::debug;
use vibrator_core::Result;

/// Destination for control-node writes.
///
/// Implementations must take `&self`: the driver tolerates concurrent
/// writers and the vibrator imposes no locking of its own.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use vibrator_hardware::mock::MockSink;
/// use vibrator_hardware::traits::ControlSink;
///
/// #[tokio::main]
/// async fn main() -> vibrator_core::Result<()> {
///     let (sink, handle) = MockSink::new();
///     sink.write(Path::new("/sys/class/leds/vibrator/activate"), "0").await?;
///     assert_eq!(handle.writes().len(), 1);
///     Ok(())
/// }
/// ```
pub trait ControlSink {
    /// Write `value` to the control node at `node`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeWrite`](vibrator_core::Error::NodeWrite) if the
    /// node cannot be opened or written.
    async fn write(&self, node: &Path, value: &str) -> Result<()>;
}

/// Apply every write of `sequence` in order.
///
/// Stops at the first failing write and returns its error unchanged. Writes
/// already applied stay applied.
pub async fn write_sequence<S: ControlSink>(sink: &S, sequence: &NodeSequence) -> Result<()> {
    for write in sequence {
        debug!("Writing {}", write);
        sink.write(&write.node, &write.value).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockSink;
    use crate::node::NodeWrite;

    fn three_writes() -> NodeSequence {
        NodeSequence::in_dir("/sys/vib", &[("a", "1"), ("b", "2"), ("c", "3")])
    }

    #[tokio::test]
    async fn test_write_sequence_in_order() {
        let (sink, handle) = MockSink::new();

        write_sequence(&sink, &three_writes()).await.unwrap();

        assert_eq!(handle.writes(), three_writes().writes().to_vec());
    }

    #[tokio::test]
    async fn test_write_sequence_stops_at_first_failure() {
        let (sink, handle) = MockSink::new();
        handle.fail_on_node("/sys/vib/b");

        let result = write_sequence(&sink, &three_writes()).await;

        match result {
            Err(vibrator_core::Error::NodeWrite { node, value, .. }) => {
                assert_eq!(node, Path::new("/sys/vib/b"));
                assert_eq!(value, "2");
            }
            other => panic!("Expected node write error, got {:?}", other),
        }
        // Only the write before the failure reached the driver
        assert_eq!(handle.writes(), vec![NodeWrite::new("/sys/vib/a", "1")]);
    }

    #[tokio::test]
    async fn test_write_empty_sequence() {
        let (sink, handle) = MockSink::new();
        write_sequence(&sink, &NodeSequence::default()).await.unwrap();
        assert!(handle.writes().is_empty());
    }
}
