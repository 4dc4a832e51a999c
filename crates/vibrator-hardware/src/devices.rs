//! Enum wrapper for control sink dispatch.
//!
//! Native `async fn` in traits is not object-safe, so `Box<dyn ControlSink>`
//! is unavailable. [`AnyControlSink`] gives callers that choose the sink at
//! runtime (the CLI, service startup) one concrete type to hold.
//!
//! # Examples
//!
//! ```
//! use vibrator_hardware::devices::AnyControlSink;
//! use vibrator_hardware::sysfs::SysfsSink;
//!
//! let sink = AnyControlSink::from(SysfsSink::with_root("/tmp/stage"));
//! assert!(matches!(sink, AnyControlSink::Sysfs(_)));
//! ```

use crate::mock::MockSink;
use crate::sysfs::SysfsSink;
use crate::traits::ControlSink;
use std::path::Path;
use vibrator_core::Result;

/// Enum wrapper for control sink dispatch.
#[derive(Debug)]
#[non_exhaustive]
pub enum AnyControlSink {
    /// Driver pseudo-files.
    Sysfs(SysfsSink),

    /// In-memory recorder for development and testing.
    Mock(MockSink),
}

impl ControlSink for AnyControlSink {
    async fn write(&self, node: &Path, value: &str) -> Result<()> {
        match self {
            Self::Sysfs(sink) => sink.write(node, value).await,
            Self::Mock(sink) => sink.write(node, value).await,
        }
    }
}

impl From<SysfsSink> for AnyControlSink {
    fn from(sink: SysfsSink) -> Self {
        Self::Sysfs(sink)
    }
}

impl From<MockSink> for AnyControlSink {
    fn from(sink: MockSink) -> Self {
        Self::Mock(sink)
    }
}
