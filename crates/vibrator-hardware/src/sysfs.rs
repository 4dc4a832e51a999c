//! Control sink backed by driver pseudo-files.
//!
//! Kernel attribute files must already exist: the sink opens them for
//! writing without creating them, writes the value in one call and flushes.
//! A missing node therefore surfaces as an error instead of silently
//! creating a regular file.

use crate::traits::ControlSink;
use std::path::{Component, Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::trace;
use vibrator_core::{Error, Result};

/// Control sink writing to the sysfs tree.
///
/// An optional root re-homes absolute node paths, so the same settings can
/// drive a staging tree (`<root>/sys/class/leds/vibrator/...`).
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use vibrator_hardware::sysfs::SysfsSink;
/// use vibrator_hardware::traits::ControlSink;
///
/// # async fn example() -> vibrator_core::Result<()> {
/// let sink = SysfsSink::new();
/// sink.write(Path::new("/sys/class/leds/vibrator/activate"), "0").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SysfsSink {
    root: Option<PathBuf>,
}

impl SysfsSink {
    /// Sink writing to node paths as given.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Sink resolving every node path below `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    /// Get the root prefix, if any.
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Resolve `node` to the file that will actually be written.
    ///
    /// ```
    /// use std::path::Path;
    /// use vibrator_hardware::sysfs::SysfsSink;
    ///
    /// let sink = SysfsSink::with_root("/tmp/stage");
    /// assert_eq!(
    ///     sink.resolve(Path::new("/sys/class/leds/vibrator/seq")),
    ///     Path::new("/tmp/stage/sys/class/leds/vibrator/seq"),
    /// );
    /// ```
    pub fn resolve(&self, node: &Path) -> PathBuf {
        match &self.root {
            None => node.to_path_buf(),
            Some(root) => {
                // Joining an absolute path would replace the root entirely
                let relative: PathBuf = node
                    .components()
                    .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
                    .collect();
                root.join(relative)
            }
        }
    }
}

impl ControlSink for SysfsSink {
    async fn write(&self, node: &Path, value: &str) -> Result<()> {
        let path = self.resolve(node);
        trace!("sysfs write {} <- {:?}", path.display(), value);

        let mut file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&path)
            .await
            .map_err(|e| Error::node_write(node, value, e))?;

        file.write_all(value.as_bytes())
            .await
            .map_err(|e| Error::node_write(node, value, e))?;

        file.flush()
            .await
            .map_err(|e| Error::node_write(node, value, e))
    }
}
