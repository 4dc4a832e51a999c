//! Common test utilities for vibrator integration tests.
//!
//! Builds a staged copy of the driver node tree in a temporary directory so
//! the real [`SysfsSink`] can be exercised without a device.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;
use vibrator_hal::{CallbackRef, Vibrator};
use vibrator_hardware::settings::VibratorSettings;
use vibrator_hardware::sysfs::SysfsSink;

/// Node directory of the default settings, relative to the stage root.
pub const NODE_DIR: &str = "sys/class/leds/vibrator";

/// Every node file the default settings write to.
pub const NODES: [&str; 6] = ["activate", "activate_mode", "duration", "seq", "loop", "index"];

/// Staged node tree that lives as long as the value.
pub struct Stage {
    dir: TempDir,
}

impl Stage {
    /// Create a stage with every default node present and empty.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let nodes = dir.path().join(NODE_DIR);
        std::fs::create_dir_all(&nodes).unwrap();
        for node in NODES {
            std::fs::write(nodes.join(node), "").unwrap();
        }
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn node_path(&self, node: &str) -> PathBuf {
        self.root().join(NODE_DIR).join(node)
    }

    /// Current content of a node, or `None` if it was never written.
    pub fn read(&self, node: &str) -> Option<String> {
        let content = std::fs::read_to_string(self.node_path(node)).unwrap();
        (!content.is_empty()).then_some(content)
    }

    pub fn remove(&self, node: &str) {
        std::fs::remove_file(self.node_path(node)).unwrap();
    }

    /// Vibrator writing into this stage.
    pub fn vibrator(&self, settings: VibratorSettings) -> Vibrator<SysfsSink> {
        Vibrator::new(SysfsSink::with_root(self.root()), settings)
    }
}

/// Callback counting how often it was notified.
pub fn counting_callback() -> (CallbackRef, Arc<AtomicUsize>) {
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);
    let callback: CallbackRef = Arc::new(move || -> vibrator_core::Result<()> {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });
    (callback, count)
}

pub fn notified(count: &AtomicUsize) -> usize {
    count.load(Ordering::SeqCst)
}
