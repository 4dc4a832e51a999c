//! Mock sink implementation for testing and development.
//!
//! This module provides a control sink that records writes in memory and
//! can be steered programmatically without requiring a device.

pub mod sink;

pub use sink::{MockSink, MockSinkHandle};
