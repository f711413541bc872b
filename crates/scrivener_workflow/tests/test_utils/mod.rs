//! Test utilities for workflow tests.

#![allow(dead_code)]

mod mock_driver;

pub use mock_driver::{MockDriver, RecordingObserver, Step};
