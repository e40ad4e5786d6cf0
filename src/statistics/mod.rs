//! Traffic counters for result queues.
//!
//! This module provides a small structure recording how many results went through a
//! queue, how often an extraction found the queue empty, and how large it
//! grew.

mod stats;
pub use stats::*;
