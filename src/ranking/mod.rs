//! Ranking of correlation candidates for reliability-guided growth.
//!
//! This module provides the candidate value type, the rule ranking candidates by their
//! coefficient (lowest first), and a priority queue applying that rule so the most
//! reliable candidate is always the next one handed out.

mod error;
mod priority_ordering;
mod ranked_result;
mod result_queue;

pub use error::*;
pub use priority_ordering::*;
pub use ranked_result::*;
pub use result_queue::*;
