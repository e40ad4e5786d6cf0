use std::fmt;

use thiserror::Error;

/// Result type alias for queue accessors.
pub type QueueResult<T> = Result<T, EmptyQueueError>;

/// The queue call that ran into an empty queue.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum QueueOperation {
    Peek,
    Extract,
}

impl fmt::Display for QueueOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueOperation::Peek => f.write_str("peek"),
            QueueOperation::Extract => f.write_str("extract"),
        }
    }
}

/// Returned when the best result is requested from a queue holding nothing.
///
/// For a growing algorithm this is the ordinary end of the run, not a fault.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("cannot {operation} the best result: the queue is empty")]
pub struct EmptyQueueError {
    pub operation: QueueOperation,
}
