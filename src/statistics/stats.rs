#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct QueueStats {
    inserted: usize,
    extracted: usize,
    empty_requests: usize,
    peak_len: usize,
}

impl QueueStats {
    pub fn new() -> Self {
        QueueStats {
            inserted: 0,
            extracted: 0,
            empty_requests: 0,
            peak_len: 0,
        }
    }

    /// Record that a result was inserted, leaving the queue at `len_after` elements
    pub fn bump_inserted(&mut self, len_after: usize) {
        self.inserted += 1;
        self.peak_len = self.peak_len.max(len_after);
    }

    /// Record a successful extraction of the best result
    pub fn bump_extracted(&mut self) {
        self.extracted += 1
    }

    /// Record that an extraction was attempted on an empty queue
    pub fn bump_empty_requests(&mut self) {
        self.empty_requests += 1
    }

    pub fn get_inserted(&self) -> usize {
        self.inserted
    }

    pub fn get_extracted(&self) -> usize {
        self.extracted
    }

    pub fn get_empty_requests(&self) -> usize {
        self.empty_requests
    }

    pub fn get_peak_len(&self) -> usize {
        self.peak_len
    }

    /// Results inserted but not extracted yet. For the stats of a single queue this is its
    /// current length.
    pub fn get_pending(&self) -> usize {
        self.inserted - self.extracted
    }

    /// Combines the counters of two queues, e.g. one per grid region. The peak length is the
    /// largest of the two peaks, since the queues never held their elements together.
    pub fn merge(&self, other: &QueueStats) -> QueueStats {
        QueueStats {
            inserted: self.inserted + other.inserted,
            extracted: self.extracted + other.extracted,
            empty_requests: self.empty_requests + other.empty_requests,
            peak_len: self.peak_len.max(other.peak_len),
        }
    }

    /// Emit all counters as a single `info` event.
    pub fn log_summary(&self) {
        tracing::info!(
            inserted = self.inserted,
            extracted = self.extracted,
            empty_requests = self.empty_requests,
            peak_len = self.peak_len,
            "result queue statistics"
        );
    }
}

impl Default for QueueStats {
    fn default() -> Self {
        QueueStats::new()
    }
}
