use std::{cmp::Ordering, collections::BinaryHeap};

use crate::{
    ranking::{
        AscendingCoefficient, EmptyQueueError, QueueOperation, QueueResult, RankedResult,
        RankingPolicy,
    },
    statistics::QueueStats,
};

/// Heap slot carrying the policy next to the result, so that `BinaryHeap` can order it.
///
/// `BinaryHeap` is a max-heap, so the comparison is flipped: the result the policy ranks
/// first is the greatest slot and sits at the top.
struct HeapSlot<P> {
    result: RankedResult,
    policy: P,
}

impl<P: RankingPolicy> PartialEq for HeapSlot<P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<P: RankingPolicy> Eq for HeapSlot<P> {}

impl<P: RankingPolicy> PartialOrd for HeapSlot<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: RankingPolicy> Ord for HeapSlot<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.policy.compare(&other.result, &self.result)
    }
}

/// Priority queue of [`RankedResult`]s that always hands out the best-ranked result first.
///
/// With the default [`AscendingCoefficient`] policy the best result is the one with the
/// smallest coefficient.
///
/// # Semantics
/// - Results are owned by the queue once inserted and cannot be mutated there. To change the
///   coefficient of a grid point, insert a new result; stale entries are the caller's to skip.
/// - The same `(row, col)` may be inserted any number of times.
/// - Ties: results the policy ranks equal come out in an unspecified relative order. The
///   backing `BinaryHeap` is not stable, insertion order is *not* preserved among ties.
/// - NaN coefficients are accepted, but they do not order consistently with anything else
///   and may surface at any point of the extraction sequence.
///
/// # Complexity
/// `insert` and `extract_best` are `O(log n)`, `peek_best`, `len` and `is_empty` are `O(1)`.
///
/// # Concurrency
/// No internal synchronization. Producers on several threads share one queue behind a
/// `std::sync::Mutex`.
///
/// # Example
/// ```
/// use dicrank::ranking::{RankedResult, ResultQueue};
///
/// let mut queue = ResultQueue::new();
/// for (i, c) in [5.0, 1.0, 3.0, 1.0, -2.0].into_iter().enumerate() {
///     queue.insert(RankedResult::new(c, 0, i as i32));
/// }
/// assert_eq!(queue.peek_best().unwrap().coefficient, -2.0);
///
/// let order: Vec<f64> = queue.drain_ranked().map(|r| r.coefficient).collect();
/// assert_eq!(order, vec![-2.0, 1.0, 1.0, 3.0, 5.0]);
/// assert!(queue.extract_best().is_err());
/// ```
pub struct ResultQueue<P: RankingPolicy = AscendingCoefficient> {
    heap: BinaryHeap<HeapSlot<P>>,
    policy: P,
    stats: QueueStats,
}

impl ResultQueue<AscendingCoefficient> {
    /// Creates an empty queue ranking by ascending coefficient.
    pub fn new() -> Self {
        ResultQueue::with_policy(AscendingCoefficient)
    }

    /// Same as [`ResultQueue::new`], preallocating room for `capacity` results.
    pub fn with_capacity(capacity: usize) -> Self {
        ResultQueue {
            heap: BinaryHeap::with_capacity(capacity),
            policy: AscendingCoefficient,
            stats: QueueStats::new(),
        }
    }
}

impl<P: RankingPolicy> ResultQueue<P> {
    /// Creates an empty queue ranking with `policy`.
    pub fn with_policy(policy: P) -> Self {
        ResultQueue {
            heap: BinaryHeap::new(),
            policy,
            stats: QueueStats::new(),
        }
    }

    /// The ranking policy every slot of this queue is ordered with.
    pub fn policy(&self) -> P {
        self.policy
    }

    /// Returns the number of results currently held.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if no results are held.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Counters of everything that went through this queue so far.
    pub fn stats(&self) -> &QueueStats {
        &self.stats
    }

    /// Inserts `result`. Never fails: duplicates and non-finite coefficients are accepted.
    pub fn insert(&mut self, result: RankedResult) {
        self.heap.push(HeapSlot {
            result,
            policy: self.policy,
        });
        self.stats.bump_inserted(self.heap.len());
    }

    /// Returns the best-ranked result without removing it.
    pub fn peek_best(&self) -> QueueResult<&RankedResult> {
        self.heap
            .peek()
            .map(|slot| &slot.result)
            .ok_or(EmptyQueueError {
                operation: QueueOperation::Peek,
            })
    }

    /// Removes and returns the best-ranked result.
    ///
    /// An error here means every inserted result has been consumed, which for a growing
    /// algorithm is the normal termination condition.
    pub fn extract_best(&mut self) -> QueueResult<RankedResult> {
        match self.pop_best() {
            Some(result) => Ok(result),
            None => {
                self.stats.bump_empty_requests();
                tracing::debug!("extraction requested on an empty result queue");
                Err(EmptyQueueError {
                    operation: QueueOperation::Extract,
                })
            }
        }
    }

    /// Extracts results best-first until the queue is empty. Dropping the iterator early
    /// leaves the remaining results in the queue.
    pub fn drain_ranked(&mut self) -> DrainRanked<'_, P> {
        DrainRanked { queue: self }
    }

    /// Consumes the queue, returning every result in extraction order.
    pub fn into_ranked_vec(mut self) -> Vec<RankedResult> {
        let mut ranked = Vec::with_capacity(self.len());
        ranked.extend(self.drain_ranked());
        ranked
    }

    fn pop_best(&mut self) -> Option<RankedResult> {
        let slot = self.heap.pop()?;
        self.stats.bump_extracted();
        Some(slot.result)
    }
}

impl Default for ResultQueue<AscendingCoefficient> {
    fn default() -> Self {
        ResultQueue::new()
    }
}

impl<P: RankingPolicy> Extend<RankedResult> for ResultQueue<P> {
    fn extend<I: IntoIterator<Item = RankedResult>>(&mut self, iter: I) {
        for result in iter {
            self.insert(result);
        }
    }
}

impl<P: RankingPolicy + Default> FromIterator<RankedResult> for ResultQueue<P> {
    fn from_iter<I: IntoIterator<Item = RankedResult>>(iter: I) -> Self {
        let mut queue = ResultQueue::with_policy(P::default());
        queue.extend(iter);
        queue
    }
}

/// Iterator returned by [`ResultQueue::drain_ranked`].
pub struct DrainRanked<'a, P: RankingPolicy> {
    queue: &'a mut ResultQueue<P>,
}

impl<P: RankingPolicy> Iterator for DrainRanked<'_, P> {
    type Item = RankedResult;

    fn next(&mut self) -> Option<RankedResult> {
        self.queue.pop_best()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<P: RankingPolicy> ExactSizeIterator for DrainRanked<'_, P> {}
