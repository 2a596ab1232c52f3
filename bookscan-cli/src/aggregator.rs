//! Reorders results streamed from the executor
//!
//! Discovery numbers pairs `0..n`, so the aggregator only tracks the next index
//! to print and parks anything that arrives early.

use crate::executor::PairResult;
use std::collections::BTreeMap;

/// Releases pair results in discovery order as they become contiguous
pub struct ResultAggregator {
    pair_count: usize,
    next: usize,
    pending: BTreeMap<usize, PairResult>,
}

impl ResultAggregator {
    pub fn new(pair_count: usize) -> Self {
        Self {
            pair_count,
            next: 0,
            pending: BTreeMap::new(),
        }
    }

    /// Park `result` and return every result now ready, in index order
    pub fn add(&mut self, result: PairResult) -> Vec<PairResult> {
        self.pending.insert(result.index, result);

        let mut ready = Vec::new();
        while let Some(result) = self.pending.remove(&self.next) {
            ready.push(result);
            self.next += 1;
        }
        ready
    }

    /// Flush whatever is still parked behind a missing index
    pub fn drain(&mut self) -> Vec<PairResult> {
        std::mem::take(&mut self.pending).into_values().collect()
    }

    /// Every pair up to `pair_count` has been released by `add`
    pub fn is_complete(&self) -> bool {
        self.next >= self.pair_count
    }
}
