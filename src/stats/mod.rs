//! Operation accounting
//!
//! Counts the work done by range operations so callers (and tests) can check
//! the O(log n) visit bound. Disabled unless requested in the config.

/// Counters accumulated since construction or the last reset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperationStats {
    /// Range updates performed
    pub updates: usize,

    /// Range queries performed
    pub queries: usize,

    /// Slots entered by update/query recursion
    pub slot_visits: usize,

    /// Pushdowns that moved a pending update to the children
    pub pushdowns: usize,

    /// Single-slot applies
    pub applies: usize,

    /// Deepest slot reached (root = 0)
    pub max_depth: usize,
}

impl OperationStats {
    /// Average slot visits per range operation
    pub fn visits_per_operation(&self) -> f64 {
        let operations = self.updates + self.queries;
        if operations == 0 {
            return 0.0;
        }
        self.slot_visits as f64 / operations as f64
    }
}

/// Tracks operation counts when enabled; every hook is a no-op otherwise
#[derive(Debug)]
pub struct StatsTracker {
    stats: Option<OperationStats>,
}

impl StatsTracker {
    /// Create tracker
    pub fn new(enabled: bool) -> Self {
        Self {
            stats: enabled.then(OperationStats::default),
        }
    }

    /// Record a range update
    pub fn record_update(&mut self) {
        if let Some(ref mut s) = self.stats {
            s.updates += 1;
        }
    }

    /// Record a range query
    pub fn record_query(&mut self) {
        if let Some(ref mut s) = self.stats {
            s.queries += 1;
        }
    }

    /// Record entry into a slot at `depth`
    pub fn record_visit(&mut self, depth: usize) {
        if let Some(ref mut s) = self.stats {
            s.slot_visits += 1;
            s.max_depth = s.max_depth.max(depth);
        }
    }

    /// Record a pushdown that had work to do
    pub fn record_pushdown(&mut self) {
        if let Some(ref mut s) = self.stats {
            s.pushdowns += 1;
        }
    }

    /// Record a single-slot apply
    pub fn record_apply(&mut self) {
        if let Some(ref mut s) = self.stats {
            s.applies += 1;
        }
    }

    /// Current counters, `None` when disabled
    pub fn stats(&self) -> Option<&OperationStats> {
        self.stats.as_ref()
    }

    /// Zero every counter (stays disabled if disabled)
    pub fn reset(&mut self) {
        if let Some(ref mut s) = self.stats {
            *s = OperationStats::default();
        }
    }
}
