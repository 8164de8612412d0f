use std::time::{Duration, Instant};

/// A search value waiting for its quiescence window to elapse.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingSearch {
    expr: String,
    deadline: Instant,
}

/// Trailing-edge debouncer for the search box.
///
/// Holds at most one pending timer: every accepted keystroke replaces it.
/// Time is passed in by the caller, which keeps the debouncer a plain value
/// that the update function can own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchDebouncer {
    window: Duration,
    min_len: Option<usize>,
    pending: Option<PendingSearch>,
}

impl SearchDebouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            min_len: None,
            pending: None,
        }
    }

    /// Suppresses forwarding of non-empty input shorter than `min_len` chars.
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = Some(min_len);
        self
    }

    /// Whether `expr` may be forwarded at all under the length rule.
    pub fn accepts(&self, expr: &str) -> bool {
        let len = expr.chars().count();
        match self.min_len {
            Some(min) => len == 0 || len >= min,
            None => true,
        }
    }

    /// Registers a keystroke. Returns `true` if a timer was armed.
    ///
    /// Input rejected by the length rule cancels the pending timer so the
    /// stale value never fires.
    pub fn input(&mut self, expr: &str, now: Instant) -> bool {
        if !self.accepts(expr) {
            self.pending = None;
            return false;
        }
        self.pending = Some(PendingSearch {
            expr: expr.to_owned(),
            deadline: now + self.window,
        });
        true
    }

    /// Returns the pending value once its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some(pending) if pending.deadline <= now => {
                self.pending.take().map(|pending| pending.expr)
            }
            _ => None,
        }
    }

    /// Explicit submission bypasses both the window and the length rule.
    pub fn submit(&mut self, expr: &str) -> String {
        self.pending = None;
        expr.to_owned()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }
}
