//! Local presale progress.
//!
//! This is display state only; the on-chain vault is authoritative.

use tracing::{debug, info};

use crate::types::PresaleStatus;

pub trait PresaleLedger {
    fn status(&self) -> PresaleStatus;

    /// Record a confirmed deposit of `amount` SOL.
    fn add_deposit(&mut self, amount: f64);
}

#[derive(Debug, Clone)]
pub struct PresaleTracker {
    raised: f64,
    hard_cap: f64,
    ended: bool,
}

impl PresaleTracker {
    pub fn new(hard_cap: f64) -> Self {
        Self {
            raised: 0.0,
            hard_cap,
            ended: false,
        }
    }

    /// Resume from a total fetched elsewhere.
    pub fn with_raised(hard_cap: f64, raised: f64) -> Self {
        let mut tracker = Self::new(hard_cap);
        tracker.add_deposit(raised);
        tracker
    }

    pub fn end(&mut self) {
        self.ended = true;
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl PresaleLedger for PresaleTracker {
    fn status(&self) -> PresaleStatus {
        PresaleStatus {
            raised: self.raised,
            hard_cap: self.hard_cap,
            ended: self.ended,
        }
    }

    fn add_deposit(&mut self, amount: f64) {
        if !amount.is_finite() || amount <= 0.0 {
            debug!(amount, "ignoring non-positive deposit");
            return;
        }
        self.raised += amount;

        if !self.ended && self.raised >= self.hard_cap {
            self.ended = true;
            info!(raised = self.raised, hard_cap = self.hard_cap, "hard cap reached");
        }
    }
}
