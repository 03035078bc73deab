//! Detail view state machine.
//!
//! `Closed` → `Open(job)` when an id resolves; `Open` → `Closed` on any
//! close affordance. Opening while already open replaces the shown job.

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

use crate::net::types::Job;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DetailState {
    #[default]
    Closed,
    Open(Job),
}

impl DetailState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn job(&self) -> Option<&Job> {
        match self {
            Self::Open(job) => Some(job),
            Self::Closed => None,
        }
    }

    /// Show `job`. Returns `true` if the view was closed before.
    pub fn open(&mut self, job: Job) -> bool {
        let was_closed = !self.is_open();
        *self = Self::Open(job);
        was_closed
    }

    /// Hide the view. Returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        *self = Self::Closed;
        was_open
    }
}
