#[cfg(test)]
#[path = "jobs_test.rs"]
mod jobs_test;

use crate::net::types::Job;

/// Progress of the one-shot job load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// The loaded job collection and where the load stands.
#[derive(Clone, Debug, Default)]
pub struct JobsState {
    pub items: Vec<Job>,
    pub phase: LoadPhase,
    /// The load-failure message stays up until the filter inputs change.
    pub failure_shown: bool,
}

impl JobsState {
    /// Look up a job in the full collection, ignoring any filter.
    pub fn find(&self, id: i64) -> Option<&Job> {
        self.items.iter().find(|j| j.id == id)
    }

    /// Distinct departments in first-seen order.
    pub fn departments(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for job in &self.items {
            if !out.iter().any(|d| d == &job.department) {
                out.push(job.department.clone());
            }
        }
        out
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }
}
