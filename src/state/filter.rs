//! Title/department filter over the loaded jobs.
//!
//! Filtering is a stable linear scan; it never reorders or mutates the
//! collection.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::net::types::Job;

/// Current filter inputs. An empty `department` means all departments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search: String,
    pub department: String,
}

impl FilterState {
    /// Whether `job` passes both predicates.
    pub fn matches(&self, job: &Job) -> bool {
        let matches_search =
            self.search.is_empty() || job.title.to_lowercase().contains(&self.search.to_lowercase());
        let matches_department = self.department.is_empty() || job.department == self.department;
        matches_search && matches_department
    }
}

/// Jobs passing `filter`, in collection order.
pub fn filter_jobs<'a>(jobs: &'a [Job], filter: &FilterState) -> Vec<&'a Job> {
    jobs.iter().filter(|j| filter.matches(j)).collect()
}
