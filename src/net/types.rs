//! Wire types for the job data source.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// A single job posting. Never mutated after load.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub department: String,
    pub location: String,
    pub description: String,
}
