//! Networking modules for the job data source.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` fetches and decodes the job list, `types` defines the record shape.

pub mod api;
pub mod types;
