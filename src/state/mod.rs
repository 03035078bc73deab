//! Widget state.
//!
//! DESIGN
//! ======
//! State is split by concern (`jobs`, `filter`, `detail`, `theme`) and
//! composed in `widget`, whose `dispatch` is the single place user actions
//! and load outcomes change anything.

pub mod detail;
pub mod filter;
pub mod jobs;
pub mod theme;
pub mod widget;
