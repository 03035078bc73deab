//! Browser helpers used by the widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from components and
//! state. Outside the `csr` feature they degrade to no-ops.

pub mod commands;
pub mod scroll_lock;
pub mod storage;
pub mod theme;
