//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read `WidgetState` from context, render the view models in
//! `render`, and report user actions through the `Callback<Msg>` dispatcher.

pub mod filter_bar;
pub mod job_card;
pub mod job_list;
pub mod job_modal;
pub mod theme_toggle;
