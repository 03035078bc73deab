//! Widget state and its single dispatcher.
//!
//! DESIGN
//! ======
//! Every user action and load outcome arrives as a [`Msg`]. `dispatch`
//! updates state in place and returns the browser side effects to run as
//! [`Command`]s, so the whole interaction model is testable without a DOM.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use super::detail::DetailState;
use super::filter::{FilterState, filter_jobs};
use super::jobs::{JobsState, LoadPhase};
use super::theme::Theme;
use crate::error::DataLoadFailure;
use crate::net::types::Job;

/// Key that closes the detail view.
pub const CANCEL_KEY: &str = "Escape";

/// Inputs to the widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    LoadStarted,
    JobsLoaded(Vec<Job>),
    LoadFailed(DataLoadFailure),
    SearchChanged(String),
    DepartmentChanged(String),
    ApplyClicked(i64),
    CloseClicked,
    BackdropClicked,
    KeyPressed(String),
    ThemeToggled,
}

/// Browser side effects requested by `dispatch`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Set the root element's presentation theme.
    ApplyTheme(Theme),
    /// Write the theme to durable storage.
    PersistTheme(Theme),
    /// Suppress background page scroll.
    LockScroll,
    /// Restore background page scroll.
    UnlockScroll,
}

impl Msg {
    /// Message for a page-level key press. Only the cancel key matters, so
    /// other keys produce nothing and never touch state.
    pub fn from_key(key: &str) -> Option<Self> {
        (key == CANCEL_KEY).then(|| Self::KeyPressed(key.to_owned()))
    }
}

#[derive(Clone, Debug, Default)]
pub struct WidgetState {
    pub jobs: JobsState,
    pub filter: FilterState,
    pub detail: DetailState,
    pub theme: Theme,
}

impl WidgetState {
    pub fn new(theme: Theme) -> Self {
        Self { theme, ..Self::default() }
    }

    /// Commands to run once at start-up.
    pub fn init_commands(&self) -> Vec<Command> {
        vec![Command::ApplyTheme(self.theme)]
    }

    pub fn dispatch(&mut self, msg: Msg) -> Vec<Command> {
        match msg {
            Msg::LoadStarted => {
                self.jobs.phase = LoadPhase::Loading;
                Vec::new()
            }
            Msg::JobsLoaded(items) => {
                log::info!("loaded {} jobs", items.len());
                self.jobs.items = items;
                self.jobs.phase = LoadPhase::Ready;
                Vec::new()
            }
            Msg::LoadFailed(e) => {
                log::error!("error fetching jobs: {e}");
                self.jobs.phase = LoadPhase::Failed;
                self.jobs.failure_shown = true;
                Vec::new()
            }
            Msg::SearchChanged(search) => {
                self.filter.search = search;
                self.jobs.failure_shown = false;
                Vec::new()
            }
            Msg::DepartmentChanged(department) => {
                self.filter.department = department;
                self.jobs.failure_shown = false;
                Vec::new()
            }
            Msg::ApplyClicked(id) => self.open_detail(id),
            Msg::CloseClicked | Msg::BackdropClicked => self.close_detail(),
            Msg::KeyPressed(key) => {
                if key == CANCEL_KEY && self.detail.is_open() {
                    self.close_detail()
                } else {
                    Vec::new()
                }
            }
            Msg::ThemeToggled => {
                self.theme = self.theme.toggled();
                vec![Command::ApplyTheme(self.theme), Command::PersistTheme(self.theme)]
            }
        }
    }

    /// Jobs passing the current filter, in collection order.
    pub fn visible_jobs(&self) -> Vec<&Job> {
        filter_jobs(&self.jobs.items, &self.filter)
    }

    pub fn loader_visible(&self) -> bool {
        self.jobs.is_loading()
    }

    pub fn list_visible(&self) -> bool {
        !self.jobs.is_loading()
    }

    fn open_detail(&mut self, id: i64) -> Vec<Command> {
        let Some(job) = self.jobs.find(id).cloned() else {
            log::debug!("no job with id {id}; ignoring");
            return Vec::new();
        };
        if self.detail.open(job) { vec![Command::LockScroll] } else { Vec::new() }
    }

    fn close_detail(&mut self) -> Vec<Command> {
        if self.detail.close() { vec![Command::UnlockScroll] } else { Vec::new() }
    }
}
