//! Pure view models for the job list and the detail view.
//!
//! Components only turn these into markup; everything that decides what is
//! shown lives here so it can be tested without a DOM.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::config::WidgetConfig;
use crate::net::types::Job;
use crate::state::jobs::LoadPhase;
use crate::state::widget::WidgetState;

pub const NO_JOBS_MESSAGE: &str = "No jobs found matching your criteria.";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load jobs. Please try again later.";

/// One job card in the list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub id: i64,
    pub title: String,
    pub department: String,
    pub location: String,
}

impl From<&Job> for CardView {
    fn from(job: &Job) -> Self {
        Self {
            id: job.id,
            title: job.title.clone(),
            department: job.department.clone(),
            location: job.location.clone(),
        }
    }
}

/// Contents of the list container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListView {
    Cards(Vec<CardView>),
    Message(&'static str),
}

/// Contents of the open detail view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub department: String,
    pub location: String,
    pub description: String,
    pub apply_href: String,
}

/// One card per job in input order, or the "no jobs" message.
pub fn render_jobs(jobs: &[&Job]) -> ListView {
    if jobs.is_empty() {
        return ListView::Message(NO_JOBS_MESSAGE);
    }
    ListView::Cards(jobs.iter().map(|j| CardView::from(*j)).collect())
}

/// What the list container shows for the whole widget state.
pub fn list_view(state: &WidgetState) -> ListView {
    if state.jobs.phase == LoadPhase::Failed && state.jobs.failure_shown {
        return ListView::Message(LOAD_FAILED_MESSAGE);
    }
    render_jobs(&state.visible_jobs())
}

pub fn detail_view(job: &Job, config: &WidgetConfig) -> DetailView {
    DetailView {
        title: job.title.clone(),
        department: job.department.clone(),
        location: job.location.clone(),
        description: job.description.clone(),
        apply_href: config.apply_href(job.id),
    }
}

/// Department selector options: the configured list, or the departments
/// present in the loaded jobs when none are configured.
pub fn department_options(config: &WidgetConfig, state: &WidgetState) -> Vec<String> {
    if config.departments.is_empty() {
        state.jobs.departments()
    } else {
        config.departments.clone()
    }
}
