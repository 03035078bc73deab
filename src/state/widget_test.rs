use super::*;
use crate::render::{LOAD_FAILED_MESSAGE, ListView, NO_JOBS_MESSAGE, list_view};

fn engineer() -> Job {
    Job {
        id: 1,
        title: "Engineer".to_owned(),
        department: "Eng".to_owned(),
        location: "Remote".to_owned(),
        description: "Build things".to_owned(),
    }
}

fn recruiter() -> Job {
    Job {
        id: 2,
        title: "Recruiter".to_owned(),
        department: "People".to_owned(),
        location: "Berlin".to_owned(),
        description: "Find people".to_owned(),
    }
}

fn loaded(jobs: Vec<Job>) -> WidgetState {
    let mut state = WidgetState::default();
    state.dispatch(Msg::LoadStarted);
    state.dispatch(Msg::JobsLoaded(jobs));
    state
}

fn card_titles(state: &WidgetState) -> Vec<String> {
    match list_view(state) {
        ListView::Cards(cards) => cards.into_iter().map(|c| c.title).collect(),
        ListView::Message(_) => Vec::new(),
    }
}

// =============================================================
// Load
// =============================================================

#[test]
fn load_started_shows_loader_and_hides_list() {
    let mut state = WidgetState::default();
    assert!(state.dispatch(Msg::LoadStarted).is_empty());
    assert!(state.loader_visible());
    assert!(!state.list_visible());
}

#[test]
fn scenario_loaded_job_renders_one_card() {
    let state = loaded(vec![engineer()]);
    assert_eq!(state.jobs.phase, LoadPhase::Ready);
    assert!(!state.loader_visible());
    assert!(state.list_visible());
    assert_eq!(card_titles(&state), vec!["Engineer"]);
}

#[test]
fn scenario_load_failure_shows_message_and_restores_container() {
    let mut state = WidgetState::default();
    state.dispatch(Msg::LoadStarted);
    state.dispatch(Msg::LoadFailed(DataLoadFailure::Transport("offline".to_owned())));
    assert_eq!(state.jobs.phase, LoadPhase::Failed);
    assert!(!state.loader_visible());
    assert!(state.list_visible());
    assert_eq!(list_view(&state), ListView::Message(LOAD_FAILED_MESSAGE));
}

#[test]
fn filter_change_after_failed_load_replaces_failure_message() {
    let mut state = WidgetState::default();
    state.dispatch(Msg::LoadStarted);
    state.dispatch(Msg::LoadFailed(DataLoadFailure::Transport("offline".to_owned())));
    state.dispatch(Msg::SearchChanged("a".to_owned()));
    assert_eq!(list_view(&state), ListView::Message(NO_JOBS_MESSAGE));
}

#[test]
fn department_change_after_failed_load_replaces_failure_message() {
    let mut state = WidgetState::default();
    state.dispatch(Msg::LoadStarted);
    state.dispatch(Msg::LoadFailed(DataLoadFailure::Status { status: 503 }));
    state.dispatch(Msg::DepartmentChanged("Eng".to_owned()));
    assert_eq!(list_view(&state), ListView::Message(NO_JOBS_MESSAGE));
}

#[test]
fn filter_typed_during_load_applies_on_arrival() {
    let mut state = WidgetState::default();
    state.dispatch(Msg::LoadStarted);
    state.dispatch(Msg::SearchChanged("recr".to_owned()));
    state.dispatch(Msg::JobsLoaded(vec![engineer(), recruiter()]));
    assert_eq!(card_titles(&state), vec!["Recruiter"]);
}

// =============================================================
// Filter
// =============================================================

#[test]
fn scenario_lowercase_search_matches_title() {
    let mut state = loaded(vec![engineer()]);
    state.dispatch(Msg::SearchChanged("eng".to_owned()));
    state.dispatch(Msg::DepartmentChanged(String::new()));
    assert_eq!(card_titles(&state), vec!["Engineer"]);
}

#[test]
fn scenario_unmatched_search_shows_no_jobs_message() {
    let mut state = loaded(vec![engineer()]);
    state.dispatch(Msg::SearchChanged("zzz".to_owned()));
    assert_eq!(list_view(&state), ListView::Message(NO_JOBS_MESSAGE));
}

#[test]
fn filtering_never_mutates_collection() {
    let mut state = loaded(vec![engineer(), recruiter()]);
    state.dispatch(Msg::SearchChanged("zzz".to_owned()));
    state.dispatch(Msg::DepartmentChanged("Eng".to_owned()));
    assert_eq!(state.jobs.items, vec![engineer(), recruiter()]);
}

#[test]
fn clearing_filters_restores_full_list() {
    let mut state = loaded(vec![engineer(), recruiter()]);
    state.dispatch(Msg::DepartmentChanged("People".to_owned()));
    assert_eq!(card_titles(&state), vec!["Recruiter"]);
    state.dispatch(Msg::DepartmentChanged(String::new()));
    assert_eq!(card_titles(&state), vec!["Engineer", "Recruiter"]);
}

// =============================================================
// Detail view
// =============================================================

#[test]
fn apply_click_opens_detail_and_locks_scroll() {
    let mut state = loaded(vec![engineer()]);
    assert_eq!(state.dispatch(Msg::ApplyClicked(1)), vec![Command::LockScroll]);
    assert_eq!(state.detail.job().map(|j| j.title.as_str()), Some("Engineer"));
}

#[test]
fn apply_click_for_missing_id_is_noop_when_closed() {
    let mut state = loaded(vec![engineer()]);
    assert!(state.dispatch(Msg::ApplyClicked(42)).is_empty());
    assert_eq!(state.detail, DetailState::Closed);
}

#[test]
fn apply_click_for_missing_id_is_noop_when_open() {
    let mut state = loaded(vec![engineer()]);
    state.dispatch(Msg::ApplyClicked(1));
    assert!(state.dispatch(Msg::ApplyClicked(42)).is_empty());
    assert_eq!(state.detail, DetailState::Open(engineer()));
}

#[test]
fn detail_lookup_ignores_active_filter() {
    let mut state = loaded(vec![engineer(), recruiter()]);
    state.dispatch(Msg::SearchChanged("engineer".to_owned()));
    state.dispatch(Msg::ApplyClicked(2));
    assert_eq!(state.detail.job().map(|j| j.id), Some(2));
}

#[test]
fn opening_another_job_replaces_it_without_relocking() {
    let mut state = loaded(vec![engineer(), recruiter()]);
    state.dispatch(Msg::ApplyClicked(1));
    assert!(state.dispatch(Msg::ApplyClicked(2)).is_empty());
    assert_eq!(state.detail.job().map(|j| j.id), Some(2));
}

#[test]
fn every_close_affordance_closes_and_unlocks() {
    for msg in [Msg::CloseClicked, Msg::BackdropClicked, Msg::KeyPressed("Escape".to_owned())] {
        let mut state = loaded(vec![engineer()]);
        state.dispatch(Msg::ApplyClicked(1));
        assert_eq!(state.dispatch(msg), vec![Command::UnlockScroll]);
        assert!(!state.detail.is_open());
    }
}

#[test]
fn scenario_escape_after_open_closes_and_restores_scroll() {
    let mut state = loaded(vec![engineer()]);
    let mut commands = state.dispatch(Msg::ApplyClicked(1));
    commands.extend(state.dispatch(Msg::KeyPressed(CANCEL_KEY.to_owned())));
    assert_eq!(commands, vec![Command::LockScroll, Command::UnlockScroll]);
    assert_eq!(state.detail, DetailState::Closed);
}

#[test]
fn close_when_closed_is_noop() {
    let mut state = loaded(vec![engineer()]);
    assert!(state.dispatch(Msg::CloseClicked).is_empty());
    assert!(state.dispatch(Msg::KeyPressed(CANCEL_KEY.to_owned())).is_empty());
    assert_eq!(state.detail, DetailState::Closed);
}

#[test]
fn other_keys_leave_detail_open() {
    let mut state = loaded(vec![engineer()]);
    state.dispatch(Msg::ApplyClicked(1));
    assert!(state.dispatch(Msg::KeyPressed("Enter".to_owned())).is_empty());
    assert!(state.detail.is_open());
}

// =============================================================
// Theme
// =============================================================

#[test]
fn init_applies_stored_theme() {
    let state = WidgetState::new(Theme::Dark);
    assert_eq!(state.init_commands(), vec![Command::ApplyTheme(Theme::Dark)]);
}

#[test]
fn theme_toggle_applies_and_persists() {
    let mut state = WidgetState::new(Theme::Light);
    assert_eq!(
        state.dispatch(Msg::ThemeToggled),
        vec![Command::ApplyTheme(Theme::Dark), Command::PersistTheme(Theme::Dark)]
    );
    assert_eq!(state.theme.icon(), Theme::Dark.icon());
}

#[test]
fn theme_toggle_twice_returns_to_start() {
    let mut state = WidgetState::new(Theme::Light);
    state.dispatch(Msg::ThemeToggled);
    let commands = state.dispatch(Msg::ThemeToggled);
    assert_eq!(state.theme, Theme::Light);
    assert_eq!(commands, vec![Command::ApplyTheme(Theme::Light), Command::PersistTheme(Theme::Light)]);
}

#[test]
fn theme_toggle_does_not_touch_jobs_or_filter() {
    let mut state = loaded(vec![engineer()]);
    state.dispatch(Msg::SearchChanged("eng".to_owned()));
    state.dispatch(Msg::ThemeToggled);
    assert_eq!(state.filter.search, "eng");
    assert_eq!(card_titles(&state), vec!["Engineer"]);
}

// =============================================================
// Key mapping
// =============================================================

#[test]
fn only_cancel_key_maps_to_a_message() {
    assert_eq!(Msg::from_key("Escape"), Some(Msg::KeyPressed("Escape".to_owned())));
    assert_eq!(Msg::from_key("a"), None);
    assert_eq!(Msg::from_key("Enter"), None);
}
