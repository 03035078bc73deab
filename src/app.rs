//! Root widget component with context providers and the dispatcher.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the single `RwSignal<WidgetState>`. Every component reports
//! user actions through the `Callback<Msg>` provided here, which runs
//! `WidgetState::dispatch` and then executes the returned commands against
//! the browser. The job load is spawned once on mount.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::{
    filter_bar::FilterBar, job_list::JobList, job_modal::JobModal, theme_toggle::ThemeToggle,
};
use crate::config::WidgetConfig;
use crate::state::widget::{Msg, WidgetState};
use crate::util::{commands, scroll_lock::ScrollLock};

/// Root widget component.
#[component]
pub fn App(config: WidgetConfig) -> impl IntoView {
    provide_meta_context();

    let theme = crate::util::theme::read_preference(&config.theme_storage_key);
    let state = RwSignal::new(WidgetState::new(theme));
    let config = StoredValue::new(config);
    let scroll = StoredValue::new(ScrollLock::default());

    let dispatch = Callback::new(move |msg: Msg| {
        let pending = state.try_update(|s| s.dispatch(msg)).unwrap_or_default();
        for command in pending {
            scroll.update_value(|lock| config.with_value(|cfg| commands::run(command, cfg, lock)));
        }
    });

    for command in state.with_untracked(WidgetState::init_commands) {
        scroll.update_value(|lock| config.with_value(|cfg| commands::run(command, cfg, lock)));
    }

    provide_context(state);
    provide_context(config);
    provide_context(dispatch);

    // Escape closes the detail view from anywhere on the page.
    let keys = window_event_listener(leptos::ev::keydown, move |ev| {
        if let Some(msg) = Msg::from_key(&ev.key()) {
            dispatch.run(msg);
        }
    });
    on_cleanup(move || keys.remove());

    #[cfg(feature = "csr")]
    {
        let url = config.with_value(|cfg| cfg.jobs_url.clone());
        log::debug!("fetching jobs from {url}");
        dispatch.run(Msg::LoadStarted);
        leptos::task::spawn_local(async move {
            let outcome = match crate::net::api::fetch_jobs(&url).await {
                Ok(jobs) => Msg::JobsLoaded(jobs),
                Err(e) => Msg::LoadFailed(e),
            };
            dispatch.run(outcome);
        });
    }

    view! {
        <Title text="Job Board"/>

        <div class="job-board">
            <header class="job-board__header">
                <h1>"Open Positions"</h1>
            </header>
            <FilterBar/>
            <JobList/>
            <JobModal/>
            <ThemeToggle/>
        </div>
    }
}
