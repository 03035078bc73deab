//! Light/dark theme toggle button.

use leptos::prelude::*;

use crate::state::widget::{Msg, WidgetState};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let state = expect_context::<RwSignal<WidgetState>>();
    let dispatch = expect_context::<Callback<Msg>>();

    let icon = move || state.with(|s| s.theme.icon());

    view! {
        <button
            class="theme-toggle"
            aria-label="Toggle dark mode"
            on:click=move |_| dispatch.run(Msg::ThemeToggled)
        >
            {icon}
        </button>
    }
}
