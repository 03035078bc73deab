//! Job list container with loading indicator.
//!
//! DESIGN
//! ======
//! Cards are keyed by job id so unchanged cards survive re-filtering. Apply
//! clicks are caught by a single listener on the container that reads the
//! clicked button's `data-id`, so nothing is rebound when the list changes.

#[cfg(test)]
#[path = "job_list_test.rs"]
mod job_list_test;

use leptos::prelude::*;

use crate::components::job_card::JobCard;
use crate::render::{ListView, list_view};
use crate::state::widget::{Msg, WidgetState};

#[cfg(feature = "csr")]
const APPLY_SELECTOR: &str = ".apply-button";

#[component]
pub fn JobList() -> impl IntoView {
    let state = expect_context::<RwSignal<WidgetState>>();
    let dispatch = expect_context::<Callback<Msg>>();

    let list = Memo::new(move |_| state.with(list_view));
    let cards = move || match list.get() {
        ListView::Cards(cards) => cards,
        ListView::Message(_) => Vec::new(),
    };
    let message = move || match list.get() {
        ListView::Message(text) => Some(view! { <p class="no-jobs">{text}</p> }),
        ListView::Cards(_) => None,
    };

    let loader_display = move || if state.with(WidgetState::loader_visible) { "block" } else { "none" };
    let list_display = move || if state.with(WidgetState::list_visible) { "grid" } else { "none" };

    let on_click = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            if let Some(id) = apply_target_id(&ev) {
                dispatch.run(Msg::ApplyClicked(id));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (ev, dispatch);
        }
    };

    view! {
        <div id="loader" class="loader" style:display=loader_display></div>
        <div id="jobs-container" class="jobs-container" style:display=list_display on:click=on_click>
            {message}
            <For each=cards key=|card| card.id children=|card| view! { <JobCard card=card/> }/>
        </div>
    }
}

/// Job id of the Apply button an event came from, if any.
#[cfg(feature = "csr")]
fn apply_target_id(ev: &leptos::ev::MouseEvent) -> Option<i64> {
    use wasm_bindgen::JsCast;

    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let button = target.closest(APPLY_SELECTOR).ok().flatten()?;
    parse_card_id(button.get_attribute("data-id").as_deref())
}

/// Parse a card's `data-id` attribute.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
fn parse_card_id(raw: Option<&str>) -> Option<i64> {
    raw?.trim().parse().ok()
}
