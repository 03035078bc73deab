//! Detail modal for the selected job.
//!
//! The overlay closes from its close button or a click on the backdrop;
//! clicks inside the content stop propagating. Escape is handled at the
//! window level by `App`.

use leptos::prelude::*;

use crate::config::WidgetConfig;
use crate::render::detail_view;
use crate::state::widget::{Msg, WidgetState};

#[component]
pub fn JobModal() -> impl IntoView {
    let state = expect_context::<RwSignal<WidgetState>>();
    let config = expect_context::<StoredValue<WidgetConfig>>();
    let dispatch = expect_context::<Callback<Msg>>();

    let is_open = move || state.with(|s| s.detail.is_open());
    let detail = Memo::new(move |_| {
        state.with(|s| s.detail.job().map(|job| config.with_value(|cfg| detail_view(job, cfg))))
    });

    view! {
        <div
            id="job-modal"
            class="modal"
            class:active=is_open
            on:click=move |_| dispatch.run(Msg::BackdropClicked)
        >
            <div class="modal-content" on:click=move |ev| ev.stop_propagation()>
                <button
                    id="close-modal"
                    class="close-modal"
                    title="Close"
                    on:click=move |_| dispatch.run(Msg::CloseClicked)
                >
                    "✕"
                </button>
                {move || {
                    detail
                        .get()
                        .map(|d| {
                            view! {
                                <h2 id="modal-title">{d.title}</h2>
                                <div class="job-meta">
                                    <span id="modal-department">{d.department}</span>
                                    <span id="modal-location">{d.location}</span>
                                </div>
                                <p id="modal-description">{d.description}</p>
                                <a id="apply-link" class="apply-link" href=d.apply_href>
                                    "Apply Now"
                                </a>
                            }
                        })
                }}
            </div>
        </div>
    }
}
