//! Card component for one job in the list.

use leptos::prelude::*;

use crate::render::CardView;

/// A job card. The Apply button carries the job id for the list's
/// delegated click handler.
#[component]
pub fn JobCard(card: CardView) -> impl IntoView {
    let card_id = card.id.to_string();
    let button_id = card_id.clone();

    view! {
        <div class="job-card" data-id=card_id>
            <h3 class="job-title">{card.title}</h3>
            <div class="job-meta">
                <span>{card.department}</span>
                <span>{card.location}</span>
            </div>
            <button class="apply-button" data-id=button_id>
                "Apply"
            </button>
        </div>
    }
}
