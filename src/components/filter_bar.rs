//! Search box and department selector.

use leptos::prelude::*;

use crate::config::WidgetConfig;
use crate::render::department_options;
use crate::state::widget::{Msg, WidgetState};

/// Label of the empty-valued "all departments" option.
const ALL_DEPARTMENTS: &str = "All Departments";

#[component]
pub fn FilterBar() -> impl IntoView {
    let state = expect_context::<RwSignal<WidgetState>>();
    let config = expect_context::<StoredValue<WidgetConfig>>();
    let dispatch = expect_context::<Callback<Msg>>();

    let options = Memo::new(move |_| config.with_value(|cfg| state.with(|s| department_options(cfg, s))));

    view! {
        <div class="filters">
            <input
                id="search"
                class="filters__search"
                type="text"
                placeholder="Search job titles..."
                prop:value=move || state.with(|s| s.filter.search.clone())
                on:input=move |ev| dispatch.run(Msg::SearchChanged(event_target_value(&ev)))
            />
            <select
                id="department"
                class="filters__department"
                prop:value=move || state.with(|s| s.filter.department.clone())
                on:change=move |ev| dispatch.run(Msg::DepartmentChanged(event_target_value(&ev)))
            >
                <option value="">{ALL_DEPARTMENTS}</option>
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|d| {
                            let label = d.clone();
                            view! { <option value=d>{label}</option> }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}
