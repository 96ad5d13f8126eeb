//! Due-Date Summary Indicators
//!
//! Raw due-soon/overdue counters plus the aggregate chip (overdue wins
//! over due-soon; hidden when neither applies).

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn SummaryBar() -> impl IntoView {
    let ctx = use_app_context();
    let summary = ctx.todos.summary;

    view! {
        <div class="summary-bar">
            <span class="summary-count summary-count--soon" title="Tasks due today or tomorrow">
                {move || summary.get().due_soon}
            </span>
            <span class="summary-count summary-count--overdue" title="Overdue tasks">
                {move || summary.get().overdue}
            </span>
            {move || {
                summary.get().chip().map(|chip| {
                    view! {
                        <div class=format!("due-chip due-chip--{}", chip.tone)>
                            <span class="due-chip__text">{chip.label}</span>
                        </div>
                    }
                })
            }}
        </div>
    }
}
