//! Table of server log rows, newest at the bottom.

use leptos::prelude::*;

use crate::state::logs::{LogsState, level_class};

#[component]
pub fn LogTable() -> impl IntoView {
    let logs = expect_context::<RwSignal<LogsState>>();

    let rows = move || logs.with(|s| s.filtered().into_iter().cloned().collect::<Vec<_>>());

    view! {
        <table class="log-table">
            <thead>
                <tr>
                    <th>"Time"</th>
                    <th>"Level"</th>
                    <th>"Source"</th>
                    <th>"Message"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    rows()
                        .into_iter()
                        .map(|row| {
                            view! {
                                <tr>
                                    <td class="log-table__time">{row.timestamp}</td>
                                    <td>
                                        <span class=level_class(&row.level)>{row.level.clone()}</span>
                                    </td>
                                    <td class="log-table__source">{row.source}</td>
                                    <td class="log-table__message">{row.message}</td>
                                </tr>
                            }
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
        <Show when=move || logs.with(|s| s.filtered().is_empty())>
            <p class="log-table__empty">"No log entries."</p>
        </Show>
    }
}
