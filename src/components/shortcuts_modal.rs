//! Modal listing gallery keyboard shortcuts.

use leptos::prelude::*;

use crate::util::shortcuts::SHORTCUTS;

/// Fullscreen modal with shortcut table.
#[component]
pub fn ShortcutsModal(on_close: Callback<()>) -> impl IntoView {
    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });

    view! {
        <div class="shortcuts-modal__backdrop" on:click=on_backdrop>
            <div class="shortcuts-modal" on:click=move |ev| ev.stop_propagation() on:keydown=move |ev| on_keydown.run(ev) tabindex="0">
                <div class="shortcuts-modal__header">
                    <h2>"Shortcuts"</h2>
                    <button class="shortcuts-modal__close" on:click=on_close_click title="Close">
                        "✕"
                    </button>
                </div>
                <table class="shortcuts-modal__table">
                    <thead>
                        <tr>
                            <th>"Action"</th>
                            <th>"Key"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {SHORTCUTS
                            .iter()
                            .map(|row| {
                                view! {
                                    <tr>
                                        <td>{row.action}</td>
                                        <td class="shortcuts-modal__keys">{row.keys}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
