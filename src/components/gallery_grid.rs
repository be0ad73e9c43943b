//! Gallery grid hosting template cards and the viewport observer.
//!
//! DESIGN
//! ======
//! Cards are keyed by `(generation, name)`. A replacing render bumps the
//! generation, so every card is rebuilt and re-registers with the observer
//! under a fresh key while the old cards detach on cleanup.

use leptos::prelude::*;
use time::OffsetDateTime;

use super::template_card::TemplateCard;
use crate::gallery::viewport::InputMode;
use crate::state::gallery::GalleryState;
use crate::state::ui::UiState;

/// Copyable handle to the page's viewport activator.
#[derive(Clone, Copy)]
pub struct ActivatorHandle {
    #[cfg(feature = "csr")]
    inner: StoredValue<Option<crate::gallery::viewport::SharedActivator>, LocalStorage>,
}

impl ActivatorHandle {
    pub fn new(mode: InputMode) -> Self {
        #[cfg(feature = "csr")]
        {
            let activator = match crate::gallery::viewport::browser_activator(mode) {
                Ok(activator) => Some(activator),
                Err(e) => {
                    leptos::logging::warn!("viewport playback disabled: {e:?}");
                    None
                }
            };
            Self { inner: StoredValue::new_local(activator) }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = mode;
            Self {}
        }
    }

    #[cfg(feature = "csr")]
    pub fn attach(&self, key: &str, video: web_sys::HtmlVideoElement) {
        self.inner.with_value(|slot| {
            if let Some(activator) = slot {
                if let Ok(mut activator) = activator.try_borrow_mut() {
                    activator.attach(key, video);
                }
            }
        });
    }

    pub fn detach(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            let _ = self.inner.try_with_value(|slot| {
                if let Some(activator) = slot {
                    if let Ok(mut activator) = activator.try_borrow_mut() {
                        activator.detach(key);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

/// Observer key for one card instance.
pub fn card_key(generation: u64, name: &str) -> String {
    format!("{generation}:{name}")
}

/// Grid of template cards with loading, empty and error states.
#[component]
pub fn GalleryGrid(now: RwSignal<OffsetDateTime>) -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let activator = ActivatorHandle::new(ui.get_untracked().input_mode);

    let cards = move || {
        gallery.with(|g| {
            g.items
                .iter()
                .map(|item| (g.generation, item.clone()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section class="gallery">
            <Show when=move || gallery.with(|g| g.error.is_some())>
                <p class="gallery__error" role="alert">
                    {move || gallery.with(|g| g.error.clone().unwrap_or_default())}
                </p>
            </Show>
            <div
                class="gallery__grid"
                style=move || format!("grid-template-columns: {}", ui.with(UiState::grid_columns))
            >
                <For
                    each=cards
                    key=|(generation, item)| (*generation, item.name.clone())
                    children=move |(generation, item)| {
                        view! { <TemplateCard item=item generation=generation activator=activator now=now/> }
                    }
                />
            </div>
            <Show when=move || gallery.with(GalleryState::is_empty_result)>
                <p class="gallery__empty">"No templates found."</p>
            </Show>
            <Show when=move || gallery.with(GalleryState::loading)>
                <p class="gallery__loading">"Loading templates..."</p>
            </Show>
        </section>
    }
}
