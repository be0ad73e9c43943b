//! Card for one template: preview video, name, capture time and caption.
//!
//! The `<video>` rests on a poster frame near the end of the clip. Pointer
//! clients play it on hover; touch clients play it when it scrolls into view.
//! When a clip ends it waits briefly, then reloads and plays again.

use leptos::html::Video;
use leptos::prelude::*;
use time::OffsetDateTime;

use super::gallery_grid::{ActivatorHandle, card_key};
use crate::gallery::renderer::GalleryItem;
use crate::net::api::{last_screenshot_url, last_video_url, template_detail_url};
use crate::state::gallery::GalleryState;
use crate::state::ui::UiState;
use crate::util::playback::{self, PreviewMedia};
use crate::util::time_format::{absolute_time, is_recent, local_offset, relative_time};

/// Run `f` against the mounted video, if it is still mounted.
fn with_video(video_ref: NodeRef<Video>, f: impl FnOnce(&dyn PreviewMedia)) {
    #[cfg(feature = "csr")]
    {
        if let Some(video) = video_ref.try_get_untracked().flatten() {
            f(&video);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (video_ref, f);
    }
}

#[component]
pub fn TemplateCard(
    item: GalleryItem,
    generation: u64,
    activator: ActivatorHandle,
    now: RwSignal<OffsetDateTime>,
) -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let video_ref = NodeRef::<Video>::new();
    let key = card_key(generation, &item.name);

    #[cfg(feature = "csr")]
    {
        let key = key.clone();
        Effect::new(move || {
            let Some(video) = video_ref.get() else {
                return;
            };
            video.set_muted(true);
            let _ = video.set_attribute("playsinline", "");
            let _ = video.set_attribute(crate::gallery::viewport::TEMPLATE_ATTR, &key);
            activator.attach(&key, video);
        });
    }
    {
        let key = key.clone();
        on_cleanup(move || activator.detach(&key));
    }

    let name = item.name.clone();
    let video_src = {
        let name = name.clone();
        move || last_video_url(&name, gallery.with(|g| g.source_stamp))
    };
    let poster_src = {
        let name = name.clone();
        move || last_screenshot_url(&name, gallery.with(|g| g.source_stamp))
    };

    let captured = item.template.last_screenshot_time;
    let relative = move || captured.map_or_else(|| "never".to_owned(), |ts| relative_time(ts, now.get()));
    let absolute = captured.map(|ts| absolute_time(ts, local_offset())).unwrap_or_default();
    let recent = move || captured.is_some_and(|ts| is_recent(ts, now.get()));

    let on_enter = move |_| {
        if !ui.with_untracked(|u| u.input_mode.is_touch()) {
            with_video(video_ref, |m| playback::on_hover_enter(m));
        }
    };
    let on_leave = move |_| {
        if !ui.with_untracked(|u| u.input_mode.is_touch()) {
            with_video(video_ref, |m| playback::on_hover_leave(m));
        }
    };
    let on_ended = move |_| {
        let delay = playback::on_ended();
        leptos::task::spawn_local(async move {
            #[cfg(feature = "csr")]
            gloo_timers::future::sleep(delay).await;
            #[cfg(not(feature = "csr"))]
            let _ = delay;
            with_video(video_ref, |m| playback::on_replay(m));
        });
    };

    let enter_delay = format!("animation-delay: {}ms", item.enter_delay.as_millis());
    let font_size = move || format!("font-size: {}px", ui.with(UiState::font_size_px));
    let caption = item.template.last_caption.clone();
    let notes = item.template.notes.clone();
    let has_notes = !notes.is_empty();

    view! {
        <article class="template-card" class:template-card--recent=recent style=enter_delay>
            <div class="template-card__media" on:mouseenter=on_enter on:mouseleave=on_leave>
                <video
                    class="template-card__video"
                    node_ref=video_ref
                    src=video_src
                    poster=poster_src
                    title=caption
                    preload="metadata"
                    on:loadedmetadata=move |_| with_video(video_ref, |m| playback::on_loaded_metadata(m))
                    on:play=move |_| {
                        if ui.with_untracked(|u| u.input_mode.is_touch()) {
                            with_video(video_ref, |m| playback::on_play(m));
                        }
                    }
                    on:ended=on_ended
                ></video>
            </div>
            <div class="template-card__meta" style=font_size>
                <a class="template-card__name" href=template_detail_url(&name)>{name.clone()}</a>
                <time class="template-card__time" title=absolute>{relative}</time>
                <Show when=move || has_notes>
                    <p class="template-card__notes">{notes.clone()}</p>
                </Show>
            </div>
        </article>
    }
}
