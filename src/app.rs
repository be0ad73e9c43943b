//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::DashboardConfig;
use crate::pages::{gallery::GalleryPage, logs::LogsPage};
use crate::state::{gallery::GalleryState, logs::LogsState, system::SystemState, ui::UiState};
use crate::util::dark_mode;

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = DashboardConfig::load();
    let ui_state = UiState::load();
    dark_mode::apply(ui_state.dark_mode);

    let gallery = RwSignal::new(GalleryState {
        view: crate::state::gallery::GalleryViewState::new(config.page_size),
        ..GalleryState::default()
    });
    let ui = RwSignal::new(ui_state);
    let system = RwSignal::new(SystemState::default());
    let logs = RwSignal::new(LogsState::with_capacity(config.log_history));

    provide_context(config);
    provide_context(gallery);
    provide_context(ui);
    provide_context(system);
    provide_context(logs);

    view! {
        <Stylesheet id="glimpser" href="/static/glimpser.css"/>
        <Title text="Glimpser"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=GalleryPage/>
                <Route path=StaticSegment("logs") view=LogsPage/>
            </Routes>
        </Router>
    }
}
