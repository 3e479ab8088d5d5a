//! Root application component with routing and context providers.

use std::rc::Rc;

use canvas::raster::CanvasRasterizer;
use canvas::share::Dispatcher;
use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::editor::EditorPage;
use crate::state::{poem::PoemState, ui::UiState};
use crate::util::browser::BrowserPlatform;
use crate::util::config;

/// The dispatcher wired to the real canvas and browser.
pub type AppDispatcher = Dispatcher<CanvasRasterizer, BrowserPlatform>;

/// Context handle to the app's single dispatcher.
pub type ShareService = StoredValue<Rc<AppDispatcher>, LocalStorage>;

/// Root application component.
///
/// Provides the poem, UI, and share contexts and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let poem = RwSignal::new(PoemState::default());
    let ui = RwSignal::new(UiState::default());

    // Every session change is mirrored into `ui` for rendering.
    let dispatcher = Dispatcher::new(CanvasRasterizer::new(), BrowserPlatform, config::load())
        .with_observer(move |session| ui.update(|u| u.session = session.clone()));
    let native_share = dispatcher.supports_native_share();
    ui.update(|u| u.native_share = native_share);
    let service: ShareService = StoredValue::new_local(Rc::new(dispatcher));

    provide_context(poem);
    provide_context(ui);
    provide_context(service);

    view! {
        <Title text="Poetry in the Woods"/>
        <Meta name="description" content="Create poetry in a serene woodland setting"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=EditorPage/>
            </Routes>
        </Router>
    }
}
