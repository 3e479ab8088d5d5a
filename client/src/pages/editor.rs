//! The editor page: woodland background, dim overlay, poem card, controls.
//!
//! ARCHITECTURE
//! ============
//! The page owns the card's `NodeRef`. Clicking Share measures the rendered
//! card and hands a snapshot of the poem to the share dispatcher; the modal
//! opens once the dispatcher reports a ready image.

use canvas::geom::Size;
use leptos::prelude::*;

use crate::app::ShareService;
use crate::components::control_bar::ControlBar;
use crate::components::poem_card::PoemCard;
use crate::components::share_modal::ShareModal;
use crate::state::poem::PoemState;
use crate::state::ui::UiState;

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

/// CSS `background-image` value for a URL.
fn background_css(src: &str) -> String {
    format!("url(\"{}\")", src.replace('"', "%22"))
}

/// Rendered size of the live card, or `None` if it is not mounted.
fn card_region(card_ref: NodeRef<leptos::html::Div>) -> Option<Size> {
    #[cfg(feature = "csr")]
    {
        let card = card_ref.get_untracked()?;
        let rect = card.get_bounding_client_rect();
        Some(Size::new(rect.width(), rect.height()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = card_ref;
        None
    }
}

#[component]
pub fn EditorPage() -> impl IntoView {
    let poem = expect_context::<RwSignal<PoemState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let service = expect_context::<ShareService>();
    let card_ref = NodeRef::<leptos::html::Div>::new();
    let background = service.with_value(|d| background_css(&d.config().background_src));

    let on_share = Callback::new(move |()| {
        // Snapshot now; edits made during capture belong to the next export.
        let doc = poem.with_untracked(|p| p.doc.clone());
        let settings = poem.with_untracked(|p| p.settings);
        let region = card_region(card_ref);
        let dispatcher = service.get_value();
        leptos::task::spawn_local(async move {
            let outcome = dispatcher.export(&doc, &settings, region).await;
            log::debug!("export finished: {outcome:?}");
        });
    });
    let on_close = Callback::new(move |()| service.with_value(|d| d.close()));
    let on_dismiss_error = move |_| service.with_value(|d| d.dismiss_error());

    view! {
        <main class="woods" style:background-image=background>
            <div class="woods__overlay" style:opacity=move || poem.with(PoemState::overlay_opacity_css)></div>
            <div class="woods__content">
                <PoemCard node_ref=card_ref/>
                <ControlBar on_share=on_share/>
            </div>
            <Show when=move || ui.with(|u| u.error().is_some())>
                <div class="woods__error" role="alert">
                    <span>{move || ui.with(UiState::error).unwrap_or_default()}</span>
                    <button class="btn" on:click=on_dismiss_error title="Dismiss">"✕"</button>
                </div>
            </Show>
            <Show when=move || ui.with(UiState::modal_open)>
                <ShareModal on_close=on_close/>
            </Show>
        </main>
    }
}
