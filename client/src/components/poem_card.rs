//! The live, editable poem card.
//!
//! DESIGN
//! ======
//! The card's rendered size is what export measures, so the page hands in the
//! `NodeRef` it reads the bounding box from.

use leptos::prelude::*;

use crate::state::poem::{BODY_PLACEHOLDER, PoemField, PoemState};

#[component]
pub fn PoemCard(node_ref: NodeRef<leptos::html::Div>) -> impl IntoView {
    let poem = expect_context::<RwSignal<PoemState>>();

    let value = move |field: PoemField| move || poem.with(|p| p.field(field).to_owned());
    let write = move |field: PoemField| {
        move |ev: leptos::ev::Event| poem.update(|p| p.set_field(field, event_target_value(&ev)))
    };

    view! {
        <div
            class=move || poem.with(PoemState::card_class)
            style:font-family=move || poem.with(|p| p.settings.font.family())
            node_ref=node_ref
        >
            <input
                class="poem-card__title"
                type="text"
                aria-label="Poem title"
                prop:value=value(PoemField::Title)
                on:input=write(PoemField::Title)
            />
            <textarea
                class="poem-card__body"
                aria-label="Poem"
                placeholder=BODY_PLACEHOLDER
                prop:value=value(PoemField::Body)
                on:input=write(PoemField::Body)
            ></textarea>
            <textarea
                class="poem-card__footer"
                rows="2"
                aria-label="Footer quote"
                prop:value=value(PoemField::FooterQuote)
                on:input=write(PoemField::FooterQuote)
            ></textarea>
        </div>
    }
}
