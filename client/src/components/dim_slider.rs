//! Bright..Dim range input bound to the overlay dim level.

use canvas::consts::MAX_DIM_LEVEL;
use leptos::prelude::*;

use crate::state::poem::PoemState;

#[component]
pub fn DimSlider() -> impl IntoView {
    let poem = expect_context::<RwSignal<PoemState>>();

    view! {
        <label class="dim-slider">
            <span class="dim-slider__label">"Bright"</span>
            <input
                class="dim-slider__input"
                type="range"
                min="0"
                max=MAX_DIM_LEVEL.to_string()
                step="1"
                aria-label="Background dim"
                prop:value=move || poem.with(|p| p.settings.dim_level().to_string())
                on:input=move |ev| poem.update(|p| p.set_dim_input(&event_target_value(&ev)))
            />
            <span class="dim-slider__label">"Dim"</span>
        </label>
    }
}
