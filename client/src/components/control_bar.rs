//! Bottom control bar: font and paper toggles, dim slider, Share button.

use leptos::prelude::*;

use crate::components::dim_slider::DimSlider;
use crate::components::toggle_switch::ToggleSwitch;
use crate::state::poem::PoemState;
use crate::state::ui::UiState;

#[component]
pub fn ControlBar(on_share: Callback<()>) -> impl IntoView {
    let poem = expect_context::<RwSignal<PoemState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let typewriter = Signal::derive(move || poem.with(PoemState::is_typewriter));
    let plain_paper = Signal::derive(move || poem.with(PoemState::is_plain_paper));
    let toggle_font = Callback::new(move |()| poem.update(PoemState::toggle_font));
    let toggle_paper = Callback::new(move |()| poem.update(PoemState::toggle_paper));

    view! {
        <div class="control-bar">
            <ToggleSwitch off_label="Handwritten" on_label="Typewriter" checked=typewriter on_toggle=toggle_font/>
            <ToggleSwitch off_label="Old Paper" on_label="White Paper" checked=plain_paper on_toggle=toggle_paper/>
            <DimSlider/>
            <button
                class="btn btn--primary control-bar__share"
                disabled=move || ui.with(UiState::share_disabled)
                on:click=move |_| on_share.run(())
            >
                {move || ui.with(UiState::share_label)}
            </button>
        </div>
    }
}
