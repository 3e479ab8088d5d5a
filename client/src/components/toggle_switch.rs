//! Two-label switch used for the font and paper toggles.

use leptos::prelude::*;

#[component]
pub fn ToggleSwitch(
    #[prop(into)] off_label: String,
    #[prop(into)] on_label: String,
    checked: Signal<bool>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    let aria_label = format!("{off_label} or {on_label}");
    view! {
        <div class="toggle">
            <span class="toggle__label" class:toggle__label--active=move || !checked.get()>{off_label}</span>
            <button
                type="button"
                role="switch"
                class="toggle__track"
                class:toggle__track--on=move || checked.get()
                aria-checked=move || if checked.get() { "true" } else { "false" }
                aria-label=aria_label
                on:click=move |_| on_toggle.run(())
            >
                <span class="toggle__thumb"></span>
            </button>
            <span class="toggle__label" class:toggle__label--active=move || checked.get()>{on_label}</span>
        </div>
    }
}
