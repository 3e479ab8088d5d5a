//! Share modal: preview of the exported image plus destination buttons.

use canvas::share::Destination;
use leptos::prelude::*;

use crate::app::ShareService;
use crate::state::ui::UiState;

#[cfg(test)]
#[path = "share_modal_test.rs"]
mod share_modal_test;

/// How long an instructional notice stays up.
pub const NOTICE_DISMISS_MS: u32 = 5_000;

#[derive(Clone, Copy)]
struct DestinationButton {
    destination: Destination,
    label: &'static str,
}

/// Buttons always shown, in display order. Native share is added separately
/// when the platform supports it.
const BUTTONS: &[DestinationButton] = &[
    DestinationButton { destination: Destination::Download, label: "Download" },
    DestinationButton { destination: Destination::Twitter, label: "Twitter" },
    DestinationButton { destination: Destination::Facebook, label: "Facebook" },
    DestinationButton { destination: Destination::Instagram, label: "Instagram" },
];

#[component]
pub fn ShareModal(on_close: Callback<()>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let service = expect_context::<ShareService>();

    let share = move |destination: Destination| {
        let dispatcher = service.get_value();
        leptos::task::spawn_local(async move {
            let outcome = dispatcher.share(destination.as_str()).await;
            log::debug!("share to {destination}: {outcome:?}");
        });
    };

    #[cfg(feature = "csr")]
    {
        let timer = StoredValue::new_local(None::<gloo_timers::callback::Timeout>);
        Effect::new(move || {
            if ui.with(|u| u.notice().is_none()) {
                timer.set_value(None);
                return;
            }
            let dispatcher = service.get_value();
            let timeout = gloo_timers::callback::Timeout::new(NOTICE_DISMISS_MS, move || dispatcher.dismiss_notice());
            timer.set_value(Some(timeout));
        });
    }

    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });
    let disabled = move || ui.with(UiState::destinations_disabled);

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class="dialog share-modal"
                role="dialog"
                aria-label="Share your poem"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <h2>"Share your poem"</h2>
                <img class="share-modal__preview" alt="Poem preview" src=move || ui.with(UiState::preview_src)/>

                <div class="share-modal__destinations">
                    {BUTTONS
                        .iter()
                        .map(|button| {
                            let destination = button.destination;
                            view! {
                                <button
                                    class="btn share-modal__destination"
                                    disabled=disabled
                                    on:click=move |_| share(destination)
                                >
                                    {button.label}
                                </button>
                            }
                        })
                        .collect_view()}
                    <Show when=move || ui.with(|u| u.native_share)>
                        <button
                            class="btn share-modal__destination"
                            disabled=disabled
                            on:click=move |_| share(Destination::Native)
                        >
                            "Share..."
                        </button>
                    </Show>
                </div>

                <Show when=move || ui.with(|u| u.notice().is_some())>
                    <p class="share-modal__notice" role="status">
                        {move || ui.with(UiState::notice).unwrap_or_default()}
                    </p>
                </Show>

                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=on_close_click>"Close"</button>
                </div>
            </div>
        </div>
    }
}
