use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Modal dialog with overlay.
///
/// Escape, a click on the overlay and the close button all call `on_close`.
/// Render it conditionally (e.g. inside `<Show>`); it has no open state of
/// its own.
#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: String,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Modal content, including any action buttons
    children: Children,
) -> impl IntoView {
    let keydown = window_event_listener(ev::keydown, move |event: ev::KeyboardEvent| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || keydown.remove());

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" role="dialog" aria-modal="true" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button
                        class="button button--icon modal__close"
                        aria-label="Sluiten"
                        on:click=move |_| on_close.run(())
                    >
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
