use leptos::prelude::*;

/// Labelled input bound to a reactive value
#[component]
pub fn Input(
    /// Label text
    #[prop(into)]
    label: String,
    /// ID for the input element, also used by the label
    #[prop(into)]
    id: String,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// "text" (default), "datetime-local", ...
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
) -> impl IntoView {
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_placeholder = move || placeholder.get().unwrap_or_default();

    view! {
        <div class="form__group">
            <label class="form__label" for=id.clone()>{label}</label>
            <input
                id=id
                class="form__input"
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
