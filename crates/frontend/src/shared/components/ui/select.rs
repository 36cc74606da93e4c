use leptos::prelude::*;

/// Labelled select with a placeholder option
#[component]
pub fn Select(
    /// Label text
    #[prop(into)]
    label: String,
    /// ID for the select element
    #[prop(into)]
    id: String,
    /// Currently selected value; empty selects the placeholder.
    ///
    /// The control follows this signal, so a choice the owner rejects snaps
    /// back to the kept value.
    #[prop(into)]
    value: Signal<String>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Text of the empty first option
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=id.clone()>{label}</label>
            <select
                id=id
                class="form__select"
                prop:value=move || value.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                <option value="" prop:selected=move || value.get().is_empty()>
                    {move || placeholder.get().unwrap_or_default()}
                </option>
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val prop:selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
