use leptos::prelude::*;

/// Button component with color variants
#[component]
pub fn Button(
    /// "primary" (default), "secondary", "danger" or "ghost"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || variant_class(variant.get().as_deref());
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <button
            type="button"
            class=move || format!("button {} {}", variant_class(), additional_class())
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

fn variant_class(variant: Option<&str>) -> &'static str {
    match variant.unwrap_or("primary") {
        "secondary" => "button--secondary",
        "danger" => "button--danger",
        "ghost" => "button--ghost",
        _ => "button--primary",
    }
}
