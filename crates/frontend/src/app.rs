use crate::routes::routes::AppRoutes;
use crate::shared::notifications::{NotificationHost, NotificationService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Toasts are shared by every page, so the service lives at the root.
    provide_context(NotificationService::new());

    view! {
        <AppRoutes />
        <NotificationHost />
    }
}
