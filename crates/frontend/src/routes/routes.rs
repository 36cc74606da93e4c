use crate::domain::a001_event::ui::details::EventDetailsPage;
use crate::domain::a001_event::ui::edit::EditEventPage;
use crate::domain::a001_event::ui::list::EventListPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

/// Home view
pub const HOME_PATH: &str = "/";

/// Detail view of a single event
pub fn event_details_path(id: impl std::fmt::Display) -> String {
    format!("/event/{}", id)
}

/// Edit form of a single event
pub fn event_edit_path(id: impl std::fmt::Display) -> String {
    format!("/event/{}/edit", id)
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--custom">
            <p>"Pagina niet gevonden."</p>
            <A href=HOME_PATH>"Terug naar het overzicht"</A>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=EventListPage />
                    <Route path=path!("/event/:eventId") view=EventDetailsPage />
                    <Route path=path!("/event/:eventId/edit") view=EditEventPage />
                </Routes>
            </main>
        </Router>
    }
}
