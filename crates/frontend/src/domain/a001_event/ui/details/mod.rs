//! Read-only view of a single event; target of save and cancel.

use crate::domain::a001_event::api;
use crate::routes::routes::{event_edit_path, HOME_PATH};
use crate::shared::date_utils::{format_datetime, format_time_range};
use crate::shared::icons::icon;
use crate::shared::load_generation::{begin_load, still_current, LoadGeneration};
use contracts::domain::a001_event::aggregate::Event;
use contracts::shared::datetime_local::to_datetime_local;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn EventDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let event = RwSignal::new(None::<Event>);
    let error = RwSignal::new(None::<String>);
    let generation = RwSignal::new(LoadGeneration::default());

    Effect::new(move |_| {
        let raw_id = params.read().get("eventId").unwrap_or_default();
        event.set(None);
        error.set(None);
        let Some(ticket) = begin_load(generation) else {
            return;
        };
        spawn_local(async move {
            let result = api::fetch_event(&raw_id).await;
            // Page closed, or the route moved on since this fetch started
            if !still_current(generation, ticket) {
                log::debug!("Dropping response for event '{}'", raw_id);
                return;
            }
            match result {
                Ok(found) => {
                    let _ = event.try_set(Some(found));
                }
                Err(e) => {
                    log::error!("Failed to load event '{}': {}", raw_id, e);
                    let _ = error.try_set(Some(e.to_string()));
                }
            }
        });
    });

    view! {
        <div class="page page--detail event-details" id="a001_event--details">
            <a href=HOME_PATH class="page__back">
                {icon("arrow-left")}
                "Overzicht"
            </a>
            {move || {
                if let Some(e) = error.get() {
                    return view! {
                        <p class="page__status page__status--error">
                            {format!("Het evenement kon niet worden geladen ({})", e)}
                        </p>
                    }.into_any();
                }
                match event.get() {
                    None => view! { <p class="page__status">"Evenement wordt geladen..."</p> }.into_any(),
                    Some(ev) => {
                        let time = match (to_datetime_local(&ev.start_time), to_datetime_local(&ev.end_time)) {
                            (Some(start), Some(end)) => format_time_range(&start, &end),
                            (Some(start), None) => format_datetime(&start),
                            _ => "Tijd nog niet bekend".to_string(),
                        };
                        let categories = ev
                            .categories
                            .iter()
                            .map(|c| c.name.clone())
                            .collect::<Vec<_>>()
                            .join(", ");
                        view! {
                            <div class="page__header">
                                <h2>{ev.title.clone()}</h2>
                                <a href=event_edit_path(ev.id) class="button button--secondary">
                                    {icon("edit")}
                                    "Bewerken"
                                </a>
                            </div>
                            <div class="page__content">
                                <p>{ev.description.clone()}</p>
                                <p class="event-details__time">{time}</p>
                                <p class="event-details__categories">{categories}</p>
                            </div>
                        }.into_any()
                    }
                }
            }}
        </div>
    }
}
