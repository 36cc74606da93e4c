//! Home view: every event with a link to its details.

use crate::domain::a001_event::api;
use crate::routes::routes::event_details_path;
use crate::shared::icons::icon;
use contracts::domain::a001_event::aggregate::Event;
use leptos::prelude::*;
use leptos_router::components::A;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn EventListPage() -> impl IntoView {
    let events = RwSignal::new(Vec::<Event>::new());
    let loading = RwSignal::new(true);

    spawn_local(async move {
        match api::fetch_events().await {
            Ok(list) => {
                let _ = events.try_set(list);
            }
            Err(e) => log::error!("Failed to load events: {}", e),
        }
        let _ = loading.try_set(false);
    });

    view! {
        <div class="page event-list" id="a001_event--list">
            <div class="page__header">
                {icon("calendar")}
                <h2>"Evenementen"</h2>
            </div>
            <div class="page__content">
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <p class="page__status">"Evenementen worden geladen..."</p> }
                >
                    <ul class="event-list__items">
                        <For
                            each=move || events.get()
                            key=|e| e.id
                            children=move |e| view! {
                                <li>
                                    <A href=event_details_path(e.id)>{e.title}</A>
                                </li>
                            }
                        />
                    </ul>
                </Show>
            </div>
        </div>
    }
}
