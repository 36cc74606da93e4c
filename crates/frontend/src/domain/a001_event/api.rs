use crate::shared::api_utils::{fetch_json, CATEGORIES_PATH, EVENTS_PATH};
use contracts::domain::a001_event::aggregate::{Event, EventId, EventsPayload};
use contracts::domain::a002_category::aggregate::{CategoriesPayload, Category};
use contracts::shared::errors::LoadError;

/// All categories, in file order
pub async fn fetch_categories() -> Result<Vec<Category>, LoadError> {
    let payload: CategoriesPayload = fetch_json(CATEGORIES_PATH).await?;
    Ok(payload.into_categories())
}

/// All readable events, in file order. Malformed entries are logged and skipped.
pub async fn fetch_events() -> Result<Vec<Event>, LoadError> {
    let payload: EventsPayload = fetch_json(EVENTS_PATH).await?;
    let events = payload
        .decode_all()
        .into_iter()
        .enumerate()
        .filter_map(|(index, decoded)| match decoded {
            Ok(event) => Some(event),
            Err(e) => {
                log::warn!("Skipping events.json entry #{}: {}", index, e);
                None
            }
        })
        .collect();
    Ok(events)
}

/// A single event looked up by its route parameter
pub async fn fetch_event(raw_id: &str) -> Result<Event, LoadError> {
    let id = EventId::from_route_param(raw_id)?;
    let payload: EventsPayload = fetch_json(EVENTS_PATH).await?;
    payload.find_event(id)
}
