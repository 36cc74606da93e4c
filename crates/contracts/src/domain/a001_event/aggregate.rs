use crate::domain::a002_category::aggregate::Category;
use crate::domain::common::serde_helpers::null_as_default;
use crate::domain::common::AggregateId;
use crate::shared::errors::LoadError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Event identifier as stored in `events.json`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub i64);

impl EventId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Parse the `eventId` route parameter
    pub fn from_route_param(raw: &str) -> Result<Self, LoadError> {
        Self::from_string(raw).map_err(|_| LoadError::InvalidId(raw.to_string()))
    }
}

impl AggregateId for EventId {
    fn as_string(&self) -> String {
        self.0.as_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s)
            .map(EventId::new)
            .map_err(|e| format!("Invalid event id: {}", e))
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Record
// ============================================================================

/// Editable event record.
///
/// `start_time`/`end_time` hold whatever the source file contains until the
/// record is prepared for editing; afterwards they hold `YYYY-MM-DDTHH:MM`
/// values suitable for a `datetime-local` input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub end_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<Category>,
}

impl Event {
    /// The category shown in the edit form (first one, if any)
    pub fn selected_category(&self) -> Option<&Category> {
        self.categories.first()
    }

    /// Replace the category list with exactly the given category.
    ///
    /// The edit form supports a single category per event; the previous list
    /// is discarded whatever its length was.
    pub fn select_category(&mut self, category: &Category) {
        self.categories = vec![Category {
            id: category.id,
            name: category.name.clone(),
        }];
    }
}

/// Envelope of `GET /events.json`.
///
/// Entries stay as raw JSON until one is asked for, so a malformed record
/// does not make the other events unreadable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventsPayload {
    #[serde(default)]
    pub events: Vec<Value>,
}

impl EventsPayload {
    /// Take the event with the given id out of the payload.
    ///
    /// Only the matching entry is decoded.
    pub fn find_event(self, id: EventId) -> Result<Event, LoadError> {
        let entry = self
            .events
            .into_iter()
            .find(|entry| entry_id(entry) == Some(id))
            .ok_or(LoadError::NotFound(id))?;
        decode_event(entry)
    }

    /// Decode every entry in file order; failures stay in place
    pub fn decode_all(self) -> Vec<Result<Event, LoadError>> {
        self.events.into_iter().map(decode_event).collect()
    }
}

fn entry_id(entry: &Value) -> Option<EventId> {
    entry.get("id").and_then(Value::as_i64).map(EventId::new)
}

fn decode_event(entry: Value) -> Result<Event, LoadError> {
    serde_json::from_value(entry).map_err(|e| LoadError::Parse(e.to_string()))
}
