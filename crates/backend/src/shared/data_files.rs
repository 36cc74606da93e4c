//! Start-up check of the static data files.
//!
//! The files are served as-is; this only reports problems the edit page
//! would otherwise hide: unreadable entries, duplicate ids, times that fall
//! back to a default, categories the form cannot represent.

use anyhow::Context;
use contracts::domain::a001_event::aggregate::EventsPayload;
use contracts::domain::a002_category::aggregate::CategoriesPayload;
use contracts::shared::datetime_local::to_datetime_local;
use std::collections::HashSet;
use std::path::Path;

pub const EVENTS_FILE: &str = "events.json";
pub const CATEGORIES_FILE: &str = "categories.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSummary {
    pub events: usize,
    pub categories: usize,
    pub warnings: Vec<String>,
}

/// Read and check both files in `dir`
pub fn inspect_dir(dir: &Path) -> anyhow::Result<DataSummary> {
    let events_path = dir.join(EVENTS_FILE);
    let categories_path = dir.join(CATEGORIES_FILE);

    let events = std::fs::read_to_string(&events_path)
        .with_context(|| format!("cannot read {}", events_path.display()))?;
    let categories = std::fs::read_to_string(&categories_path)
        .with_context(|| format!("cannot read {}", categories_path.display()))?;

    inspect(&events, &categories)
}

pub fn inspect(events_json: &str, categories_json: &str) -> anyhow::Result<DataSummary> {
    let events: EventsPayload =
        serde_json::from_str(events_json).context("events.json is not a valid events document")?;
    let categories: CategoriesPayload = serde_json::from_str(categories_json)
        .context("categories.json is not a valid categories document")?;

    let mut warnings = Vec::new();

    let mut category_ids = HashSet::new();
    for category in &categories.categories {
        if !category_ids.insert(category.id) {
            warnings.push(format!("category id {} is used more than once", category.id));
        }
    }

    let mut decoded = Vec::new();
    for (index, entry) in events.decode_all().into_iter().enumerate() {
        match entry {
            Ok(event) => decoded.push(event),
            Err(e) => warnings.push(format!("events.json entry #{} cannot be read: {}", index, e)),
        }
    }

    let mut event_ids = HashSet::new();
    for event in &decoded {
        if !event_ids.insert(event.id) {
            warnings.push(format!("event id {} is used more than once", event.id));
        }
        if event.categories.len() > 1 {
            warnings.push(format!(
                "event {} has {} categories; only the first one can be edited",
                event.id,
                event.categories.len()
            ));
        }
        for category in &event.categories {
            if !category_ids.contains(&category.id) {
                warnings.push(format!(
                    "event {} refers to unknown category {}",
                    event.id, category.id
                ));
            }
        }
        if to_datetime_local(&event.start_time).is_none() {
            warnings.push(format!(
                "event {} has no usable startTime; the edit form will use a default",
                event.id
            ));
        }
        if to_datetime_local(&event.end_time).is_none() {
            warnings.push(format!(
                "event {} has no usable endTime; the edit form will use a default",
                event.id
            ));
        }
    }

    Ok(DataSummary {
        events: decoded.len(),
        categories: categories.categories.len(),
        warnings,
    })
}
