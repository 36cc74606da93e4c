//! State machine of the event edit page.
//!
//! ```text
//! Loading ──loaded──▶ Editing ──save / cancel──▶ /event/{id}
//!    │                 │   ▲
//!    │           delete│   │dismiss
//!    ▼                 ▼   │
//! LoadFailed      ConfirmingDelete ──confirm──▶ /
//! ```
//!
//! Everything here is plain data; the view model wraps it in a signal and
//! turns `Outcome`s into toasts and navigation.

use crate::routes::routes::{event_details_path, HOME_PATH};
use crate::shared::load_generation::{LoadGeneration, LoadTicket};
use crate::shared::notifications::Notice;
use contracts::domain::a001_event::aggregate::Event;
use contracts::domain::a002_category::aggregate::{self as category, Category};
use contracts::domain::common::AggregateId;
use contracts::shared::datetime_local::{
    resolve_datetime_local, DEFAULT_END_TIME, DEFAULT_START_TIME,
};
use contracts::shared::errors::LoadError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    Loading,
    LoadFailed,
    Editing,
}

/// Delete confirmation gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteDialog {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditPhase {
    Loading,
    LoadFailed,
    Editing { event: Event, dialog: DeleteDialog },
}

/// What a finished action asks the page to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub notice: Notice,
    pub redirect: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditPageState {
    phase: EditPhase,
    generation: LoadGeneration,
}

impl Default for EditPageState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditPageState {
    pub fn new() -> Self {
        Self {
            phase: EditPhase::Loading,
            generation: LoadGeneration::default(),
        }
    }

    pub fn kind(&self) -> PhaseKind {
        match self.phase {
            EditPhase::Loading => PhaseKind::Loading,
            EditPhase::LoadFailed => PhaseKind::LoadFailed,
            EditPhase::Editing { .. } => PhaseKind::Editing,
        }
    }

    pub fn event(&self) -> Option<&Event> {
        match &self.phase {
            EditPhase::Editing { event, .. } => Some(event),
            _ => None,
        }
    }

    pub fn is_confirming_delete(&self) -> bool {
        matches!(
            self.phase,
            EditPhase::Editing {
                dialog: DeleteDialog::Open,
                ..
            }
        )
    }

    /// Forget the current event and start a new fetch.
    ///
    /// Responses to earlier fetches are ignored from now on.
    pub fn start_loading(&mut self) -> LoadTicket {
        self.phase = EditPhase::Loading;
        self.generation.next()
    }

    /// Apply the result of the event fetch and return the toasts to show.
    ///
    /// A result whose ticket is no longer current changes nothing.
    pub fn apply_loaded(
        &mut self,
        ticket: LoadTicket,
        result: Result<Event, LoadError>,
    ) -> Vec<Notice> {
        if !self.generation.is_current(ticket) {
            return Vec::new();
        }
        match result {
            Ok(event) => {
                let (event, notices) = prepare_for_editing(event);
                self.phase = EditPhase::Editing {
                    event,
                    dialog: DeleteDialog::Closed,
                };
                notices
            }
            Err(_) => {
                self.phase = EditPhase::LoadFailed;
                vec![Notice::error("Fout", "Het evenement kon niet worden geladen.")]
            }
        }
    }

    /// Mutate the edited event. Returns `false` when nothing is being edited.
    pub fn edit(&mut self, f: impl FnOnce(&mut Event)) -> bool {
        match &mut self.phase {
            EditPhase::Editing { event, .. } => {
                f(event);
                true
            }
            _ => false,
        }
    }

    /// Select the category whose id matches a `<select>` value.
    ///
    /// Unknown values (including the placeholder) leave the event untouched.
    pub fn select_category(&mut self, categories: &[Category], value: &str) -> bool {
        match category::find_by_value(categories, value) {
            Some(selected) => self.edit(|event| event.select_category(selected)),
            None => false,
        }
    }

    /// Save always succeeds; there is no backend to write to
    pub fn save(&self) -> Option<Outcome> {
        let event = self.editing_event()?;
        Some(Outcome {
            notice: Notice::success(
                "Evenement opgeslagen.",
                "De wijzigingen zijn succesvol opgeslagen.",
            ),
            redirect: event_details_path(event.id.as_string()),
        })
    }

    /// Leave without saving; the in-memory edits are simply dropped
    pub fn cancel(&self) -> Option<Outcome> {
        let event = self.editing_event()?;
        Some(Outcome {
            notice: Notice::info(
                "Bewerking geannuleerd.",
                "De wijzigingen zijn niet opgeslagen.",
            ),
            redirect: event_details_path(event.id.as_string()),
        })
    }

    /// Open the delete confirmation
    pub fn request_delete(&mut self) -> bool {
        match &mut self.phase {
            EditPhase::Editing { dialog, .. } => {
                *dialog = DeleteDialog::Open;
                true
            }
            _ => false,
        }
    }

    /// Close the delete confirmation without side effects
    pub fn dismiss_delete(&mut self) {
        if let EditPhase::Editing { dialog, .. } = &mut self.phase {
            *dialog = DeleteDialog::Closed;
        }
    }

    /// Only reachable while the confirmation is open
    pub fn confirm_delete(&mut self) -> Option<Outcome> {
        match &mut self.phase {
            EditPhase::Editing { dialog, .. } if *dialog == DeleteDialog::Open => {
                *dialog = DeleteDialog::Closed;
                Some(Outcome {
                    notice: Notice::success(
                        "Evenement verwijderd.",
                        "Het evenement is succesvol verwijderd.",
                    ),
                    redirect: HOME_PATH.to_string(),
                })
            }
            _ => None,
        }
    }

    fn editing_event(&self) -> Option<&Event> {
        match &self.phase {
            EditPhase::Editing {
                event,
                dialog: DeleteDialog::Closed,
            } => Some(event),
            _ => None,
        }
    }
}

/// Convert the source times into `datetime-local` values.
///
/// Missing or unparseable times are replaced by the defaults, and each
/// replacement produces a warning so the user can see the value is made up.
pub fn prepare_for_editing(mut event: Event) -> (Event, Vec<Notice>) {
    let mut notices = Vec::new();

    let start = resolve_datetime_local(&event.start_time, DEFAULT_START_TIME);
    if start.defaulted {
        log::warn!(
            "event {}: start time {:?} unusable, using {}",
            event.id,
            event.start_time,
            DEFAULT_START_TIME
        );
        notices.push(Notice::warning(
            "Starttijd ontbreekt",
            format!(
                "De starttijd kon niet worden gelezen; {} is ingevuld.",
                DEFAULT_START_TIME
            ),
        ));
    }

    let end = resolve_datetime_local(&event.end_time, DEFAULT_END_TIME);
    if end.defaulted {
        log::warn!(
            "event {}: end time {:?} unusable, using {}",
            event.id,
            event.end_time,
            DEFAULT_END_TIME
        );
        notices.push(Notice::warning(
            "Eindtijd ontbreekt",
            format!(
                "De eindtijd kon niet worden gelezen; {} is ingevuld.",
                DEFAULT_END_TIME
            ),
        ));
    }

    event.start_time = start.value;
    event.end_time = end.value;
    (event, notices)
}

/// `(value, label)` pairs for the category select, in received order
pub fn category_options(categories: &[Category]) -> Vec<(String, String)> {
    categories
        .iter()
        .map(|c| (c.id.as_string(), c.name.clone()))
        .collect()
}

/// Value of the selected option; empty selects the placeholder
pub fn selected_category_value(event: &Event) -> String {
    event
        .selected_category()
        .map(|c| c.id.as_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::notifications::NotificationStatus;
    use contracts::domain::a001_event::aggregate::{EventId, EventsPayload};
    use contracts::domain::a002_category::aggregate::CategoriesPayload;

    const EVENTS_JSON: &str = r#"{
        "events": [
            {
                "id": 1,
                "title": "Fietstocht",
                "description": "Rondje door de polder",
                "startTime": "2023-03-10T18:00:00.000Z",
                "endTime": "2023-03-10T20:30:00.000Z",
                "categories": [ { "id": 1, "name": "sports" } ]
            },
            {
                "id": 2,
                "title": "Spelletjesavond",
                "description": "",
                "startTime": "binnenkort",
                "categories": []
            }
        ]
    }"#;

    const CATEGORIES_JSON: &str = r#"{
        "categories": [
            { "id": 3, "name": "music" },
            { "id": 1, "name": "sports" },
            { "id": 2, "name": "games" }
        ]
    }"#;

    fn load(id: i64) -> Result<Event, LoadError> {
        let payload: EventsPayload = serde_json::from_str(EVENTS_JSON).unwrap();
        payload.find_event(EventId::new(id))
    }

    fn categories() -> Vec<Category> {
        serde_json::from_str::<CategoriesPayload>(CATEGORIES_JSON)
            .unwrap()
            .into_categories()
    }

    fn editing(id: i64) -> EditPageState {
        let mut state = EditPageState::new();
        let ticket = state.start_loading();
        state.apply_loaded(ticket, load(id));
        state
    }

    #[test]
    fn test_starts_loading() {
        let state = EditPageState::new();
        assert_eq!(state.kind(), PhaseKind::Loading);
        assert!(state.event().is_none());
        assert!(state.save().is_none());
        assert!(state.cancel().is_none());
    }

    #[test]
    fn test_category_options_keep_order_and_ids() {
        let options = category_options(&categories());
        assert_eq!(
            options,
            vec![
                ("3".to_string(), "music".to_string()),
                ("1".to_string(), "sports".to_string()),
                ("2".to_string(), "games".to_string()),
            ]
        );
    }

    #[test]
    fn test_loaded_event_populates_form() {
        let mut state = EditPageState::new();
        let ticket = state.start_loading();
        let notices = state.apply_loaded(ticket, load(1));

        assert!(notices.is_empty());
        assert_eq!(state.kind(), PhaseKind::Editing);
        let event = state.event().unwrap();
        assert_eq!(event.title, "Fietstocht");
        assert_eq!(event.description, "Rondje door de polder");
        assert_eq!(event.start_time, "2023-03-10T18:00");
        assert_eq!(event.end_time, "2023-03-10T20:30");
        assert_eq!(selected_category_value(event), "1");
    }

    #[test]
    fn test_missing_times_fall_back_with_warnings() {
        let mut state = EditPageState::new();
        let ticket = state.start_loading();
        let notices = state.apply_loaded(ticket, load(2));

        let event = state.event().unwrap();
        assert_eq!(event.start_time, DEFAULT_START_TIME);
        assert_eq!(event.end_time, DEFAULT_END_TIME);
        assert_eq!(notices.len(), 2);
        assert!(notices
            .iter()
            .all(|n| n.status == NotificationStatus::Warning));
        assert_eq!(selected_category_value(event), "");
    }

    #[test]
    fn test_unknown_event_fails_with_error_toast() {
        let mut state = EditPageState::new();
        let ticket = state.start_loading();
        let notices = state.apply_loaded(ticket, load(42));

        assert_eq!(state.kind(), PhaseKind::LoadFailed);
        assert!(state.event().is_none());
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].status, NotificationStatus::Error);
        assert_eq!(notices[0].title, "Fout");
    }

    #[test]
    fn test_failed_state_ignores_actions() {
        let mut state = EditPageState::new();
        let ticket = state.start_loading();
        state.apply_loaded(ticket, Err(LoadError::Http(500)));

        assert!(!state.edit(|e| e.title = "x".to_string()));
        assert!(!state.request_delete());
        assert!(state.confirm_delete().is_none());
        assert!(state.save().is_none());
    }

    #[test]
    fn test_field_edits() {
        let mut state = editing(1);
        assert!(state.edit(|e| e.title = "Nieuwe titel".to_string()));
        assert!(state.edit(|e| e.end_time = "2023-03-11T01:00".to_string()));

        let event = state.event().unwrap();
        assert_eq!(event.title, "Nieuwe titel");
        assert_eq!(event.end_time, "2023-03-11T01:00");
        assert_eq!(event.description, "Rondje door de polder");
    }

    #[test]
    fn test_selecting_category_replaces_sequence() {
        let mut state = editing(1);
        assert!(state.select_category(&categories(), "2"));
        assert_eq!(
            state.event().unwrap().categories,
            vec![Category::new(2, "games")]
        );
    }

    #[test]
    fn test_selecting_placeholder_or_unknown_keeps_category() {
        let mut state = editing(1);
        assert!(!state.select_category(&categories(), ""));
        assert!(!state.select_category(&categories(), "77"));
        assert_eq!(
            state.event().unwrap().categories,
            vec![Category::new(1, "sports")]
        );
    }

    #[test]
    fn test_selecting_before_categories_arrive_is_noop() {
        let mut state = editing(1);
        assert!(!state.select_category(&[], "2"));
        assert_eq!(selected_category_value(state.event().unwrap()), "1");
    }

    #[test]
    fn test_save_navigates_to_details_without_validation() {
        let mut state = editing(1);
        state.edit(|e| {
            e.title.clear();
            e.start_time.clear();
        });

        let outcome = state.save().unwrap();
        assert_eq!(outcome.redirect, "/event/1");
        assert_eq!(outcome.notice.status, NotificationStatus::Success);
        assert_eq!(outcome.notice.title, "Evenement opgeslagen.");
    }

    #[test]
    fn test_cancel_navigates_to_details_with_info() {
        let outcome = editing(1).cancel().unwrap();
        assert_eq!(outcome.redirect, "/event/1");
        assert_eq!(outcome.notice.status, NotificationStatus::Info);
    }

    #[test]
    fn test_delete_then_dismiss_changes_nothing() {
        let mut state = editing(1);
        let before = state.clone();

        assert!(state.request_delete());
        assert!(state.is_confirming_delete());
        state.dismiss_delete();

        assert!(!state.is_confirming_delete());
        assert_eq!(state, before);
    }

    #[test]
    fn test_delete_then_confirm_goes_home() {
        let mut state = editing(1);
        state.request_delete();

        let outcome = state.confirm_delete().unwrap();
        assert_eq!(outcome.redirect, "/");
        assert_eq!(outcome.notice.status, NotificationStatus::Success);
        assert_eq!(outcome.notice.title, "Evenement verwijderd.");
        assert!(!state.is_confirming_delete());
    }

    #[test]
    fn test_confirm_requires_open_dialog() {
        let mut state = editing(1);
        assert!(state.confirm_delete().is_none());
    }

    #[test]
    fn test_save_and_cancel_blocked_while_confirming() {
        let mut state = editing(1);
        state.request_delete();
        assert!(state.save().is_none());
        assert!(state.cancel().is_none());
    }

    #[test]
    fn test_start_loading_resets_form() {
        let mut state = editing(1);
        state.start_loading();
        assert_eq!(state.kind(), PhaseKind::Loading);
        assert!(state.event().is_none());
    }

    #[test]
    fn test_out_of_order_response_is_ignored() {
        // Route went 1 -> 2; the response for 1 arrives last
        let mut state = EditPageState::new();
        let first = state.start_loading();
        let second = state.start_loading();

        state.apply_loaded(second, load(2));
        let notices = state.apply_loaded(first, load(1));

        assert!(notices.is_empty());
        assert_eq!(state.event().unwrap().id, EventId::new(2));
    }

    #[test]
    fn test_late_response_for_same_id_keeps_edits() {
        // Route went 1 -> 2 -> 1; both fetches for 1 resolve
        let mut state = EditPageState::new();
        let first = state.start_loading();
        let _second = state.start_loading();
        let third = state.start_loading();

        let notices = state.apply_loaded(third, load(1));
        assert!(notices.is_empty());
        state.edit(|e| e.title = "Aangepast".to_string());

        let notices = state.apply_loaded(first, load(1));
        assert!(notices.is_empty());
        assert_eq!(state.event().unwrap().title, "Aangepast");
    }

    #[test]
    fn test_response_after_reload_is_ignored() {
        let mut state = editing(2);
        let stale = state.start_loading();
        let fresh = state.start_loading();

        let notices = state.apply_loaded(stale, load(2));
        assert!(notices.is_empty());
        assert_eq!(state.kind(), PhaseKind::Loading);

        // Fallback warnings show up once, for the fetch that counts
        let notices = state.apply_loaded(fresh, load(2));
        assert_eq!(notices.len(), 2);
        assert_eq!(state.kind(), PhaseKind::Editing);
    }

    #[test]
    fn test_stale_failure_does_not_replace_form() {
        let mut state = EditPageState::new();
        let stale = state.start_loading();
        let fresh = state.start_loading();
        state.apply_loaded(fresh, load(1));

        let notices = state.apply_loaded(stale, Err(LoadError::Http(500)));

        assert!(notices.is_empty());
        assert_eq!(state.kind(), PhaseKind::Editing);
    }
}
