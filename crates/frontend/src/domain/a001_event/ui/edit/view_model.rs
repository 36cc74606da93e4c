use super::state::{category_options, selected_category_value, EditPageState, Outcome, PhaseKind};
use crate::domain::a001_event::api;
use crate::shared::load_generation::LoadTicket;
use crate::shared::notifications::{use_notifications, Notice, NotificationService};
use contracts::domain::a001_event::aggregate::Event;
use contracts::domain::a002_category::aggregate::Category;
use contracts::shared::errors::LoadError;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// ViewModel for the event edit page
#[derive(Clone, Copy)]
pub struct EditEventViewModel {
    pub state: RwSignal<EditPageState>,
    pub categories: RwSignal<Vec<Category>>,
    /// Set once an action has finished; the view navigates there
    pub redirect: RwSignal<Option<String>>,
    notifications: NotificationService,
}

impl EditEventViewModel {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(EditPageState::new()),
            categories: RwSignal::new(Vec::new()),
            redirect: RwSignal::new(None),
            notifications: use_notifications(),
        }
    }

    pub fn phase(&self) -> PhaseKind {
        self.state.with(|s| s.kind())
    }

    pub fn is_confirming_delete(&self) -> bool {
        self.state.with(|s| s.is_confirming_delete())
    }

    /// Reactive text of one form field
    pub fn field(&self, read: fn(&Event) -> String) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.event().map(read).unwrap_or_default()))
    }

    pub fn category_options(&self) -> Signal<Vec<(String, String)>> {
        let categories = self.categories;
        Signal::derive(move || categories.with(|c| category_options(c)))
    }

    pub fn selected_category(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || {
            state.with(|s| s.event().map(selected_category_value).unwrap_or_default())
        })
    }

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    /// Fetch the category list. Failures only reach the log.
    pub fn load_categories(&self) {
        let categories = self.categories;
        spawn_local(async move {
            match api::fetch_categories().await {
                Ok(list) => {
                    log::debug!("Loaded {} categories", list.len());
                    if categories.try_set(list).is_some() {
                        log::debug!("Categories arrived after the edit page was closed");
                    }
                }
                Err(e) => log::error!("Failed to load categories: {}", e),
            }
        });
    }

    /// Fetch the event for the given route id.
    ///
    /// Every call starts a new fetch; only the latest one reaches the form.
    pub fn load_event(&self, raw_id: String) {
        let Some(ticket) = self.state.try_update(|s| s.start_loading()) else {
            return;
        };

        let state = self.state;
        let notifications = self.notifications;
        spawn_local(async move {
            let result = api::fetch_event(&raw_id).await;
            if let Err(e) = &result {
                log::error!("Failed to load event '{}': {}", raw_id, e);
            }

            match apply_event_response(state, ticket, result) {
                Some(notices) => notifications.notify_all(notices),
                None => log::debug!("Event '{}' arrived after the edit page was closed", raw_id),
            }
        });
    }

    // ------------------------------------------------------------------
    // Field setters
    // ------------------------------------------------------------------

    pub fn set_title(&self, value: String) {
        self.state.update(|s| {
            s.edit(|e| e.title = value);
        });
    }

    pub fn set_description(&self, value: String) {
        self.state.update(|s| {
            s.edit(|e| e.description = value);
        });
    }

    pub fn set_start_time(&self, value: String) {
        self.state.update(|s| {
            s.edit(|e| e.start_time = value);
        });
    }

    pub fn set_end_time(&self, value: String) {
        self.state.update(|s| {
            s.edit(|e| e.end_time = value);
        });
    }

    pub fn select_category(&self, value: String) {
        let state = self.state;
        self.categories.with_untracked(|categories| {
            state.update(|s| {
                s.select_category(categories, &value);
            });
        });
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    /// Nothing is persisted; the edited event is only logged
    pub fn save_command(&self) {
        let outcome = self.state.with_untracked(|s| {
            if let Some(event) = s.event() {
                log::info!("Edited event saved: {:?}", event);
            }
            s.save()
        });
        self.finish(outcome);
    }

    pub fn cancel_command(&self) {
        let outcome = self.state.with_untracked(|s| s.cancel());
        self.finish(outcome);
    }

    pub fn delete_command(&self) {
        self.state.update(|s| {
            s.request_delete();
        });
    }

    pub fn dismiss_delete(&self) {
        self.state.update(|s| s.dismiss_delete());
    }

    pub fn confirm_delete_command(&self) {
        let outcome = self.state.try_update(|s| s.confirm_delete()).flatten();
        if outcome.is_some() {
            if let Some(id) = self.state.with_untracked(|s| s.event().map(|e| e.id)) {
                log::info!("Event {} deleted", id);
            }
        }
        self.finish(outcome);
    }

    fn finish(&self, outcome: Option<Outcome>) {
        if let Some(outcome) = outcome {
            self.notifications.notify(outcome.notice);
            self.redirect.set(Some(outcome.redirect));
        }
    }
}

/// Hand a fetch result to the page state.
///
/// Returns `None` once the page is gone. Stale tickets yield no toasts.
fn apply_event_response(
    state: RwSignal<EditPageState>,
    ticket: LoadTicket,
    result: Result<Event, LoadError>,
) -> Option<Vec<Notice>> {
    state.try_update(|s| s.apply_loaded(ticket, result))
}
