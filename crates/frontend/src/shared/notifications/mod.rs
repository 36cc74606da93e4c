//! Toast notifications
//!
//! `NotificationService` is provided once by `App` and shared through the
//! Leptos context. Every toast disappears after `NOTIFICATION_DURATION_MS`
//! unless the user closes it earlier.

use crate::shared::icons::icon;
use leptos::prelude::*;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

/// How long a toast stays visible
pub const NOTIFICATION_DURATION_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationStatus {
    Success,
    Info,
    Warning,
    Error,
}

impl NotificationStatus {
    pub fn css_modifier(&self) -> &'static str {
        match self {
            NotificationStatus::Success => "toast--success",
            NotificationStatus::Info => "toast--info",
            NotificationStatus::Warning => "toast--warning",
            NotificationStatus::Error => "toast--error",
        }
    }
}

/// Content of a toast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub status: NotificationStatus,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn new(
        status: NotificationStatus,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            status,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationStatus::Success, title, description)
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationStatus::Info, title, description)
    }

    pub fn warning(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationStatus::Warning, title, description)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationStatus::Error, title, description)
    }
}

/// A toast currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    pub notice: Notice,
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
        }
    }

    /// Show a toast and schedule its removal
    pub fn notify(&self, notice: Notice) -> Uuid {
        log::debug!(
            "notification {:?}: {} - {}",
            notice.status,
            notice.title,
            notice.description
        );

        let id = Uuid::new_v4();
        self.items.update(|items| items.push(Notification { id, notice }));

        let items = self.items;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(NOTIFICATION_DURATION_MS).await;
            // The root owner may already be gone when the app is torn down.
            let _ = items.try_update(|items| items.retain(|n| n.id != id));
        });

        id
    }

    pub fn notify_all(&self, notices: impl IntoIterator<Item = Notice>) {
        for notice in notices {
            self.notify(notice);
        }
    }

    pub fn dismiss(&self, id: Uuid) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }

    pub fn items(&self) -> Vec<Notification> {
        self.items.get()
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

/// Renders the toast stack in the bottom corner of the page
#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || service.items()
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <div class=format!("toast {}", n.notice.status.css_modifier())>
                            <div class="toast__body">
                                <div class="toast__title">{n.notice.title}</div>
                                <div class="toast__description">{n.notice.description}</div>
                            </div>
                            <button
                                class="button button--icon toast__close"
                                aria-label="Sluiten"
                                on:click=move |_| service.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
