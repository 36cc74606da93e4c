//! Event Edit UI Module
//!
//! MVVM split, as in the other detail forms:
//! - state.rs: page state machine (plain data, unit tested)
//! - view_model.rs: signals, data loading and commands
//! - view.rs: Leptos component (pure UI)

mod state;
mod view;
mod view_model;

pub use state::{DeleteDialog, EditPageState, Outcome, PhaseKind};
pub use view::EditEventPage;
pub use view_model::EditEventViewModel;
