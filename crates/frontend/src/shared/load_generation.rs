//! Tickets for in-flight fetches.
//!
//! Every new fetch takes a ticket; a response is only applied while its
//! ticket is still the latest one. Route changes that come back to an id
//! already requested still get a fresh ticket, so an older response for the
//! same id cannot overwrite newer state.

use leptos::prelude::*;

/// Handed out when a fetch starts, checked when its response arrives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadGeneration {
    current: u64,
}

impl LoadGeneration {
    /// Start a new fetch; every earlier ticket becomes stale
    pub fn next(&mut self) -> LoadTicket {
        self.current = self.current.wrapping_add(1);
        LoadTicket(self.current)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.current == ticket.0
    }
}

/// Start a fetch on a page-owned generation; `None` once the page is gone
pub fn begin_load(generation: RwSignal<LoadGeneration>) -> Option<LoadTicket> {
    generation.try_update_untracked(|g| g.next())
}

/// Whether a response may still be applied: the page is alive and no newer
/// fetch has started
pub fn still_current(generation: RwSignal<LoadGeneration>, ticket: LoadTicket) -> bool {
    generation.try_with_untracked(|g| g.is_current(ticket)) == Some(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let mut generation = LoadGeneration::default();
        let first = generation.next();
        assert!(generation.is_current(first));

        let second = generation.next();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_tickets_never_repeat() {
        let mut generation = LoadGeneration::default();
        let a = generation.next();
        let b = generation.next();
        let c = generation.next();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn test_signal_guard_follows_route_changes_and_disposal() {
        let owner = Owner::new();
        owner.with(|| {
            let generation = RwSignal::new(LoadGeneration::default());
            let first = begin_load(generation).unwrap();
            let second = begin_load(generation).unwrap();
            assert!(!still_current(generation, first));
            assert!(still_current(generation, second));

            generation.dispose();
            assert!(!still_current(generation, second));
            assert!(begin_load(generation).is_none());
        });
    }
}
