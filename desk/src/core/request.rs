//! # Request Tracking
//!
//! Every view slot that issues requests owns a [`RequestTracker`]. Starting a
//! request hands out a [`RequestTicket`]; the response is only applied while
//! that ticket is still the latest one for the slot. A late response from a
//! superseded request therefore can never overwrite newer state, whatever
//! order the network completes in.

/// Identity of one issued request within its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Per-slot generation counter.
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding every earlier ticket.
    pub fn begin(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    /// Whether `ticket` belongs to the most recent request of this slot.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest && self.latest != 0
    }

    /// Abandon all in-flight requests without starting a new one.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_is_current() {
        let mut tracker = RequestTracker::new();
        let first = tracker.begin();
        assert!(tracker.is_current(first));

        let second = tracker.begin();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn test_invalidate_abandons_in_flight() {
        let mut tracker = RequestTracker::new();
        let ticket = tracker.begin();
        tracker.invalidate();

        assert!(!tracker.is_current(ticket));
        let next = tracker.begin();
        assert!(tracker.is_current(next));
    }

    #[test]
    fn test_tickets_from_other_trackers_do_not_match_fresh_slot() {
        let fresh = RequestTracker::new();
        let mut other = RequestTracker::new();
        let ticket = other.begin();
        other.invalidate();

        assert!(!fresh.is_current(ticket));
    }
}
