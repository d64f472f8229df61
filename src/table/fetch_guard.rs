//! Stale Response Guard
//!
//! Every page fetch takes a ticket from a monotonic counter. A response is
//! only applied if its ticket is still the latest one issued, so a slow
//! response for an earlier page can never overwrite a later page.

/// Identifies one issued fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    seq: u64,
    page: u32,
}

impl RequestTicket {
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// Issues tickets and decides which responses are still wanted
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for a fetch of `page`, superseding all earlier tickets
    pub fn begin(&mut self, page: u32) -> RequestTicket {
        self.latest += 1;
        RequestTicket {
            seq: self.latest,
            page,
        }
    }

    /// Whether `ticket` belongs to the most recent fetch
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.seq == self.latest
    }

    /// Supersede every outstanding ticket without issuing a new one
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let mut tracker = RequestTracker::new();
        let first = tracker.begin(1);
        let second = tracker.begin(2);
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
        assert_eq!(second.page(), 2);
    }

    #[test]
    fn test_same_page_refetch_supersedes_earlier_ticket() {
        let mut tracker = RequestTracker::new();
        let first = tracker.begin(3);
        let again = tracker.begin(3);
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(again));
    }

    #[test]
    fn test_invalidate_drops_outstanding_ticket() {
        let mut tracker = RequestTracker::new();
        let ticket = tracker.begin(1);
        tracker.invalidate();
        assert!(!tracker.is_current(ticket));
    }
}
