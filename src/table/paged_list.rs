//! Paged List
//!
//! The page-shell half of a table: owns the pagination state and the
//! fetched slice, decides which responses to apply, and turns table intents
//! into effects (fetch, delete, update) for the GPUI layer to execute.

use super::column::Identifiable;
use super::fetch_guard::{RequestTicket, RequestTracker};
use super::model::{TableAction, TableIntent, TableModel};
use super::pagination::PaginationState;
use crate::domain::Page;
use crate::error::Result;

/// Parameters of one page fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub ticket: RequestTicket,
    pub page: u32,
    pub limit: u32,
}

/// What happened to a fetch response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    /// Applied, but the server total no longer reaches the requested page;
    /// the page was pulled back and must be fetched again
    Clamped,
    /// A newer fetch was issued; the response was dropped
    Stale,
    /// The fetch failed; the previous data is kept
    Failed,
}

/// Work the owning view has to perform after a table action
#[derive(Debug, Clone, PartialEq)]
pub enum ListEffect<R> {
    None,
    Fetch,
    Delete(R),
    Update(R),
    DeleteMany(Vec<R>),
}

pub struct PagedList<R: Identifiable> {
    table: TableModel<R>,
    pagination: PaginationState,
    tracker: RequestTracker,
    loading: bool,
    loaded: bool,
}

impl<R: Identifiable + Clone> PagedList<R> {
    pub fn new(items_per_page: u32, enable_multiple: bool) -> Self {
        Self {
            table: TableModel::new(enable_multiple),
            pagination: PaginationState::new(items_per_page),
            tracker: RequestTracker::new(),
            loading: false,
            loaded: false,
        }
    }

    pub fn table(&self) -> &TableModel<R> {
        &self.table
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether at least one page has been applied
    pub fn has_loaded(&self) -> bool {
        self.loaded
    }

    /// Start a fetch of the current page
    pub fn begin_fetch(&mut self) -> FetchRequest {
        let page = self.pagination.current_page();
        self.loading = true;
        FetchRequest {
            ticket: self.tracker.begin(page),
            page,
            limit: self.pagination.items_per_page(),
        }
    }

    /// Apply a fetch response if it is still the latest one
    pub fn apply_response(&mut self, ticket: RequestTicket, response: Result<Page<R>>) -> FetchOutcome {
        if !self.tracker.is_current(ticket) {
            tracing::debug!(
                seq = ticket.seq(),
                page = ticket.page(),
                "Dropping stale page response"
            );
            return FetchOutcome::Stale;
        }
        self.loading = false;

        match response {
            Ok(page) => {
                self.pagination.set_total(page.total);
                self.loaded = true;
                if page.data.is_empty() && self.pagination.clamp() {
                    self.sync_table_page();
                    return FetchOutcome::Clamped;
                }
                self.table.replace_data(page.data, self.pagination);
                FetchOutcome::Applied
            }
            Err(e) => {
                tracing::warn!(error = %e, page = ticket.page(), "Page fetch failed");
                FetchOutcome::Failed
            }
        }
    }

    /// Route a table action; page moves update pagination and ask for a fetch
    pub fn dispatch(&mut self, action: TableAction) -> ListEffect<R> {
        match self.table.apply(action) {
            None => ListEffect::None,
            Some(TableIntent::NextPage) => self.move_page(PaginationState::next_page),
            Some(TableIntent::PreviousPage) => self.move_page(PaginationState::previous_page),
            Some(TableIntent::Delete(record)) => ListEffect::Delete(record),
            Some(TableIntent::Update(record)) => ListEffect::Update(record),
            Some(TableIntent::DeleteMultiple(records)) => ListEffect::DeleteMany(records),
        }
    }

    fn move_page(&mut self, step: fn(&mut PaginationState) -> bool) -> ListEffect<R> {
        if step(&mut self.pagination) {
            self.sync_table_page();
            ListEffect::Fetch
        } else {
            ListEffect::None
        }
    }

    /// Record a successful deletion: drop the ids from the selection and
    /// shrink the total, clamping the current page
    pub fn deletion_succeeded(&mut self, removed: &[R::Id]) {
        self.table.clear_selection_of(removed);
        self.pagination.items_removed(removed.len() as u64);
        self.sync_table_page();
    }

    /// Hand the pagination to the table. Leaving the displayed page drops
    /// the selection, so nothing selected there survives into the next page.
    fn sync_table_page(&mut self) {
        if self.table.pagination().current_page() != self.pagination.current_page() {
            self.table.clear_selection();
        }
        self.table.set_pagination(self.pagination);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[derive(Debug, Clone, PartialEq)]
    struct Row(u32);

    impl Identifiable for Row {
        type Id = u32;

        fn row_id(&self) -> u32 {
            self.0
        }
    }

    fn page_of(ids: std::ops::RangeInclusive<u32>, page: u32, total: u64) -> Page<Row> {
        Page {
            data: ids.map(Row).collect(),
            page,
            total,
        }
    }

    #[test]
    fn test_first_fetch_applies_page() {
        let mut list = PagedList::new(10, true);
        let req = list.begin_fetch();
        assert!(list.is_loading());
        assert_eq!((req.page, req.limit), (1, 10));

        let outcome = list.apply_response(req.ticket, Ok(page_of(1..=10, 1, 25)));
        assert_eq!(outcome, FetchOutcome::Applied);
        assert!(!list.is_loading());
        assert_eq!(list.table().len(), 10);
        assert_eq!(list.pagination().total_pages(), 3);
    }

    #[test]
    fn test_slow_response_for_earlier_page_is_discarded() {
        // page 3 is requested after page 2; page 2 answers last
        let mut list = PagedList::new(10, true);
        let first = list.begin_fetch();
        list.apply_response(first.ticket, Ok(page_of(1..=10, 1, 30)));
        assert_eq!(list.dispatch(TableAction::NextPage), ListEffect::Fetch);
        let req_two = list.begin_fetch();
        assert_eq!(list.dispatch(TableAction::NextPage), ListEffect::Fetch);
        let req_three = list.begin_fetch();

        assert_eq!(
            list.apply_response(req_three.ticket, Ok(page_of(21..=30, 3, 30))),
            FetchOutcome::Applied
        );
        assert_eq!(
            list.apply_response(req_two.ticket, Ok(page_of(11..=20, 2, 30))),
            FetchOutcome::Stale
        );
        assert_eq!(list.table().rows().first(), Some(&Row(21)));
        assert_eq!(list.pagination().current_page(), 3);
    }

    #[test]
    fn test_failed_fetch_keeps_previous_rows() {
        let mut list = PagedList::new(10, true);
        let req = list.begin_fetch();
        list.apply_response(req.ticket, Ok(page_of(1..=3, 1, 3)));

        let req = list.begin_fetch();
        let outcome = list.apply_response(
            req.ticket,
            Err(Error::Api {
                status: 500,
                message: "boom".into(),
            }),
        );
        assert_eq!(outcome, FetchOutcome::Failed);
        assert_eq!(list.table().len(), 3);
        assert!(!list.is_loading());
    }

    #[test]
    fn test_empty_page_past_the_end_is_clamped() {
        let mut list = PagedList::new(10, true);
        let req = list.begin_fetch();
        list.apply_response(req.ticket, Ok(page_of(1..=10, 1, 21)));
        list.dispatch(TableAction::NextPage);
        list.dispatch(TableAction::NextPage);
        assert_eq!(list.pagination().current_page(), 3);

        // someone else deleted items meanwhile
        let req = list.begin_fetch();
        let outcome = list.apply_response(req.ticket, Ok(page_of(1..=0, 3, 20)));
        assert_eq!(outcome, FetchOutcome::Clamped);
        assert_eq!(list.pagination().current_page(), 2);
    }

    #[test]
    fn test_delete_many_then_success_clears_selection_and_clamps() {
        let mut list = PagedList::new(10, true);
        let req = list.begin_fetch();
        list.apply_response(req.ticket, Ok(page_of(1..=10, 1, 11)));
        list.dispatch(TableAction::NextPage);
        let req = list.begin_fetch();
        list.apply_response(req.ticket, Ok(page_of(11..=11, 2, 11)));

        list.dispatch(TableAction::ToggleAll);
        let effect = list.dispatch(TableAction::DeleteSelected);
        assert_eq!(effect, ListEffect::DeleteMany(vec![Row(11)]));

        list.deletion_succeeded(&[11]);
        assert_eq!(list.table().selected_count(), 0);
        assert_eq!(list.pagination().current_page(), 1);
        assert_eq!(list.pagination().total_items(), 10);
    }

    #[test]
    fn test_next_page_clears_selection_even_when_ids_reappear() {
        let mut list = PagedList::new(10, true);
        let req = list.begin_fetch();
        list.apply_response(req.ticket, Ok(page_of(1..=10, 1, 30)));
        list.dispatch(TableAction::ToggleAll);
        assert_eq!(list.table().selected_count(), 10);

        assert_eq!(list.dispatch(TableAction::NextPage), ListEffect::Fetch);
        assert_eq!(list.table().selected_count(), 0);
        // nothing from page 1 can be deleted while page 2 loads
        assert_eq!(list.dispatch(TableAction::DeleteSelected), ListEffect::None);

        // an insert upstream shifted id 10 onto page 2
        let req = list.begin_fetch();
        let outcome = list.apply_response(req.ticket, Ok(page_of(10..=19, 2, 31)));
        assert_eq!(outcome, FetchOutcome::Applied);
        assert_eq!(list.table().selected_count(), 0);
        assert!(!list.table().selection().contains(&10));
    }

    #[test]
    fn test_same_page_refetch_keeps_surviving_selection() {
        let mut list = PagedList::new(10, true);
        let req = list.begin_fetch();
        list.apply_response(req.ticket, Ok(page_of(1..=10, 1, 30)));
        list.dispatch(TableAction::ToggleAll);

        let req = list.begin_fetch();
        list.apply_response(req.ticket, Ok(page_of(2..=11, 1, 30)));
        assert_eq!(list.table().selected_count(), 9);
        assert!(!list.table().selection().contains(&1));
    }

    #[test]
    fn test_clamp_to_earlier_page_clears_selection() {
        let mut list = PagedList::new(10, true);
        let req = list.begin_fetch();
        list.apply_response(req.ticket, Ok(page_of(1..=10, 1, 21)));
        list.dispatch(TableAction::NextPage);
        list.dispatch(TableAction::NextPage);
        let req = list.begin_fetch();
        list.apply_response(req.ticket, Ok(page_of(21..=21, 3, 21)));
        list.dispatch(TableAction::ToggleAll);
        assert_eq!(list.table().selected_count(), 1);

        let req = list.begin_fetch();
        let outcome = list.apply_response(req.ticket, Ok(page_of(1..=0, 3, 20)));
        assert_eq!(outcome, FetchOutcome::Clamped);
        assert_eq!(list.table().selected_count(), 0);
    }
}
