//! Table Model
//!
//! Headless state behind the data table: the rows of the displayed page,
//! the selection over them, and translation of user actions into intents
//! for the owning page. The model never performs I/O.

use ahash::AHashSet;

use super::column::{Cell, Column, Identifiable};
use super::pagination::PaginationState;
use super::selection::SelectionSet;

/// Something the owning page is asked to do
#[derive(Debug, Clone, PartialEq)]
pub enum TableIntent<R> {
    Delete(R),
    Update(R),
    DeleteMultiple(Vec<R>),
    NextPage,
    PreviousPage,
}

/// A user interaction on the rendered table, addressed by row position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableAction {
    ToggleRow(usize),
    ToggleAll,
    Delete(usize),
    Update(usize),
    DeleteSelected,
    NextPage,
    PreviousPage,
}

/// One row ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRow<Id> {
    pub index: usize,
    pub id: Id,
    pub cells: Vec<Cell>,
    pub checked: bool,
}

/// Rows, selection and paging inputs of one table instance
pub struct TableModel<R: Identifiable> {
    rows: Vec<R>,
    selection: SelectionSet<R::Id>,
    enable_multiple: bool,
    pagination: PaginationState,
}

impl<R: Identifiable + Clone> TableModel<R> {
    pub fn new(enable_multiple: bool) -> Self {
        Self {
            rows: Vec::new(),
            selection: SelectionSet::new(),
            enable_multiple,
            pagination: PaginationState::default(),
        }
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn enable_multiple(&self) -> bool {
        self.enable_multiple
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    pub fn selection(&self) -> &SelectionSet<R::Id> {
        &self.selection
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Install a freshly fetched page.
    ///
    /// Moving to a different page clears the selection; reloading the same
    /// page keeps only the ids that are still present.
    pub fn replace_data(&mut self, rows: Vec<R>, pagination: PaginationState) {
        let page_changed = pagination.current_page() != self.pagination.current_page();

        let mut seen = AHashSet::with_capacity(rows.len());
        for row in &rows {
            if !seen.insert(row.row_id()) {
                tracing::warn!(id = %row.row_id(), "Duplicate row id on loaded page");
            }
        }

        if page_changed {
            self.selection.clear();
        } else {
            self.selection.retain(|id| seen.contains(id));
        }

        self.rows = rows;
        self.pagination = pagination;
    }

    /// Update paging inputs without touching rows
    pub fn set_pagination(&mut self, pagination: PaginationState) {
        self.pagination = pagination;
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Deselect the given ids, leaving the rest of the selection intact
    pub fn clear_selection_of(&mut self, ids: &[R::Id]) {
        for id in ids {
            self.selection.remove(id);
        }
    }

    /// Produce one rendered row per record, in data order
    pub fn render(&self, columns: &[Column<R>]) -> Vec<RenderedRow<R::Id>> {
        self.rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let id = row.row_id();
                RenderedRow {
                    index,
                    checked: self.enable_multiple && self.selection.contains(&id),
                    cells: columns.iter().map(|col| col.render_cell(row)).collect(),
                    id,
                }
            })
            .collect()
    }

    /// Whether every visible row is selected (false on an empty page)
    pub fn is_all_selected(&self) -> bool {
        let visible: Vec<R::Id> = self.rows.iter().map(Identifiable::row_id).collect();
        self.selection.covers(&visible)
    }

    /// Flip the selection of the row at `index`
    pub fn toggle_row(&mut self, index: usize) -> Option<bool> {
        if !self.enable_multiple {
            return None;
        }
        let id = self.rows.get(index)?.row_id();
        Some(self.selection.toggle(id))
    }

    /// All-or-nothing toggle over the displayed page
    pub fn toggle_all(&mut self) {
        if !self.enable_multiple {
            return;
        }
        if self.is_all_selected() {
            self.selection.clear();
        } else {
            self.selection
                .select_only(self.rows.iter().map(Identifiable::row_id));
        }
    }

    /// Selected records in data order
    pub fn selected_records(&self) -> Vec<R> {
        self.rows
            .iter()
            .filter(|row| self.selection.contains(&row.row_id()))
            .cloned()
            .collect()
    }

    /// Translate a user action into an intent for the owning page
    pub fn apply(&mut self, action: TableAction) -> Option<TableIntent<R>> {
        match action {
            TableAction::ToggleRow(index) => {
                self.toggle_row(index);
                None
            }
            TableAction::ToggleAll => {
                self.toggle_all();
                None
            }
            TableAction::Delete(index) => self.rows.get(index).cloned().map(TableIntent::Delete),
            TableAction::Update(index) => self.rows.get(index).cloned().map(TableIntent::Update),
            TableAction::DeleteSelected => {
                if !self.enable_multiple {
                    return None;
                }
                let records = self.selected_records();
                (!records.is_empty()).then_some(TableIntent::DeleteMultiple(records))
            }
            TableAction::NextPage => self.pagination.has_next().then_some(TableIntent::NextPage),
            TableAction::PreviousPage => self
                .pagination
                .has_previous()
                .then_some(TableIntent::PreviousPage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::column::Renderable;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: u32,
        name: String,
    }

    impl Identifiable for Item {
        type Id = u32;

        fn row_id(&self) -> u32 {
            self.id
        }
    }

    impl Renderable for Item {
        fn columns() -> Vec<Column<Self>> {
            vec![
                Column::new("id", "col.id", |row: &Item| Cell::muted(row.id.to_string())),
                Column::new("name", "col.name", |row: &Item| Cell::text(row.name.clone())),
            ]
        }
    }

    fn items(n: u32) -> Vec<Item> {
        (1..=n)
            .map(|id| Item {
                id,
                name: format!("item-{id}"),
            })
            .collect()
    }

    fn page(current: u32, per_page: u32, total: u64) -> PaginationState {
        let mut p = PaginationState::new(per_page);
        p.set_total(total);
        while p.current_page() < current && p.next_page() {}
        p
    }

    fn model_with(n: u32) -> TableModel<Item> {
        let mut model = TableModel::new(true);
        model.replace_data(items(n), page(1, 10, u64::from(n)));
        model
    }

    #[test]
    fn test_render_one_row_per_record_with_every_column() {
        let model = model_with(3);
        let rows = model.render(&Item::columns());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].cells, vec![Cell::muted("2"), Cell::text("item-2")]);
        assert!(rows.iter().all(|r| !r.checked));
    }

    #[test]
    fn test_checked_state_follows_selection() {
        let mut model = model_with(4);
        model.toggle_row(1);
        model.toggle_row(3);
        let checked: Vec<bool> = model.render(&Item::columns()).iter().map(|r| r.checked).collect();
        assert_eq!(checked, vec![false, true, false, true]);
    }

    #[test]
    fn test_select_all_round_trip_returns_to_empty() {
        let mut model = model_with(5);
        model.toggle_all();
        assert!(model.is_all_selected());
        assert_eq!(model.selected_count(), 5);
        model.toggle_all();
        assert_eq!(model.selected_count(), 0);
    }

    #[test]
    fn test_select_all_with_partial_selection_selects_everything() {
        let mut model = model_with(3);
        model.toggle_row(0);
        model.toggle_all();
        assert_eq!(model.selected_count(), 3);
    }

    #[test]
    fn test_delete_selected_emits_selected_record_only() {
        let mut model = model_with(2);
        model.apply(TableAction::ToggleRow(0));
        let intent = model.apply(TableAction::DeleteSelected);
        assert_eq!(intent, Some(TableIntent::DeleteMultiple(vec![items(2)[0].clone()])));
        // the table leaves clearing to the caller
        assert_eq!(model.selected_count(), 1);
    }

    #[test]
    fn test_delete_selected_with_nothing_selected_is_none() {
        let mut model = model_with(2);
        assert_eq!(model.apply(TableAction::DeleteSelected), None);
    }

    #[test]
    fn test_single_row_intents_carry_record() {
        let mut model = model_with(2);
        assert_eq!(
            model.apply(TableAction::Delete(1)),
            Some(TableIntent::Delete(items(2)[1].clone()))
        );
        assert_eq!(
            model.apply(TableAction::Update(0)),
            Some(TableIntent::Update(items(2)[0].clone()))
        );
        assert_eq!(model.apply(TableAction::Delete(9)), None);
    }

    #[test]
    fn test_page_intents_respect_bounds() {
        let mut model = TableModel::new(true);
        model.replace_data(items(5), page(3, 10, 25));
        assert_eq!(model.apply(TableAction::NextPage), None);
        assert_eq!(model.apply(TableAction::PreviousPage), Some(TableIntent::PreviousPage));
    }

    #[test]
    fn test_selection_disabled_without_multiple() {
        let mut model: TableModel<Item> = TableModel::new(false);
        model.replace_data(items(2), page(1, 10, 2));
        assert_eq!(model.toggle_row(0), None);
        model.toggle_all();
        assert_eq!(model.selected_count(), 0);
        assert!(model.render(&Item::columns()).iter().all(|r| !r.checked));
    }

    #[test]
    fn test_page_change_clears_selection() {
        let mut model = TableModel::new(true);
        model.replace_data(items(10), page(1, 10, 30));
        model.toggle_all();
        let next: Vec<Item> = (11..=20).map(|id| Item { id, name: String::new() }).collect();
        model.replace_data(next, page(2, 10, 30));
        assert_eq!(model.selected_count(), 0);
    }

    #[test]
    fn test_same_page_reload_prunes_missing_ids() {
        let mut model = model_with(3);
        model.toggle_all();
        let reloaded: Vec<Item> = items(3).into_iter().filter(|i| i.id != 2).collect();
        model.replace_data(reloaded, page(1, 10, 2));
        let ids: Vec<u32> = model.selection().iter().copied().collect();
        assert_eq!(ids, vec![1, 3]);
    }

    proptest! {
        #[test]
        fn delete_multiple_preserves_data_order(
            n in 1u32..30,
            picks in proptest::collection::vec(any::<prop::sample::Index>(), 0..30),
        ) {
            let mut model = model_with(n);
            for pick in &picks {
                model.toggle_row(pick.index(n as usize));
            }
            let expected: Vec<Item> = model
                .rows()
                .iter()
                .filter(|r| model.selection().contains(&r.id))
                .cloned()
                .collect();
            match model.apply(TableAction::DeleteSelected) {
                Some(TableIntent::DeleteMultiple(records)) => prop_assert_eq!(records, expected),
                None => prop_assert!(expected.is_empty()),
                other => prop_assert!(false, "unexpected intent {:?}", other),
            }
        }
    }
}
