//! Resource List View
//!
//! One generic page for every [`Resource`]: title bar, data table and
//! pagination, wired to a [`ListState`].

use std::rc::Rc;

use crate::components::composite::data_table::{DataTable, HeaderCell, TableActionHandler, TableLabels, TableRow};
use crate::domain::Resource;
use crate::helpers::{TABLE_CONTEXT, TableKeyAction};
use crate::states::{ListState, i18n_columns, i18n_format, i18n_resources, i18n_table};
use crate::table::{Column, Renderable, TableAction};
use gpui::{Context, Entity, FocusHandle, Subscription, Window, div, prelude::*};
use gpui_component::{
    ActiveTheme, IconName, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    v_flex,
};

pub struct ResourceListView<R: Resource> {
    state: Entity<ListState<R>>,
    columns: Vec<Column<R>>,
    focus_handle: FocusHandle,
    _subscriptions: Vec<Subscription>,
}

impl<R: Resource> ResourceListView<R> {
    /// Create the page and fetch its first page of records
    pub fn new(items_per_page: u32, _window: &mut Window, cx: &mut Context<Self>) -> Self {
        let state = cx.new(|_| ListState::<R>::new(items_per_page));
        let subscriptions = vec![cx.observe(&state, |_this, _state, cx| cx.notify())];
        state.update(cx, |state, cx| state.refresh(cx));

        Self {
            state,
            columns: R::columns(),
            focus_handle: cx.focus_handle(),
            _subscriptions: subscriptions,
        }
    }

    pub fn state(&self) -> Entity<ListState<R>> {
        self.state.clone()
    }

    fn on_key_action(&mut self, action: &TableKeyAction, _window: &mut Window, cx: &mut Context<Self>) {
        let action = match action {
            TableKeyAction::NextPage => TableAction::NextPage,
            TableKeyAction::PreviousPage => TableAction::PreviousPage,
            TableKeyAction::SelectAll => TableAction::ToggleAll,
            TableKeyAction::DeleteSelected => TableAction::DeleteSelected,
            TableKeyAction::Refresh => {
                self.state.update(cx, |state, cx| state.refresh(cx));
                return;
            }
        };
        self.state.update(cx, |state, cx| state.dispatch(action, cx));
    }

    fn labels(&self, cx: &mut Context<Self>) -> TableLabels {
        let state = self.state.read(cx);
        let table = state.list().table();
        let pagination = state.list().pagination();

        let range = match pagination.visible_range() {
            Some((first, last)) => i18n_format(
                cx,
                "table.range",
                &[
                    ("first", &first.to_string()),
                    ("last", &last.to_string()),
                    ("total", &pagination.total_items().to_string()),
                ],
            ),
            None => i18n_table(cx, "no_items"),
        };

        TableLabels {
            empty: i18n_table(cx, "empty"),
            loading: i18n_table(cx, "loading"),
            delete: i18n_table(cx, "delete"),
            update: R::UPDATE_LABEL.map(|key| i18n_table(cx, key)),
            selected: i18n_format(cx, "table.selected", &[("count", &table.selected_count().to_string())]),
            delete_selected: i18n_table(cx, "delete_selected"),
            range,
        }
    }
}

impl<R: Resource> Render for ResourceListView<R> {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let labels = self.labels(cx);
        let headers: Vec<HeaderCell> = self
            .columns
            .iter()
            .map(|col| HeaderCell {
                label: i18n_columns(cx, &col.label),
                width: col.width,
            })
            .collect();

        let state = self.state.read(cx);
        let list = state.list();
        let table = list.table();
        let rows: Vec<TableRow> = table
            .render(&self.columns)
            .into_iter()
            .zip(table.rows())
            .map(|(rendered, record)| TableRow {
                cells: rendered.cells,
                checked: rendered.checked,
                can_update: R::UPDATE_LABEL.is_some() && record.quick_update().is_some(),
            })
            .collect();
        let (enable_multiple, all_selected, selected_count) =
            (table.enable_multiple(), table.is_all_selected(), table.selected_count());
        let (loading, busy, pagination) = (list.is_loading(), state.is_busy(), *list.pagination());
        let load_failed = !list.has_loaded() && !loading;

        let list_state = self.state.clone();
        let on_action: TableActionHandler = Rc::new(move |action, _window, cx| {
            list_state.update(cx, |state, cx| state.dispatch(action, cx));
        });

        let title = i18n_resources(cx, R::TITLE_KEY);
        let refresh_state = self.state.clone();

        v_flex()
            .id(R::PATH)
            .key_context(TABLE_CONTEXT)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::on_key_action))
            .size_full()
            .p_4()
            .gap_3()
            .child(
                h_flex()
                    .w_full()
                    .items_center()
                    .justify_between()
                    .child(Label::new(title).text_xl())
                    .child(
                        Button::new("refresh")
                            .ghost()
                            .small()
                            .icon(IconName::Redo)
                            .tooltip(i18n_table(cx, "refresh"))
                            .loading(loading)
                            .on_click(move |_, _, cx| {
                                refresh_state.update(cx, |state, cx| state.refresh(cx));
                            }),
                    ),
            )
            .child(
                div().flex_1().min_h_0().child(
                    DataTable::new("resource-table", headers, on_action)
                        .rows(rows)
                        .selection(enable_multiple, all_selected, selected_count)
                        .loading(loading)
                        .busy(busy)
                        .pagination(pagination)
                        .labels(labels),
                ),
            )
            .when(load_failed, |this| {
                this.child(
                    Label::new(i18n_table(cx, "load_failed"))
                        .text_sm()
                        .text_color(cx.theme().muted_foreground),
                )
            })
    }
}
