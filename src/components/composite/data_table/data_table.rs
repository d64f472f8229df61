//! DataTable Component
//!
//! Header, rows, per-row actions, a bulk-delete toolbar and pagination.
//! Cells arrive already rendered as [`Cell`] values.

use std::rc::Rc;

use gpui::{
    AnyElement, App, Div, ElementId, Hsla, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::FluentBuilder, px,
};
use gpui_component::{
    ActiveTheme, Colorize, Disableable, IconName, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    v_flex,
};

use super::pagination::Pagination;
use crate::components::primitives::checkbox::Checkbox;
use crate::constants::{TABLE_ACTIONS_COLUMN_WIDTH, TABLE_HEADER_HEIGHT, TABLE_ROW_HEIGHT, TABLE_SELECT_COLUMN_WIDTH};
use crate::table::{Cell, ColumnWidth, PaginationState, TableAction, Tone};

/// Receives every interaction on the table
pub type TableActionHandler = Rc<dyn Fn(TableAction, &mut Window, &mut App)>;

/// A translated column header
#[derive(Debug, Clone)]
pub struct HeaderCell {
    pub label: SharedString,
    pub width: ColumnWidth,
}

/// One displayed row
#[derive(Debug, Clone)]
pub struct TableRow {
    pub cells: Vec<Cell>,
    pub checked: bool,
    /// Whether the record offers a quick update
    pub can_update: bool,
}

/// Translated texts used by the table chrome
#[derive(Debug, Clone, Default)]
pub struct TableLabels {
    pub empty: SharedString,
    pub loading: SharedString,
    pub delete: SharedString,
    pub update: Option<SharedString>,
    /// e.g. "3 selected"
    pub selected: SharedString,
    pub delete_selected: SharedString,
    /// e.g. "11-20 of 25"
    pub range: SharedString,
}

#[derive(IntoElement)]
pub struct DataTable {
    id: ElementId,
    headers: Vec<HeaderCell>,
    rows: Vec<TableRow>,
    enable_multiple: bool,
    all_selected: bool,
    selected_count: usize,
    loading: bool,
    busy: bool,
    pagination: PaginationState,
    labels: TableLabels,
    on_action: TableActionHandler,
}

impl DataTable {
    pub fn new(id: impl Into<ElementId>, headers: Vec<HeaderCell>, on_action: TableActionHandler) -> Self {
        Self {
            id: id.into(),
            headers,
            rows: Vec::new(),
            enable_multiple: false,
            all_selected: false,
            selected_count: 0,
            loading: false,
            busy: false,
            pagination: PaginationState::default(),
            labels: TableLabels::default(),
            on_action,
        }
    }

    pub fn rows(mut self, rows: Vec<TableRow>) -> Self {
        self.rows = rows;
        self
    }

    /// Show the checkbox column and the bulk toolbar
    pub fn selection(mut self, enable_multiple: bool, all_selected: bool, selected_count: usize) -> Self {
        self.enable_multiple = enable_multiple;
        self.all_selected = all_selected;
        self.selected_count = selected_count;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Disable the mutation buttons while a mutation is in flight
    pub fn busy(mut self, busy: bool) -> Self {
        self.busy = busy;
        self
    }

    pub fn pagination(mut self, pagination: PaginationState) -> Self {
        self.pagination = pagination;
        self
    }

    pub fn labels(mut self, labels: TableLabels) -> Self {
        self.labels = labels;
        self
    }

    fn emit(&self, action: TableAction) -> impl Fn(&gpui::ClickEvent, &mut Window, &mut App) + 'static {
        let handler = self.on_action.clone();
        move |_, window, cx| handler(action, window, cx)
    }

    fn render_toolbar(&self, cx: &App) -> impl IntoElement {
        h_flex()
            .w_full()
            .px_3()
            .py_2()
            .gap_3()
            .items_center()
            .bg(cx.theme().secondary)
            .border_b_1()
            .border_color(cx.theme().border)
            .child(Label::new(self.labels.selected.clone()).text_sm())
            .child(
                Button::new("delete-selected")
                    .danger()
                    .small()
                    .icon(IconName::Delete)
                    .label(self.labels.delete_selected.clone())
                    .disabled(self.busy)
                    .on_click(self.emit(TableAction::DeleteSelected)),
            )
    }

    fn render_header(&self, cx: &App) -> impl IntoElement {
        let all_selected = self.all_selected;
        let on_toggle_all = self.on_action.clone();

        h_flex()
            .h(px(TABLE_HEADER_HEIGHT))
            .w_full()
            .flex_none()
            .items_center()
            .bg(cx.theme().secondary)
            .border_b_1()
            .border_color(cx.theme().border)
            .when(self.enable_multiple, |this| {
                this.child(
                    div().w(px(TABLE_SELECT_COLUMN_WIDTH)).flex_none().px_3().child(
                        Checkbox::new("select-all")
                            .checked(all_selected)
                            .disabled(self.rows.is_empty())
                            .on_change(move |_, window, cx| on_toggle_all(TableAction::ToggleAll, window, cx)),
                    ),
                )
            })
            .children(self.headers.iter().map(|header| {
                sized(div(), header.width)
                    .px_3()
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .text_color(cx.theme().foreground)
                    .overflow_hidden()
                    .child(header.label.clone())
            }))
            .child(div().w(px(TABLE_ACTIONS_COLUMN_WIDTH)).flex_none())
    }

    fn render_row(&self, index: usize, row: &TableRow, cx: &App) -> impl IntoElement {
        let bg = if row.checked {
            cx.theme().list_active
        } else {
            cx.theme().background
        };
        let on_toggle = self.on_action.clone();

        let mut actions = h_flex()
            .w(px(TABLE_ACTIONS_COLUMN_WIDTH))
            .flex_none()
            .gap_1()
            .justify_end()
            .px_2();
        if let (true, Some(label)) = (row.can_update, self.labels.update.clone()) {
            actions = actions.child(
                Button::new(("update", index))
                    .ghost()
                    .small()
                    .label(label)
                    .disabled(self.busy)
                    .on_click(self.emit(TableAction::Update(index))),
            );
        }
        actions = actions.child(
            Button::new(("delete", index))
                .ghost()
                .small()
                .icon(IconName::Delete)
                .tooltip(self.labels.delete.clone())
                .disabled(self.busy)
                .on_click(self.emit(TableAction::Delete(index))),
        );

        h_flex()
            .id(("row", index))
            .h(px(TABLE_ROW_HEIGHT))
            .w_full()
            .flex_none()
            .items_center()
            .bg(bg)
            .hover(|s| s.bg(cx.theme().secondary))
            .border_b_1()
            .border_color(cx.theme().border)
            .when(self.enable_multiple, |this| {
                this.child(
                    div().w(px(TABLE_SELECT_COLUMN_WIDTH)).flex_none().px_3().child(
                        Checkbox::new(("row-check", index))
                            .checked(row.checked)
                            .on_change(move |_, window, cx| on_toggle(TableAction::ToggleRow(index), window, cx)),
                    ),
                )
            })
            .children(self.headers.iter().zip(&row.cells).map(|(header, cell)| {
                sized(div(), header.width)
                    .px_3()
                    .text_sm()
                    .overflow_hidden()
                    .child(render_cell(cell, cx))
            }))
            .child(actions)
    }

    fn render_placeholder(&self, text: SharedString, cx: &App) -> impl IntoElement {
        div()
            .flex_1()
            .flex()
            .items_center()
            .justify_center()
            .py_8()
            .text_color(cx.theme().muted_foreground)
            .child(text)
    }
}

impl RenderOnce for DataTable {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let body = if self.loading && self.rows.is_empty() {
            self.render_placeholder(self.labels.loading.clone(), cx).into_any_element()
        } else if self.rows.is_empty() {
            self.render_placeholder(self.labels.empty.clone(), cx).into_any_element()
        } else {
            div()
                .id("data-table-rows")
                .flex_1()
                .overflow_y_scroll()
                .children(
                    self.rows
                        .iter()
                        .enumerate()
                        .map(|(i, row)| self.render_row(i, row, cx).into_any_element())
                        .collect::<Vec<AnyElement>>(),
                )
                .into_any_element()
        };

        v_flex()
            .id(self.id.clone())
            .size_full()
            .bg(cx.theme().background)
            .border_1()
            .border_color(cx.theme().border)
            .rounded_md()
            .overflow_hidden()
            .when(self.enable_multiple && self.selected_count > 0, |this| {
                this.child(self.render_toolbar(cx))
            })
            .child(self.render_header(cx))
            .child(body)
            .child(Pagination::new(
                self.pagination,
                self.labels.range.clone(),
                self.on_action.clone(),
            ))
    }
}

fn sized(el: Div, width: ColumnWidth) -> Div {
    match width {
        ColumnWidth::Fixed(w) => el.w(px(w)).flex_none(),
        ColumnWidth::Flex(weight) => {
            let mut el = el.flex_basis(px(0.0)).min_w(px(60.0));
            el.style().flex_grow = Some(weight);
            el
        }
    }
}

fn tone_color(tone: Tone, cx: &App) -> Hsla {
    let theme = cx.theme();
    match tone {
        Tone::Neutral => theme.muted_foreground,
        Tone::Info => theme.info,
        Tone::Success => theme.success,
        Tone::Warning => theme.warning,
        Tone::Danger => theme.danger,
    }
}

/// Map a rendered cell to an element
pub fn render_cell(cell: &Cell, cx: &App) -> AnyElement {
    match cell {
        Cell::Text(text) => Label::new(text.clone()).text_ellipsis().into_any_element(),
        Cell::Muted(text) => Label::new(text.clone())
            .text_ellipsis()
            .text_color(cx.theme().muted_foreground)
            .into_any_element(),
        Cell::Badge { label, tone } => {
            let color = tone_color(*tone, cx);
            div()
                .px_2()
                .py_0p5()
                .rounded_md()
                .text_xs()
                .bg(color.opacity(0.15))
                .text_color(color)
                .child(label.clone())
                .into_any_element()
        }
        Cell::Money(_) => Label::new(cell.display_text()).into_any_element(),
        Cell::Flag(value) => {
            let color = if *value {
                cx.theme().success
            } else {
                cx.theme().muted_foreground
            };
            Label::new(cell.display_text()).text_color(color).into_any_element()
        }
        Cell::Empty => div().into_any_element(),
    }
}
