//! Pagination Component
//!
//! Page navigation for the DataTable.

use gpui::{App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window};
use gpui_component::{
    ActiveTheme, Disableable, IconName, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
};

use super::data_table::TableActionHandler;
use crate::table::{PaginationState, TableAction};

/// Pagination component
#[derive(IntoElement)]
pub struct Pagination {
    state: PaginationState,
    range_label: SharedString,
    on_action: TableActionHandler,
}

impl Pagination {
    /// `range_label` is the translated "first-last of total" text
    pub fn new(state: PaginationState, range_label: impl Into<SharedString>, on_action: TableActionHandler) -> Self {
        Self {
            state,
            range_label: range_label.into(),
            on_action,
        }
    }
}

impl RenderOnce for Pagination {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let current = self.state.current_page();
        let total = self.state.total_pages().max(1);
        let on_previous = self.on_action.clone();
        let on_next = self.on_action;

        h_flex()
            .w_full()
            .px_4()
            .py_2()
            .items_center()
            .justify_between()
            .border_t_1()
            .border_color(cx.theme().border)
            // Item range
            .child(
                Label::new(self.range_label)
                    .text_sm()
                    .text_color(cx.theme().muted_foreground),
            )
            // Page navigation
            .child(
                h_flex()
                    .items_center()
                    .gap_2()
                    .child(
                        Button::new("prev-page")
                            .ghost()
                            .small()
                            .icon(IconName::ChevronLeft)
                            .disabled(!self.state.has_previous())
                            .on_click(move |_, window, cx| on_previous(TableAction::PreviousPage, window, cx)),
                    )
                    .child(Label::new(format!("{current} / {total}")).text_sm())
                    .child(
                        Button::new("next-page")
                            .ghost()
                            .small()
                            .icon(IconName::ChevronRight)
                            .disabled(!self.state.has_next())
                            .on_click(move |_, window, cx| on_next(TableAction::NextPage, window, cx)),
                    ),
            )
    }
}
