//! Form Field
//!
//! Label, control and an optional validation message stacked vertically.

use gpui::{AnyElement, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, px};
use gpui_component::{ActiveTheme, label::Label, v_flex};

#[derive(IntoElement)]
pub struct FormField {
    label: SharedString,
    control: AnyElement,
    error: Option<SharedString>,
    width: Option<f32>,
}

impl FormField {
    pub fn new(label: impl Into<SharedString>, control: impl IntoElement) -> Self {
        Self {
            label: label.into(),
            control: control.into_any_element(),
            error: None,
            width: None,
        }
    }

    pub fn error(mut self, error: Option<impl Into<SharedString>>) -> Self {
        self.error = error.map(Into::into);
        self
    }

    /// Fixed width in pixels; the field grows to fill the row otherwise
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }
}

impl RenderOnce for FormField {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let mut field = v_flex().gap_1();
        field = match self.width {
            Some(width) => field.w(px(width)).flex_none(),
            None => field.flex_1().min_w(px(160.0)),
        };

        field
            .child(
                Label::new(self.label)
                    .text_xs()
                    .text_color(cx.theme().muted_foreground),
            )
            .child(self.control)
            .children(
                self.error
                    .map(|error| Label::new(error).text_xs().text_color(cx.theme().danger)),
            )
    }
}
