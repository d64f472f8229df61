//! Toast Overlay
//!
//! Stacks the queued notifications in the bottom-right corner.

use std::rc::Rc;

use gpui::{App, IntoElement, ParentElement, RenderOnce, Styled, Window, div, px};
use gpui_component::{
    ActiveTheme, Colorize, IconName, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    v_flex,
};

use crate::states::{Notification, NotificationLevel};

#[derive(IntoElement)]
pub struct ToastStack {
    notifications: Vec<Notification>,
    on_dismiss: Rc<dyn Fn(u64, &mut Window, &mut App)>,
}

impl ToastStack {
    pub fn new(notifications: Vec<Notification>, on_dismiss: impl Fn(u64, &mut Window, &mut App) + 'static) -> Self {
        Self {
            notifications,
            on_dismiss: Rc::new(on_dismiss),
        }
    }
}

impl RenderOnce for ToastStack {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();
        let toasts = self.notifications.into_iter().map(|notification| {
            let (icon, color) = match notification.level {
                NotificationLevel::Info => (IconName::Info, theme.info),
                NotificationLevel::Success => (IconName::CircleCheck, theme.success),
                NotificationLevel::Warning => (IconName::TriangleAlert, theme.warning),
                NotificationLevel::Error => (IconName::CircleX, theme.danger),
            };
            let on_dismiss = self.on_dismiss.clone();
            let id = notification.id;

            h_flex()
                .w(px(340.0))
                .p_3()
                .gap_2()
                .items_start()
                .rounded_md()
                .border_1()
                .border_color(color.opacity(0.5))
                .bg(theme.background)
                .shadow_md()
                .child(gpui_component::Icon::new(icon).text_color(color))
                .child(
                    div()
                        .flex_1()
                        .child(Label::new(notification.message).text_sm()),
                )
                .child(
                    Button::new(("dismiss-toast", id as usize))
                        .ghost()
                        .xsmall()
                        .icon(IconName::Close)
                        .on_click(move |_, window, cx| on_dismiss(id, window, cx)),
                )
        });

        v_flex()
            .absolute()
            .bottom_4()
            .right_4()
            .gap_2()
            .items_end()
            .children(toasts)
    }
}
