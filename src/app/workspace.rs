//! Workspace - Main Shell with Layout and Toast Overlay
//!
//! The workspace is the root view holding the title bar, sidebar and content
//! area. It handles the global navigation, theme and locale actions and
//! draws the notification queue on top of everything else.

use gpui::{App, Context, Entity, FocusHandle, Subscription, Window, div, prelude::*};
use gpui_component::{ActiveTheme, Theme, ThemeMode, h_flex, v_flex};

use crate::components::composite::toast::ToastStack;
use crate::helpers::NavAction;
use crate::states::{
    AdminGlobalStore, LocaleAction, NotificationState, ThemeAction, update_app_state_and_save,
};
use crate::views::{AdminContent, AdminSidebar, AdminTitleBar};

/// Main workspace containing the application layout
pub struct Workspace {
    title_bar: Entity<AdminTitleBar>,
    sidebar: Entity<AdminSidebar>,
    content: Entity<AdminContent>,
    notifications: Entity<NotificationState>,
    focus_handle: FocusHandle,
    _subscriptions: Vec<Subscription>,
}

impl Workspace {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let title_bar = cx.new(|cx| AdminTitleBar::new(window, cx));
        let sidebar = cx.new(|cx| AdminSidebar::new(window, cx));
        let content = cx.new(|cx| AdminContent::new(window, cx));
        let store = cx.global::<AdminGlobalStore>();
        let notifications = store.notifications();
        let app_state = store.app_state();

        let subscriptions = vec![
            cx.observe(&notifications, |_, _, cx| cx.notify()),
            // Title bar shows the current page and API host
            cx.observe(&app_state, |this, _, cx| this.title_bar.update(cx, |_, cx| cx.notify())),
        ];

        let focus_handle = cx.focus_handle();
        focus_handle.focus(window);

        Self {
            title_bar,
            sidebar,
            content,
            notifications,
            focus_handle,
            _subscriptions: subscriptions,
        }
    }

    fn on_nav_action(&mut self, action: &NavAction, _window: &mut Window, cx: &mut Context<Self>) {
        let route = action.route();
        cx.update_global::<AdminGlobalStore, ()>(|store, cx| {
            store.update(cx, |state, cx| state.go_to(route, cx));
        });
    }

    fn on_theme_action(&mut self, action: &ThemeAction, window: &mut Window, cx: &mut Context<Self>) {
        let mode = match action {
            ThemeAction::Light => Some(ThemeMode::Light),
            ThemeAction::Dark => Some(ThemeMode::Dark),
            ThemeAction::System => None,
        };
        apply_theme(mode, window, cx);
        update_app_state_and_save(cx, "save_theme", move |state, _| state.set_theme(mode));
    }

    fn on_locale_action(&mut self, action: &LocaleAction, _window: &mut Window, cx: &mut Context<Self>) {
        let locale = match action {
            LocaleAction::En => "en",
            LocaleAction::Zh => "zh",
        };
        update_app_state_and_save(cx, "save_locale", move |state, _| state.set_locale(locale.to_string()));
    }
}

/// `None` follows the system appearance
pub fn apply_theme(mode: Option<ThemeMode>, window: &mut Window, cx: &mut App) {
    match mode {
        Some(mode) => Theme::change(mode, Some(window), cx),
        None => Theme::sync_system_appearance(Some(window), cx),
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let toasts: Vec<_> = self.notifications.read(cx).notifications().cloned().collect();
        let notifications = self.notifications.clone();

        v_flex()
            .id("workspace")
            .key_context("Workspace")
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::on_nav_action))
            .on_action(cx.listener(Self::on_theme_action))
            .on_action(cx.listener(Self::on_locale_action))
            .relative()
            .size_full()
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .child(self.title_bar.clone())
            .child(
                h_flex()
                    .flex_1()
                    .overflow_hidden()
                    .child(self.sidebar.clone())
                    .child(div().flex_1().h_full().overflow_hidden().child(self.content.clone())),
            )
            .when(!toasts.is_empty(), |this| {
                this.child(ToastStack::new(toasts, move |id, _window, cx| {
                    notifications.update(cx, |state, cx| state.dismiss(id, cx));
                }))
            })
    }
}
