//! Sidebar Navigation Component
//!
//! Fixed-width navigation sidebar with one button per route.

use crate::constants::SIDEBAR_WIDTH;
use crate::states::{AdminGlobalStore, Route, i18n_sidebar};
use gpui::{Context, Subscription, Window, div, prelude::*, px};
use gpui_component::{
    ActiveTheme, Icon, IconName,
    button::{Button, ButtonVariants},
    label::Label,
    tooltip::Tooltip,
    v_flex,
};

fn route_icon(route: Route) -> IconName {
    match route {
        Route::Products => IconName::LayoutDashboard,
        Route::Gallery => IconName::GalleryVerticalEnd,
        Route::Requests => IconName::Inbox,
        Route::Orders => IconName::BookOpen,
        Route::Categories => IconName::Frame,
        Route::SubCategories => IconName::PanelLeft,
        Route::Team => IconName::CircleUser,
        Route::Ads => IconName::Star,
        Route::NewRequest => IconName::Plus,
        Route::Settings => IconName::Settings,
    }
}

/// Sidebar navigation component
pub struct AdminSidebar {
    /// Current route for highlighting
    current_route: Route,
    _subscriptions: Vec<Subscription>,
}

impl AdminSidebar {
    pub fn new(_window: &mut Window, cx: &mut Context<Self>) -> Self {
        let store = cx.global::<AdminGlobalStore>();
        let app_state = store.app_state();
        let current_route = store.read(cx).route();

        // Subscribe to route changes
        let subscriptions = vec![cx.observe(&app_state, |this, model, cx| {
            let route = model.read(cx).route();
            if this.current_route != route {
                this.current_route = route;
            }
            // locale changes re-render the labels
            cx.notify();
        })];

        Self {
            current_route,
            _subscriptions: subscriptions,
        }
    }

    /// Render a navigation button
    fn render_nav_button(&self, index: usize, route: Route, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let is_active = self.current_route == route;
        let label = i18n_sidebar(cx, route.label_key());
        let tooltip_label = label.clone();
        let list_active = cx.theme().list_active;
        let list_active_border = cx.theme().list_active_border;

        let btn = Button::new(("nav", index))
            .ghost()
            .w_full()
            .h(px(56.0))
            .child(
                v_flex()
                    .items_center()
                    .justify_center()
                    .gap_1()
                    .child(Icon::new(route_icon(route)))
                    .child(Label::new(label).text_xs().text_ellipsis().max_w(px(SIDEBAR_WIDTH - 8.0))),
            )
            .on_click(move |_, _, cx| {
                cx.update_global::<AdminGlobalStore, ()>(|store, cx| {
                    store.update(cx, |state, cx| {
                        state.go_to(route, cx);
                    });
                });
            });

        div()
            .id(("nav-item", index))
            .tooltip(move |window, cx| Tooltip::new(tooltip_label.clone()).build(window, cx))
            .when(is_active, |this| {
                this.bg(list_active)
                    .border_r_2()
                    .border_color(list_active_border)
            })
            .child(btn)
    }
}

impl Render for AdminSidebar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let border_color = cx.theme().border;
        let sidebar_bg = cx.theme().sidebar;

        let mut items = Vec::new();
        let mut settings = None;
        for (index, route) in Route::ALL.into_iter().enumerate() {
            let button = self.render_nav_button(index, route, cx);
            if route == Route::Settings {
                settings = Some(button);
            } else {
                items.push(button);
            }
        }

        v_flex()
            .id("sidebar")
            .w(px(SIDEBAR_WIDTH))
            .h_full()
            .flex_none()
            .border_r_1()
            .border_color(border_color)
            .bg(sidebar_bg)
            // Navigation items
            .child(
                v_flex()
                    .id("sidebar-routes")
                    .flex_1()
                    .pt_2()
                    .overflow_y_scroll()
                    .children(items),
            )
            // Settings button at bottom
            .child(
                div()
                    .border_t_1()
                    .border_color(border_color)
                    .children(settings),
            )
    }
}
