//! Title Bar Component
//!
//! Custom title bar with the language and theme menu.

use crate::states::{AdminGlobalStore, LocaleAction, Route, ThemeAction, i18n_settings, i18n_sidebar};
use gpui::{App, Context, Corner, Window, prelude::*};
use gpui_component::{
    IconName, Sizable, ThemeMode, TitleBar,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    menu::{DropdownMenu, PopupMenu},
};

/// Title bar component
pub struct AdminTitleBar;

impl AdminTitleBar {
    pub fn new(_window: &mut Window, _cx: &mut Context<Self>) -> Self {
        Self
    }

    /// Render the preferences dropdown menu
    fn render_preferences_menu(menu: PopupMenu, _window: &mut Window, cx: &App) -> PopupMenu {
        let store = cx.global::<AdminGlobalStore>().read(cx);
        let (locale, theme) = (store.locale(), store.theme());

        menu
            // Language section
            .label(i18n_settings(cx, "language"))
            .menu_with_check("中文", locale == "zh", Box::new(LocaleAction::Zh))
            .menu_with_check("English", locale == "en", Box::new(LocaleAction::En))
            .separator()
            // Theme section
            .label(i18n_settings(cx, "theme"))
            .menu_with_check(
                i18n_settings(cx, "light"),
                theme == Some(ThemeMode::Light),
                Box::new(ThemeAction::Light),
            )
            .menu_with_check(
                i18n_settings(cx, "dark"),
                theme == Some(ThemeMode::Dark),
                Box::new(ThemeAction::Dark),
            )
            .menu_with_check(
                i18n_settings(cx, "system"),
                theme.is_none(),
                Box::new(ThemeAction::System),
            )
    }
}

impl Render for AdminTitleBar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let store = cx.global::<AdminGlobalStore>().read(cx);
        let base_url = store.api_base_url().to_string();
        let page = i18n_sidebar(cx, store.route().label_key());

        TitleBar::new()
            .child(
                h_flex()
                    .flex_1()
                    .items_center()
                    .gap_2()
                    .pl_4()
                    .child(Label::new("Storefront Admin").text_sm())
                    .child(Label::new("/").text_sm())
                    .child(Label::new(page).text_sm()),
            )
            .child(
                h_flex()
                    .items_center()
                    .justify_end()
                    .px_2()
                    .gap_2()
                    .mr_2()
                    .child(Label::new(base_url).text_xs())
                    .child(
                        Button::new("preferences")
                            .tooltip(i18n_sidebar(cx, Route::Settings.label_key()))
                            .icon(IconName::Settings2)
                            .small()
                            .ghost()
                            .dropdown_menu(move |menu, window, cx| Self::render_preferences_menu(menu, window, cx))
                            .anchor(Corner::TopRight),
                    ),
            )
    }
}
