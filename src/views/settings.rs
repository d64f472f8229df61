//! Settings View
//!
//! Local client preferences (API connection, paging, language, theme and
//! fallback coordinates) and the remote store settings.

use crate::components::primitives::checkbox::Checkbox;
use crate::constants::MAX_ITEMS_PER_PAGE;
use crate::components::primitives::field::FormField;
use crate::domain::{Location, StoreSettings};
use crate::helpers::mask_secret;
use crate::states::{
    AdminGlobalStore, LocaleAction, NotificationLevel, SettingsLoadState, StoreSettingsState, ThemeAction,
    i18n_settings, notify, update_app_state_and_save,
};
use gpui::{App, Context, Entity, Subscription, Window, div, prelude::*};
use gpui_component::{
    ActiveTheme, Disableable, ThemeMode,
    button::{Button, ButtonVariants},
    h_flex,
    input::{Input, InputState},
    label::Label,
    v_flex,
};

fn text(input: &Entity<InputState>, cx: &App) -> String {
    input.read(cx).value().trim().to_string()
}

/// Fallback coordinates from the three inputs; all blank clears them
fn parse_location(country: &str, latitude: &str, longitude: &str) -> Result<Option<Location>, ()> {
    if country.is_empty() && latitude.is_empty() && longitude.is_empty() {
        return Ok(None);
    }
    let location = Location {
        country: country.to_string(),
        latitude: latitude.parse().map_err(|_| ())?,
        longitude: longitude.parse().map_err(|_| ())?,
    };
    if location.is_valid() { Ok(Some(location)) } else { Err(()) }
}

struct PreferenceInputs {
    base_url: Entity<InputState>,
    api_key: Entity<InputState>,
    items_per_page: Entity<InputState>,
    country: Entity<InputState>,
    latitude: Entity<InputState>,
    longitude: Entity<InputState>,
}

struct StoreInputs {
    store_name: Entity<InputState>,
    contact_email: Entity<InputState>,
    phone: Entity<InputState>,
    address: Entity<InputState>,
    currency: Entity<InputState>,
}

pub struct SettingsView {
    preferences: PreferenceInputs,
    store_state: Entity<StoreSettingsState>,
    store: StoreInputs,
    maintenance_mode: bool,
    /// Store inputs were filled from the last load
    store_filled: bool,
    _subscriptions: Vec<Subscription>,
}

impl SettingsView {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let app_state = cx.global::<AdminGlobalStore>().value(cx);
        let location = app_state.location().cloned();

        let input = |value: String, window: &mut Window, cx: &mut Context<Self>| {
            cx.new(|cx| InputState::new(window, cx).default_value(value))
        };
        // the stored key is only ever shown masked
        let key_placeholder = match app_state.api_key() {
            Some(key) => mask_secret(&key),
            None => i18n_settings(cx, "api_key_placeholder").to_string(),
        };
        let preferences = PreferenceInputs {
            base_url: input(app_state.api_base_url().to_string(), window, cx),
            api_key: cx.new(|cx| InputState::new(window, cx).masked(true).placeholder(key_placeholder)),
            items_per_page: input(app_state.items_per_page().to_string(), window, cx),
            country: input(location.as_ref().map(|l| l.country.clone()).unwrap_or_default(), window, cx),
            latitude: input(location.as_ref().map(|l| l.latitude.to_string()).unwrap_or_default(), window, cx),
            longitude: input(location.as_ref().map(|l| l.longitude.to_string()).unwrap_or_default(), window, cx),
        };
        let store = StoreInputs {
            store_name: input(String::new(), window, cx),
            contact_email: input(String::new(), window, cx),
            phone: input(String::new(), window, cx),
            address: input(String::new(), window, cx),
            currency: input(String::new(), window, cx),
        };

        let store_state = cx.new(|_| StoreSettingsState::new());
        let app_state = cx.global::<AdminGlobalStore>().app_state();
        let subscriptions = vec![
            cx.observe_in(&store_state, window, |this, state, window, cx| {
                let settings = state.read(cx).settings().cloned();
                if let (false, Some(settings)) = (this.store_filled, settings) {
                    this.fill_store(&settings, window, cx);
                }
                cx.notify();
            }),
            cx.observe(&app_state, |_this, _state, cx| cx.notify()),
        ];
        store_state.update(cx, |state, cx| state.load(cx));

        Self {
            preferences,
            store_state,
            store,
            maintenance_mode: false,
            store_filled: false,
            _subscriptions: subscriptions,
        }
    }

    fn fill_store(&mut self, settings: &StoreSettings, window: &mut Window, cx: &mut Context<Self>) {
        let values = [
            (&self.store.store_name, settings.store_name.clone()),
            (&self.store.contact_email, settings.contact_email.clone()),
            (&self.store.phone, settings.phone.clone()),
            (&self.store.address, settings.address.clone()),
            (&self.store.currency, settings.currency.clone()),
        ];
        for (input, value) in values {
            input.update(cx, |input, cx| input.set_value(value, window, cx));
        }
        self.maintenance_mode = settings.maintenance_mode;
        self.store_filled = true;
    }

    fn save_preferences(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let prefs = &self.preferences;
        let base_url = text(&prefs.base_url, cx);
        let api_key = text(&prefs.api_key, cx);

        let parsed = text(&prefs.items_per_page, cx).parse::<u32>().ok();
        let Some(items_per_page) = parsed.filter(|n| (1..=MAX_ITEMS_PER_PAGE).contains(n)) else {
            let message = i18n_settings(cx, "invalid_items_per_page");
            notify(cx, NotificationLevel::Warning, message);
            return;
        };
        let Ok(location) = parse_location(
            &text(&prefs.country, cx),
            &text(&prefs.latitude, cx),
            &text(&prefs.longitude, cx),
        ) else {
            let message = i18n_settings(cx, "invalid_location");
            notify(cx, NotificationLevel::Warning, message);
            return;
        };

        update_app_state_and_save(cx, "save_preferences", move |state, cx| {
            state.set_api_base_url(base_url);
            if !api_key.is_empty() {
                if let Err(e) = state.set_api_key(&api_key) {
                    tracing::error!(error = %e, "Failed to encrypt API key");
                }
            }
            state.set_items_per_page(items_per_page);
            state.set_location(location);

            let services = cx.global::<AdminGlobalStore>().services();
            if let Err(e) = services.reconfigure(state.api_config()) {
                tracing::error!(error = %e, "Failed to reconfigure API client");
            }
        });

        self.preferences
            .api_key
            .update(cx, |input, cx| input.set_value("", window, cx));
        let message = i18n_settings(cx, "saved");
        notify(cx, NotificationLevel::Success, message);
    }

    fn clear_api_key(&mut self, cx: &mut Context<Self>) {
        update_app_state_and_save(cx, "clear_api_key", |state, cx| {
            if let Err(e) = state.set_api_key("") {
                tracing::error!(error = %e, "Failed to clear API key");
            }
            let services = cx.global::<AdminGlobalStore>().services();
            if let Err(e) = services.reconfigure(state.api_config()) {
                tracing::error!(error = %e, "Failed to reconfigure API client");
            }
        });
    }

    fn save_store(&mut self, cx: &mut Context<Self>) {
        let store = &self.store;
        let settings = StoreSettings {
            store_name: text(&store.store_name, cx),
            contact_email: text(&store.contact_email, cx),
            phone: text(&store.phone, cx),
            address: text(&store.address, cx),
            currency: text(&store.currency, cx).to_uppercase(),
            maintenance_mode: self.maintenance_mode,
        };
        self.store_state.update(cx, |state, cx| state.save(settings, cx));
    }

    fn render_section(title: impl Into<gpui::SharedString>, cx: &App) -> gpui::Div {
        v_flex()
            .w_full()
            .p_4()
            .gap_3()
            .rounded_md()
            .border_1()
            .border_color(cx.theme().border)
            .child(Label::new(title).text_lg())
    }

    fn render_preferences(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let store = cx.global::<AdminGlobalStore>().read(cx);
        let (locale, theme, has_key) = (store.locale().to_string(), store.theme(), store.has_api_key());
        let prefs = &self.preferences;

        let choice = |id: &'static str, label: gpui::SharedString, active: bool| {
            let button = Button::new(id).label(label);
            if active { button.primary() } else { button.ghost() }
        };

        Self::render_section(i18n_settings(cx, "preferences"), cx)
            .child(
                h_flex()
                    .gap_3()
                    .child(FormField::new(i18n_settings(cx, "api_base_url"), Input::new(&prefs.base_url)))
                    .child(FormField::new(i18n_settings(cx, "api_key"), Input::new(&prefs.api_key)))
                    .child(
                        div().pt_5().child(
                            Button::new("clear-api-key")
                                .ghost()
                                .label(i18n_settings(cx, "clear_api_key"))
                                .disabled(!has_key)
                                .on_click(cx.listener(|this, _, _, cx| this.clear_api_key(cx))),
                        ),
                    ),
            )
            .child(
                h_flex()
                    .gap_3()
                    .child(
                        FormField::new(i18n_settings(cx, "items_per_page"), Input::new(&prefs.items_per_page))
                            .width(140.0),
                    )
                    .child(FormField::new(i18n_settings(cx, "fallback_country"), Input::new(&prefs.country)))
                    .child(
                        FormField::new(i18n_settings(cx, "fallback_latitude"), Input::new(&prefs.latitude))
                            .width(140.0),
                    )
                    .child(
                        FormField::new(i18n_settings(cx, "fallback_longitude"), Input::new(&prefs.longitude))
                            .width(140.0),
                    ),
            )
            .child(
                h_flex()
                    .gap_2()
                    .items_center()
                    .child(Label::new(i18n_settings(cx, "language")).text_sm().w_24())
                    .child(
                        choice("locale-en", "English".into(), locale == "en")
                            .on_click(|_, window, cx| window.dispatch_action(Box::new(LocaleAction::En), cx)),
                    )
                    .child(
                        choice("locale-zh", "中文".into(), locale == "zh")
                            .on_click(|_, window, cx| window.dispatch_action(Box::new(LocaleAction::Zh), cx)),
                    ),
            )
            .child(
                h_flex()
                    .gap_2()
                    .items_center()
                    .child(Label::new(i18n_settings(cx, "theme")).text_sm().w_24())
                    .child(
                        choice("theme-light", i18n_settings(cx, "light"), theme == Some(ThemeMode::Light))
                            .on_click(|_, window, cx| window.dispatch_action(Box::new(ThemeAction::Light), cx)),
                    )
                    .child(
                        choice("theme-dark", i18n_settings(cx, "dark"), theme == Some(ThemeMode::Dark))
                            .on_click(|_, window, cx| window.dispatch_action(Box::new(ThemeAction::Dark), cx)),
                    )
                    .child(
                        choice("theme-system", i18n_settings(cx, "system"), theme.is_none())
                            .on_click(|_, window, cx| window.dispatch_action(Box::new(ThemeAction::System), cx)),
                    ),
            )
            .child(
                h_flex().justify_end().child(
                    Button::new("save-preferences")
                        .primary()
                        .label(i18n_settings(cx, "save"))
                        .on_click(cx.listener(|this, _, window, cx| this.save_preferences(window, cx))),
                ),
            )
    }

    fn render_store(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let state = self.store_state.read(cx);
        let (load_state, saving) = (state.load_state().clone(), state.is_saving());
        let store = &self.store;
        let maintenance_mode = self.maintenance_mode;
        let view = cx.entity().downgrade();

        let status = match load_state {
            SettingsLoadState::Loading => Some(i18n_settings(cx, "store_loading").to_string()),
            SettingsLoadState::Error(message) => {
                Some(format!("{}: {message}", i18n_settings(cx, "store_load_failed")))
            }
            SettingsLoadState::Idle | SettingsLoadState::Loaded => None,
        };

        Self::render_section(i18n_settings(cx, "store"), cx)
            .children(status.map(|status| {
                Label::new(status)
                    .text_sm()
                    .text_color(cx.theme().muted_foreground)
            }))
            .child(
                h_flex()
                    .gap_3()
                    .child(FormField::new(i18n_settings(cx, "store_name"), Input::new(&store.store_name)))
                    .child(FormField::new(i18n_settings(cx, "contact_email"), Input::new(&store.contact_email)))
                    .child(FormField::new(i18n_settings(cx, "currency"), Input::new(&store.currency)).width(100.0)),
            )
            .child(
                h_flex()
                    .gap_3()
                    .child(FormField::new(i18n_settings(cx, "phone"), Input::new(&store.phone)))
                    .child(FormField::new(i18n_settings(cx, "address"), Input::new(&store.address))),
            )
            .child(
                Checkbox::new("maintenance-mode")
                    .checked(maintenance_mode)
                    .label(i18n_settings(cx, "maintenance_mode"))
                    .on_change(move |checked, _, cx| {
                        let _ = view.update(cx, |this, cx| {
                            this.maintenance_mode = checked;
                            cx.notify();
                        });
                    }),
            )
            .child(
                h_flex()
                    .justify_end()
                    .gap_2()
                    .child(
                        Button::new("reload-store")
                            .ghost()
                            .label(i18n_settings(cx, "reload"))
                            .on_click(cx.listener(|this, _, _, cx| {
                                this.store_filled = false;
                                this.store_state.update(cx, |state, cx| state.load(cx));
                            })),
                    )
                    .child(
                        Button::new("save-store")
                            .primary()
                            .label(i18n_settings(cx, "save"))
                            .loading(saving)
                            .on_click(cx.listener(|this, _, _, cx| this.save_store(cx))),
                    ),
            )
    }
}

impl Render for SettingsView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .id("settings")
            .size_full()
            .p_4()
            .gap_4()
            .overflow_y_scroll()
            .child(Label::new(i18n_settings(cx, "title")).text_xl())
            .child(self.render_preferences(cx))
            .child(self.render_store(cx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_location_clears_fallback() {
        assert_eq!(parse_location("", "", ""), Ok(None));
    }

    #[test]
    fn test_location_requires_valid_coordinates() {
        assert_eq!(
            parse_location("France", "48.85", "2.35"),
            Ok(Some(Location {
                country: "France".into(),
                latitude: 48.85,
                longitude: 2.35,
            }))
        );
        assert_eq!(parse_location("France", "north", "2.35"), Err(()));
        assert_eq!(parse_location("Nowhere", "95.0", "0.0"), Err(()));
    }
}
