//! Application State
//!
//! Global application state: routing, theme, locale, API connection
//! settings and window bounds. Persisted to `storefront-admin.toml`.

use crate::constants::{DEFAULT_API_BASE_URL, DEFAULT_ITEMS_PER_PAGE, HTTP_TIMEOUT_SECS, MAX_ITEMS_PER_PAGE};
use crate::domain::Location;
use crate::error::Result;
use crate::helpers::{decrypt, encrypt, get_or_create_config_dir};
use crate::services::{ApiConfig, ServiceHub};
use crate::states::NotificationState;
use gpui::{Action, App, AppContext, Bounds, Context, Entity, Global, Pixels};
use gpui_component::ThemeMode;
use locale_config::Locale;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info, warn};

/// Application routes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    #[default]
    Products,
    Gallery,
    Requests,
    Orders,
    Categories,
    SubCategories,
    Team,
    Ads,
    /// Storefront form for a new custom request
    NewRequest,
    Settings,
}

impl Route {
    /// Sidebar order
    pub const ALL: [Route; 10] = [
        Route::Products,
        Route::Gallery,
        Route::Requests,
        Route::Orders,
        Route::Categories,
        Route::SubCategories,
        Route::Team,
        Route::Ads,
        Route::NewRequest,
        Route::Settings,
    ];

    /// Translation key in the `sidebar` namespace
    pub fn label_key(self) -> &'static str {
        match self {
            Route::Products => "products",
            Route::Gallery => "gallery",
            Route::Requests => "requests",
            Route::Orders => "orders",
            Route::Categories => "categories",
            Route::SubCategories => "sub_categories",
            Route::Team => "team",
            Route::Ads => "ads",
            Route::NewRequest => "new_request",
            Route::Settings => "settings",
        }
    }
}

// ==================== Actions ====================

/// Theme selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum ThemeAction {
    Light,
    Dark,
    System,
}

/// Locale selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum LocaleAction {
    En,
    Zh,
}

// ==================== Persisted State ====================

const LIGHT_THEME_MODE: &str = "light";
const DARK_THEME_MODE: &str = "dark";
const CONFIG_FILE: &str = "storefront-admin.toml";

fn get_config_path() -> Result<PathBuf> {
    let path = get_or_create_config_dir()?.join(CONFIG_FILE);
    if !path.exists() {
        std::fs::write(&path, "")?;
    }
    Ok(path)
}

/// Persisted application state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdminAppState {
    route: Route,
    locale: Option<String>,
    bounds: Option<Bounds<Pixels>>,
    theme: Option<String>,
    api_base_url: Option<String>,
    /// Encrypted with [`encrypt`]; never stored in plain text
    api_key: Option<String>,
    items_per_page: Option<u32>,
    /// Used as the precise tier of location detection
    location: Option<Location>,
}

impl AdminAppState {
    /// Load state from the config file
    pub fn try_load() -> Result<Self> {
        let path = get_config_path()?;
        info!(path = ?path, "Loading config file");
        let value = std::fs::read_to_string(&path)?;

        let mut state: Self = if value.trim().is_empty() {
            Self::new()
        } else {
            toml::from_str(&value).map_err(|e| {
                error!(error = %e, path = ?path, "Failed to parse config file");
                e
            })?
        };

        if state.locale.as_ref().is_none_or(|l| l.is_empty()) {
            if let Some((lang, _)) = Locale::current().to_string().split_once('-') {
                state.locale = Some(lang.to_string());
            }
        }

        state.route = Route::default();
        Ok(state)
    }

    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn bounds(&self) -> Option<&Bounds<Pixels>> {
        self.bounds.as_ref()
    }

    pub fn theme(&self) -> Option<ThemeMode> {
        match self.theme.as_deref() {
            Some(LIGHT_THEME_MODE) => Some(ThemeMode::Light),
            Some(DARK_THEME_MODE) => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn locale(&self) -> &str {
        self.locale.as_deref().unwrap_or("en")
    }

    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Decrypted API key; an undecryptable value is treated as absent
    pub fn api_key(&self) -> Option<String> {
        let sealed = self.api_key.as_deref()?;
        match decrypt(sealed) {
            Ok(key) => Some(key),
            Err(e) => {
                warn!(error = %e, "Stored API key could not be decrypted");
                None
            }
        }
    }

    pub fn items_per_page(&self) -> u32 {
        self.items_per_page
            .unwrap_or(DEFAULT_ITEMS_PER_PAGE)
            .clamp(1, MAX_ITEMS_PER_PAGE)
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    /// Client settings derived from the stored preferences
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.api_base_url().to_string(),
            api_key: self.api_key(),
            timeout: Duration::from_secs(HTTP_TIMEOUT_SECS),
        }
    }

    // ==================== Setters ====================

    pub fn go_to(&mut self, route: Route, cx: &mut Context<Self>) {
        if self.route != route {
            self.route = route;
            cx.notify();
        }
    }

    pub fn set_bounds(&mut self, bounds: Bounds<Pixels>) {
        self.bounds = Some(bounds);
    }

    pub fn set_theme(&mut self, theme: Option<ThemeMode>) {
        self.theme = match theme {
            Some(ThemeMode::Light) => Some(LIGHT_THEME_MODE.to_string()),
            Some(ThemeMode::Dark) => Some(DARK_THEME_MODE.to_string()),
            _ => None,
        };
    }

    pub fn set_locale(&mut self, locale: String) {
        self.locale = Some(locale);
    }

    pub fn set_api_base_url(&mut self, url: String) {
        let url = url.trim().to_string();
        self.api_base_url = (!url.is_empty()).then_some(url);
    }

    /// Store the key encrypted; an empty key removes it
    pub fn set_api_key(&mut self, key: &str) -> Result<()> {
        self.api_key = if key.is_empty() {
            None
        } else {
            Some(encrypt(key)?)
        };
        Ok(())
    }

    pub fn set_items_per_page(&mut self, items_per_page: u32) {
        self.items_per_page = Some(items_per_page.clamp(1, MAX_ITEMS_PER_PAGE));
    }

    pub fn set_location(&mut self, location: Option<Location>) {
        self.location = location;
    }
}

// ==================== Global Store ====================

/// Global store accessible via `cx.global::<AdminGlobalStore>()`
#[derive(Clone)]
pub struct AdminGlobalStore {
    app_state: Entity<AdminAppState>,
    notifications: Entity<NotificationState>,
    services: ServiceHub,
}

impl AdminGlobalStore {
    pub fn new(
        app_state: Entity<AdminAppState>,
        notifications: Entity<NotificationState>,
        services: ServiceHub,
    ) -> Self {
        Self {
            app_state,
            notifications,
            services,
        }
    }

    pub fn app_state(&self) -> Entity<AdminAppState> {
        self.app_state.clone()
    }

    pub fn notifications(&self) -> Entity<NotificationState> {
        self.notifications.clone()
    }

    pub fn services(&self) -> &ServiceHub {
        &self.services
    }

    pub fn read<'a>(&self, cx: &'a App) -> &'a AdminAppState {
        self.app_state.read(cx)
    }

    pub fn update<R, C: AppContext>(
        &self,
        cx: &mut C,
        update: impl FnOnce(&mut AdminAppState, &mut Context<AdminAppState>) -> R,
    ) -> C::Result<R> {
        self.app_state.update(cx, update)
    }

    pub fn value(&self, cx: &App) -> AdminAppState {
        self.app_state.read(cx).clone()
    }
}

impl Global for AdminGlobalStore {}

// ==================== Persistence ====================

/// Save app state to disk
pub fn save_app_state(state: &AdminAppState) -> Result<()> {
    let path = get_config_path()?;
    let value = toml::to_string(state)?;
    std::fs::write(path, value)?;
    Ok(())
}

/// Apply `mutation` to the app state, then write it to disk in the background
pub fn update_app_state_and_save<F>(cx: &App, action_name: &'static str, mutation: F)
where
    F: FnOnce(&mut AdminAppState, &App) + Send + 'static,
{
    let store = cx.global::<AdminGlobalStore>().clone();

    cx.spawn(async move |cx| {
        let current_state = store.update(cx, |state, cx| {
            mutation(state, cx);
            cx.notify();
            state.clone()
        });

        if let Ok(state) = current_state {
            cx.background_executor()
                .spawn(async move {
                    if let Err(e) = save_app_state(&state) {
                        error!(error = %e, action = action_name, "Failed to save state");
                    } else {
                        info!(action = action_name, "State saved");
                    }
                })
                .await;
        }

        cx.update(|cx| cx.refresh_windows()).ok();
    })
    .detach();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_round_trips_encrypted() {
        let mut state = AdminAppState::new();
        state.set_api_key("sk_test_42").unwrap();
        let stored = toml::to_string(&state).unwrap();
        assert!(!stored.contains("sk_test_42"));

        let loaded: AdminAppState = toml::from_str(&stored).unwrap();
        assert_eq!(loaded.api_key().as_deref(), Some("sk_test_42"));
        assert_eq!(loaded.api_config().api_key.as_deref(), Some("sk_test_42"));
    }

    #[test]
    fn test_defaults() {
        let state = AdminAppState::new();
        assert_eq!(state.api_base_url(), DEFAULT_API_BASE_URL);
        assert_eq!(state.items_per_page(), DEFAULT_ITEMS_PER_PAGE);
        assert_eq!(state.locale(), "en");
        assert!(state.api_key().is_none());
    }

    #[test]
    fn test_items_per_page_is_clamped() {
        let mut state = AdminAppState::new();
        state.set_items_per_page(0);
        assert_eq!(state.items_per_page(), 1);
        state.set_items_per_page(10_000);
        assert_eq!(state.items_per_page(), MAX_ITEMS_PER_PAGE);
    }

    #[test]
    fn test_blank_base_url_falls_back_to_default() {
        let mut state = AdminAppState::new();
        state.set_api_base_url("   ".into());
        assert_eq!(state.api_base_url(), DEFAULT_API_BASE_URL);
    }
}
