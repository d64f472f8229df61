//! Store Settings State
//!
//! Remote store settings (`GET`/`PUT /settings`).

use crate::domain::StoreSettings;
use crate::services::run_in_tokio;
use crate::states::{AdminGlobalStore, NotificationLevel, i18n_settings, notify};
use gpui::Context;
use std::sync::Arc;
use validator::Validate;

#[derive(Debug, Clone, Default)]
pub enum SettingsLoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error(Arc<str>),
}

#[derive(Default)]
pub struct StoreSettingsState {
    settings: Option<StoreSettings>,
    load_state: SettingsLoadState,
    saving: bool,
}

impl StoreSettingsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn settings(&self) -> Option<&StoreSettings> {
        self.settings.as_ref()
    }

    pub fn load_state(&self) -> &SettingsLoadState {
        &self.load_state
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn load(&mut self, cx: &mut Context<Self>) {
        self.load_state = SettingsLoadState::Loading;
        cx.notify();
        let api = cx.global::<AdminGlobalStore>().services().api();

        cx.spawn(async move |this, cx| {
            let result = run_in_tokio(async move { api.fetch_settings().await }).await;
            let _ = this.update(cx, |state, cx| {
                match result {
                    Ok(settings) => {
                        state.settings = Some(settings);
                        state.load_state = SettingsLoadState::Loaded;
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to load store settings");
                        state.load_state = SettingsLoadState::Error(e.to_string().into());
                    }
                }
                cx.notify();
            });
        })
        .detach();
    }

    /// Validate and store `settings` remotely
    pub fn save(&mut self, settings: StoreSettings, cx: &mut Context<Self>) {
        if self.saving {
            return;
        }
        if let Err(errors) = settings.validate() {
            let message = format!("{}: {errors}", i18n_settings(cx, "invalid"));
            notify(cx, NotificationLevel::Warning, message);
            return;
        }

        self.saving = true;
        cx.notify();
        let api = cx.global::<AdminGlobalStore>().services().api();
        let body = settings.clone();

        cx.spawn(async move |this, cx| {
            let result = run_in_tokio(async move { api.save_settings(&body).await }).await;
            let ok = result.is_ok();

            let _ = cx.update(|cx| {
                let (level, message) = match &result {
                    Ok(()) => (NotificationLevel::Success, i18n_settings(cx, "store_saved").to_string()),
                    Err(e) => (
                        NotificationLevel::Error,
                        format!("{}: {e}", i18n_settings(cx, "store_save_failed")),
                    ),
                };
                notify(cx, level, message);
            });

            let _ = this.update(cx, |state, cx| {
                state.saving = false;
                if ok {
                    state.settings = Some(settings);
                }
                cx.notify();
            });
        })
        .detach();
    }
}
