//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds, WindowOptions, px, size,
};
use gpui_component::Root;
use tracing::{error, info};

use crate::app::workspace::{Workspace, apply_theme};
use crate::assets::Assets;
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::helpers::{MenuAction, new_key_bindings};
use crate::services::{ApiConfig, ServiceHub};
use crate::states::{AdminAppState, AdminGlobalStore, NotificationState, save_app_state};

/// Run the storefront admin application
pub fn run_app() {
    Application::new().with_assets(Assets).run(|cx: &mut App| {
        gpui_component::init(cx);
        cx.bind_keys(new_key_bindings());
        cx.on_action(|_: &MenuAction, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let app_state = AdminAppState::try_load().unwrap_or_else(|e| {
            error!(error = %e, "Failed to load app state, using defaults");
            AdminAppState::new()
        });

        let services = match ServiceHub::new(app_state.api_config()) {
            Ok(services) => services,
            Err(e) => {
                error!(error = %e, "Invalid API settings, falling back to defaults");
                match ServiceHub::new(ApiConfig::default()) {
                    Ok(services) => services,
                    Err(e) => {
                        error!(error = %e, "Failed to create HTTP client");
                        cx.quit();
                        return;
                    }
                }
            }
        };

        let bounds = app_state
            .bounds()
            .copied()
            .unwrap_or_else(|| Bounds::centered(None, size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)), cx));
        let theme = app_state.theme();

        let app_state = cx.new(|_| app_state);
        let notifications = cx.new(|_| NotificationState::new());
        cx.set_global(AdminGlobalStore::new(app_state, notifications, services));

        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("Storefront Admin")),
                appears_transparent: true,
                traffic_light_position: Some(gpui::point(px(9.0), px(9.0))),
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            apply_theme(theme, window, cx);

            // Remember where the window was
            window.on_window_should_close(cx, |window, cx| {
                let bounds = window.bounds();
                let store = cx.global::<AdminGlobalStore>().clone();
                let state = store.update(cx, |state, _| {
                    state.set_bounds(bounds);
                    state.clone()
                });
                if let Err(e) = save_app_state(&state) {
                    error!(error = %e, "Failed to save window bounds");
                }
                true
            });

            let workspace = cx.new(|cx| Workspace::new(window, cx));
            cx.new(|cx| Root::new(workspace, window, cx))
        });

        match opened {
            Ok(_) => info!("Main window opened"),
            Err(e) => {
                error!(error = %e, "Failed to open main window");
                cx.quit();
            }
        }

        cx.activate(true);
    });
}
