//! Internationalization Helpers
//!
//! Translate keys in one namespace using the locale from the app state.

use super::AdminGlobalStore;
use gpui::{App, SharedString};
use rust_i18n::t;

fn translate(cx: &App, namespace: &str, key: &str) -> SharedString {
    let locale = cx.global::<AdminGlobalStore>().read(cx).locale();
    t!(format!("{namespace}.{key}"), locale = locale).into()
}

/// Get translated string from "common" namespace
pub fn i18n_common(cx: &App, key: &str) -> SharedString {
    translate(cx, "common", key)
}

/// Get translated string from "sidebar" namespace
pub fn i18n_sidebar(cx: &App, key: &str) -> SharedString {
    translate(cx, "sidebar", key)
}

/// Table column headers
pub fn i18n_columns(cx: &App, key: &str) -> SharedString {
    translate(cx, "columns", key)
}

/// Data table chrome
pub fn i18n_table(cx: &App, key: &str) -> SharedString {
    translate(cx, "table", key)
}

/// Page titles of the resource lists
pub fn i18n_resources(cx: &App, key: &str) -> SharedString {
    translate(cx, "resources", key)
}

/// Bulk category editor
pub fn i18n_editor(cx: &App, key: &str) -> SharedString {
    translate(cx, "editor", key)
}

/// Get translated string from "settings" namespace
pub fn i18n_settings(cx: &App, key: &str) -> SharedString {
    translate(cx, "settings", key)
}

/// Custom request form
pub fn i18n_request(cx: &App, key: &str) -> SharedString {
    translate(cx, "request", key)
}

/// Format a translated string with arguments
///
/// ```ignore
/// // "range" = "%{first}-%{last} of %{total}"
/// i18n_format(cx, "table.range", &[("first", "1"), ("last", "10"), ("total", "25")])
/// ```
pub fn i18n_format(cx: &App, key: &str, args: &[(&str, &str)]) -> SharedString {
    let locale = cx.global::<AdminGlobalStore>().read(cx).locale();
    let mut result = t!(key, locale = locale).to_string();

    for (name, value) in args {
        result = result.replace(&format!("%{{{name}}}"), value);
    }

    result.into()
}
