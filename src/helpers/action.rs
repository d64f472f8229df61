//! Keyboard Actions and Shortcuts
//!
//! Defines global keyboard shortcuts and action dispatching.

use crate::states::Route;
use gpui::{Action, KeyBinding};
use schemars::JsonSchema;
use serde::Deserialize;

/// Key context of the resource list pages
pub const TABLE_CONTEXT: &str = "ResourceList";

/// Menu actions (application-level)
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum MenuAction {
    /// Quit the application
    Quit,
}

/// Navigation actions
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum NavAction {
    Products,
    Gallery,
    Requests,
    Orders,
    Categories,
    SubCategories,
    Team,
    Ads,
    NewRequest,
    Settings,
}

impl NavAction {
    pub fn route(self) -> Route {
        match self {
            NavAction::Products => Route::Products,
            NavAction::Gallery => Route::Gallery,
            NavAction::Requests => Route::Requests,
            NavAction::Orders => Route::Orders,
            NavAction::Categories => Route::Categories,
            NavAction::SubCategories => Route::SubCategories,
            NavAction::Team => Route::Team,
            NavAction::Ads => Route::Ads,
            NavAction::NewRequest => Route::NewRequest,
            NavAction::Settings => Route::Settings,
        }
    }
}

/// Table actions, bound inside [`TABLE_CONTEXT`]
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum TableKeyAction {
    NextPage,
    PreviousPage,
    SelectAll,
    DeleteSelected,
    Refresh,
}

/// Convert a keystroke string to human-readable format
///
/// Platform-specific formatting:
/// - macOS: ⌘ for cmd, ⌥ for alt, ⇧ for shift
/// - Others: Ctrl+, Alt+, Shift+
pub fn humanize_keystroke(keystroke: &str) -> String {
    #[cfg(target_os = "macos")]
    let (separator, secondary, alt, shift) = ("", "⌘", "⌥", "⇧");
    #[cfg(not(target_os = "macos"))]
    let (separator, secondary, alt, shift) = ("+", "Ctrl", "Alt", "Shift");

    keystroke
        .split('-')
        .map(|part| match part {
            "secondary" | "cmd" | "ctrl" => secondary.to_string(),
            "alt" => alt.to_string(),
            "shift" => shift.to_string(),
            "enter" => "Enter".to_string(),
            "escape" => "Esc".to_string(),
            "backspace" => "Backspace".to_string(),
            "left" => "←".to_string(),
            "right" => "→".to_string(),
            c => c.to_uppercase(),
        })
        .collect::<Vec<_>>()
        .join(separator)
}

/// Create global keyboard bindings
pub fn new_key_bindings() -> Vec<KeyBinding> {
    vec![
        // Application
        KeyBinding::new("secondary-q", MenuAction::Quit, None),
        // Navigation
        KeyBinding::new("secondary-1", NavAction::Products, None),
        KeyBinding::new("secondary-2", NavAction::Gallery, None),
        KeyBinding::new("secondary-3", NavAction::Requests, None),
        KeyBinding::new("secondary-4", NavAction::Orders, None),
        KeyBinding::new("secondary-5", NavAction::Categories, None),
        KeyBinding::new("secondary-6", NavAction::SubCategories, None),
        KeyBinding::new("secondary-7", NavAction::Team, None),
        KeyBinding::new("secondary-8", NavAction::Ads, None),
        KeyBinding::new("secondary-n", NavAction::NewRequest, None),
        KeyBinding::new("secondary-,", NavAction::Settings, None),
        // Tables
        KeyBinding::new("alt-right", TableKeyAction::NextPage, Some(TABLE_CONTEXT)),
        KeyBinding::new("alt-left", TableKeyAction::PreviousPage, Some(TABLE_CONTEXT)),
        KeyBinding::new("secondary-a", TableKeyAction::SelectAll, Some(TABLE_CONTEXT)),
        KeyBinding::new("secondary-backspace", TableKeyAction::DeleteSelected, Some(TABLE_CONTEXT)),
        KeyBinding::new("secondary-r", TableKeyAction::Refresh, Some(TABLE_CONTEXT)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_has_a_nav_action() {
        let actions = [
            NavAction::Products,
            NavAction::Gallery,
            NavAction::Requests,
            NavAction::Orders,
            NavAction::Categories,
            NavAction::SubCategories,
            NavAction::Team,
            NavAction::Ads,
            NavAction::NewRequest,
            NavAction::Settings,
        ];
        let routes: Vec<Route> = actions.iter().map(|a| a.route()).collect();
        assert_eq!(routes, Route::ALL.to_vec());
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn test_humanize_keystroke() {
        assert_eq!(humanize_keystroke("secondary-r"), "Ctrl+R");
        assert_eq!(humanize_keystroke("alt-right"), "Alt+→");
    }
}
