//! UI Constants
//!
//! Centralized constants for layout, paging and service behaviour.

/// Sidebar navigation width in pixels
pub const SIDEBAR_WIDTH: f32 = 88.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// Table geometry
pub const TABLE_ROW_HEIGHT: f32 = 36.0;
pub const TABLE_HEADER_HEIGHT: f32 = 40.0;
pub const TABLE_SELECT_COLUMN_WIDTH: f32 = 44.0;
pub const TABLE_ACTIONS_COLUMN_WIDTH: f32 = 160.0;

/// Paging
pub const DEFAULT_ITEMS_PER_PAGE: u32 = 10;
pub const MAX_ITEMS_PER_PAGE: u32 = 100;

/// Notification queue
pub const NOTIFICATION_CAPACITY: usize = 5;
pub const NOTIFICATION_TTL_MS: u64 = 4000;
pub const NOTIFICATION_TICK_MS: u64 = 500;

/// HTTP
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:4000/api";
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const IP_LOCATION_URL: &str = "https://ipapi.co/json/";
