//! Storefront Admin Library
//!
//! Back-office client for a storefront REST API: paginated resource tables
//! with selection and bulk actions, a bulk category editor, the custom
//! request form with location detection, and the store settings.

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod assets;
pub mod components;
pub mod constants;
pub mod domain;
pub mod editor;
pub mod error;
pub mod helpers;
pub mod services;
pub mod states;
pub mod table;
pub mod views;
