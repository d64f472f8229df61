//! Store Administration Entities
//!
//! Team members, advertisements and the remote store settings.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use validator::Validate;

use super::Resource;
use crate::table::{Cell, Column, Identifiable, Renderable, Tone};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: u64,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl Identifiable for TeamMember {
    type Id = u64;

    fn row_id(&self) -> u64 {
        self.id
    }
}

impl Renderable for TeamMember {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("name", "name", |m: &TeamMember| Cell::text(&m.name)).flex(2.0),
            Column::new("role", "role", |m: &TeamMember| Cell::badge(&m.role, Tone::Neutral)),
            Column::new("email", "email", |m: &TeamMember| Cell::optional(m.email.as_deref())).flex(2.0),
        ]
    }
}

impl Resource for TeamMember {
    const PATH: &'static str = "team";
    const TITLE_KEY: &'static str = "team";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advertisement {
    pub id: u64,
    pub title: String,
    pub link: String,
    /// Slot on the storefront, e.g. `hero` or `sidebar`
    pub position: String,
    pub active: bool,
}

impl Identifiable for Advertisement {
    type Id = u64;

    fn row_id(&self) -> u64 {
        self.id
    }
}

impl Renderable for Advertisement {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("title", "title", |a: &Advertisement| Cell::text(&a.title)).flex(2.0),
            Column::new("position", "position", |a: &Advertisement| Cell::muted(&a.position)),
            Column::new("link", "link", |a: &Advertisement| Cell::muted(&a.link)).flex(2.0),
            Column::new("active", "active", |a: &Advertisement| Cell::Flag(a.active)).fixed_width(72.0),
        ]
    }
}

impl Resource for Advertisement {
    const PATH: &'static str = "ads";
    const TITLE_KEY: &'static str = "ads";
    const UPDATE_LABEL: Option<&'static str> = Some("toggle_active");

    fn quick_update(&self) -> Option<Value> {
        Some(json!({ "active": !self.active }))
    }
}

/// Store-wide settings kept by the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StoreSettings {
    #[validate(length(min = 1, message = "Store name is required"))]
    pub store_name: String,
    #[validate(email(message = "Contact email is invalid"))]
    pub contact_email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[validate(length(equal = 3, message = "Currency must be a 3-letter code"))]
    pub currency: String,
    #[serde(default)]
    pub maintenance_mode: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ad_toggle_flips_active() {
        let ad = Advertisement {
            id: 1,
            title: "Spring sale".into(),
            link: "/sale".into(),
            position: "hero".into(),
            active: true,
        };
        assert_eq!(ad.quick_update(), Some(json!({ "active": false })));
    }

    #[test]
    fn test_settings_validation() {
        let mut settings = StoreSettings {
            store_name: "Atelier".into(),
            contact_email: "hello@atelier.shop".into(),
            currency: "EUR".into(),
            ..Default::default()
        };
        assert!(settings.validate().is_ok());

        settings.currency = "EURO".into();
        settings.contact_email = "nope".into();
        let errors = settings.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("currency"));
        assert!(fields.contains_key("contact_email"));
    }
}
