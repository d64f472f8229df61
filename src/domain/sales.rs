//! Orders and Custom Requests

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use validator::Validate;

use super::Resource;
use crate::table::{Cell, Column, Identifiable, Renderable, Tone};

fn short_date(at: &DateTime<Utc>) -> Cell {
    Cell::muted(at.format("%Y-%m-%d %H:%M").to_string())
}

// ==================== Orders ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Next step of fulfilment; terminal states have none
    pub fn next(self) -> Option<Self> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Processing),
            OrderStatus::Processing => Some(OrderStatus::Shipped),
            OrderStatus::Shipped => Some(OrderStatus::Delivered),
            OrderStatus::Delivered | OrderStatus::Cancelled => None,
        }
    }

    fn tone(self) -> Tone {
        match self {
            OrderStatus::Pending => Tone::Warning,
            OrderStatus::Processing | OrderStatus::Shipped => Tone::Info,
            OrderStatus::Delivered => Tone::Success,
            OrderStatus::Cancelled => Tone::Danger,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u64,
    pub customer_name: String,
    pub email: String,
    pub total: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Identifiable for Order {
    type Id = u64;

    fn row_id(&self) -> u64 {
        self.id
    }
}

impl Renderable for Order {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("id", "id", |o: &Order| Cell::muted(format!("#{}", o.id))).fixed_width(72.0),
            Column::new("customer", "customer", |o: &Order| Cell::text(&o.customer_name)).flex(2.0),
            Column::new("email", "email", |o: &Order| Cell::muted(&o.email)).flex(2.0),
            Column::new("total", "total", |o: &Order| Cell::Money(o.total)).fixed_width(96.0),
            Column::new("status", "status", |o: &Order| {
                Cell::badge(o.status.as_str(), o.status.tone())
            })
            .fixed_width(112.0),
            Column::new("created", "created", |o: &Order| short_date(&o.created_at)).fixed_width(136.0),
        ]
    }
}

impl Resource for Order {
    const PATH: &'static str = "orders";
    const TITLE_KEY: &'static str = "orders";
    const MULTI_SELECT: bool = false;
    const UPDATE_LABEL: Option<&'static str> = Some("advance_status");

    fn quick_update(&self) -> Option<Value> {
        self.status
            .next()
            .map(|next| json!({ "status": next.as_str() }))
    }
}

// ==================== Custom Requests ====================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    #[default]
    New,
    InReview,
    Quoted,
    Closed,
}

impl RequestStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RequestStatus::New => "new",
            RequestStatus::InReview => "in_review",
            RequestStatus::Quoted => "quoted",
            RequestStatus::Closed => "closed",
        }
    }

    pub fn next(self) -> Option<Self> {
        match self {
            RequestStatus::New => Some(RequestStatus::InReview),
            RequestStatus::InReview => Some(RequestStatus::Quoted),
            RequestStatus::Quoted => Some(RequestStatus::Closed),
            RequestStatus::Closed => None,
        }
    }
}

/// A customer's request for a custom-made item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomRequest {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub description: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
}

impl Identifiable for CustomRequest {
    type Id = u64;

    fn row_id(&self) -> u64 {
        self.id
    }
}

impl Renderable for CustomRequest {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("name", "name", |r: &CustomRequest| Cell::text(&r.name)),
            Column::new("email", "email", |r: &CustomRequest| Cell::muted(&r.email)),
            Column::new("description", "description", |r: &CustomRequest| {
                Cell::text(&r.description)
            })
            .flex(3.0),
            Column::new("country", "country", |r: &CustomRequest| {
                Cell::optional(r.country.as_deref())
            }),
            Column::new("status", "status", |r: &CustomRequest| {
                let tone = match r.status {
                    RequestStatus::New => Tone::Warning,
                    RequestStatus::InReview | RequestStatus::Quoted => Tone::Info,
                    RequestStatus::Closed => Tone::Neutral,
                };
                Cell::badge(r.status.as_str(), tone)
            })
            .fixed_width(112.0),
            Column::new("created", "created", |r: &CustomRequest| short_date(&r.created_at))
                .fixed_width(136.0),
        ]
    }
}

impl Resource for CustomRequest {
    const PATH: &'static str = "requests";
    const TITLE_KEY: &'static str = "requests";
    const UPDATE_LABEL: Option<&'static str> = Some("advance_status");

    fn quick_update(&self) -> Option<Value> {
        self.status
            .next()
            .map(|next| json!({ "status": next.as_str() }))
    }
}

/// Body of `POST /requests`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Email is invalid"))]
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude is out of range"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0, message = "Longitude is out of range"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(OrderStatus::Pending, Some(OrderStatus::Processing))]
    #[case(OrderStatus::Shipped, Some(OrderStatus::Delivered))]
    #[case(OrderStatus::Delivered, None)]
    #[case(OrderStatus::Cancelled, None)]
    fn test_order_status_progression(#[case] from: OrderStatus, #[case] to: Option<OrderStatus>) {
        assert_eq!(from.next(), to);
    }

    #[test]
    fn test_order_quick_update_patches_next_status() {
        let order: Order = serde_json::from_value(json!({
            "id": 9,
            "customerName": "Ada",
            "email": "ada@example.com",
            "total": 40.0,
            "status": "processing",
            "createdAt": "2026-03-01T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(order.quick_update(), Some(json!({ "status": "shipped" })));
    }

    #[test]
    fn test_closed_request_has_no_update() {
        let request: CustomRequest = serde_json::from_value(json!({
            "id": 1,
            "name": "Lin",
            "email": "lin@example.com",
            "description": "Engraved frame",
            "status": "closed",
            "createdAt": "2026-03-01T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(request.quick_update(), None);
    }

    #[test]
    fn test_new_request_validation() {
        let mut request = NewCustomRequest {
            name: "Lin".into(),
            email: "lin@example.com".into(),
            description: "Engraved frame".into(),
            latitude: Some(48.8),
            longitude: Some(2.35),
            ..Default::default()
        };
        assert!(request.validate().is_ok());

        request.email = "lin".into();
        request.latitude = Some(120.0);
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
        assert!(errors.field_errors().contains_key("latitude"));
    }

    #[test]
    fn test_new_request_omits_missing_optionals() {
        let body = serde_json::to_value(NewCustomRequest {
            name: "Lin".into(),
            email: "lin@example.com".into(),
            description: "Frame".into(),
            ..Default::default()
        })
        .unwrap();
        assert!(body.get("phone").is_none());
        assert!(body.get("latitude").is_none());
    }
}
