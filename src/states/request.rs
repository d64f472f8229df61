//! Custom Request State
//!
//! Location detection and submission for the storefront request form. The
//! form fields themselves live in the view's inputs; this entity reports
//! back through [`RequestFormEvent`].

use crate::domain::{Location, NewCustomRequest};
use crate::services::run_in_tokio;
use crate::states::{AdminGlobalStore, NotificationLevel, i18n_request, notify};
use gpui::{Context, EventEmitter};
use validator::Validate;

#[derive(Debug, Clone, PartialEq)]
pub enum RequestFormEvent {
    /// Fill country and coordinates
    LocationDetected(Location),
    /// Detection failed; location fields stay blank
    LocationFailed,
    /// The API accepted the request; the form can be cleared
    Submitted,
}

#[derive(Debug, Default)]
pub struct RequestFormState {
    detecting: bool,
    submitting: bool,
}

impl EventEmitter<RequestFormEvent> for RequestFormState {}

impl RequestFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_detecting(&self) -> bool {
        self.detecting
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Configured coordinates first, then the IP lookup
    pub fn detect_location(&mut self, cx: &mut Context<Self>) {
        if self.detecting {
            return;
        }
        self.detecting = true;
        cx.notify();

        let store = cx.global::<AdminGlobalStore>();
        let hub = store.services().clone();
        let configured = store.read(cx).location().cloned();

        cx.spawn(async move |this, cx| {
            let result = run_in_tokio(async move { hub.detect_location(configured).await }).await;

            if let Err(message) = &result {
                let message = message.clone();
                let _ = cx.update(|cx| {
                    let label = i18n_request(cx, "location_failed");
                    notify(cx, NotificationLevel::Warning, format!("{label}: {message}"));
                });
            }

            let _ = this.update(cx, |state, cx| {
                state.detecting = false;
                match result {
                    Ok(location) => {
                        tracing::info!(country = %location.country, "Location detected");
                        cx.emit(RequestFormEvent::LocationDetected(location));
                    }
                    Err(_) => cx.emit(RequestFormEvent::LocationFailed),
                }
                cx.notify();
            });
        })
        .detach();
    }

    /// Validate, then `POST /requests`
    pub fn submit(&mut self, request: NewCustomRequest, cx: &mut Context<Self>) {
        if self.submitting {
            return;
        }
        if let Err(errors) = request.validate() {
            tracing::debug!(error = %errors, "Request form rejected locally");
            let message = format!("{}: {errors}", i18n_request(cx, "invalid"));
            notify(cx, NotificationLevel::Warning, message);
            return;
        }

        self.submitting = true;
        cx.notify();
        let api = cx.global::<AdminGlobalStore>().services().api();

        cx.spawn(async move |this, cx| {
            let result = run_in_tokio(async move { api.submit_request(&request).await }).await;
            let ok = result.is_ok();

            let _ = cx.update(|cx| {
                let (level, message) = match &result {
                    Ok(()) => (NotificationLevel::Success, i18n_request(cx, "submitted").to_string()),
                    Err(e) => (
                        NotificationLevel::Error,
                        format!("{}: {e}", i18n_request(cx, "submit_failed")),
                    ),
                };
                notify(cx, level, message);
            });

            let _ = this.update(cx, |state, cx| {
                state.submitting = false;
                if ok {
                    cx.emit(RequestFormEvent::Submitted);
                }
                cx.notify();
            });
        })
        .detach();
    }
}
