//! Custom Request Form
//!
//! Storefront form for a new custom request. "Detect location" fills the
//! country and coordinates; a failed detection leaves them blank.

use crate::components::primitives::field::FormField;
use crate::domain::NewCustomRequest;
use crate::states::{RequestFormEvent, RequestFormState, i18n_request};
use gpui::{App, Context, Entity, Subscription, Window, prelude::*};
use gpui_component::{
    IconName,
    button::{Button, ButtonVariants},
    h_flex,
    input::{Input, InputState},
    label::Label,
    v_flex,
};

struct RequestInputs {
    name: Entity<InputState>,
    email: Entity<InputState>,
    phone: Entity<InputState>,
    description: Entity<InputState>,
    country: Entity<InputState>,
    latitude: Entity<InputState>,
    longitude: Entity<InputState>,
}

impl RequestInputs {
    fn all(&self) -> [&Entity<InputState>; 7] {
        [
            &self.name,
            &self.email,
            &self.phone,
            &self.description,
            &self.country,
            &self.latitude,
            &self.longitude,
        ]
    }

    fn location(&self) -> [&Entity<InputState>; 3] {
        [&self.country, &self.latitude, &self.longitude]
    }
}

fn text(input: &Entity<InputState>, cx: &App) -> String {
    input.read(cx).value().trim().to_string()
}

fn optional_text(input: &Entity<InputState>, cx: &App) -> Option<String> {
    Some(text(input, cx)).filter(|v| !v.is_empty())
}

/// Unparseable coordinates are sent as absent
fn coordinate(input: &Entity<InputState>, cx: &App) -> Option<f64> {
    optional_text(input, cx).and_then(|v| v.parse().ok())
}

pub struct RequestFormView {
    state: Entity<RequestFormState>,
    inputs: RequestInputs,
    _subscriptions: Vec<Subscription>,
}

impl RequestFormView {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let state = cx.new(|_| RequestFormState::new());

        let input = |key: &str, window: &mut Window, cx: &mut Context<Self>| {
            let placeholder = i18n_request(cx, key);
            cx.new(|cx| InputState::new(window, cx).placeholder(placeholder))
        };
        let inputs = RequestInputs {
            name: input("name_placeholder", window, cx),
            email: input("email_placeholder", window, cx),
            phone: input("phone_placeholder", window, cx),
            description: input("description_placeholder", window, cx),
            country: input("country_placeholder", window, cx),
            latitude: input("latitude_placeholder", window, cx),
            longitude: input("longitude_placeholder", window, cx),
        };

        let subscriptions = vec![
            cx.observe(&state, |_this, _state, cx| cx.notify()),
            cx.subscribe_in(&state, window, |this, _state, event: &RequestFormEvent, window, cx| {
                this.on_form_event(event, window, cx);
            }),
        ];

        Self {
            state,
            inputs,
            _subscriptions: subscriptions,
        }
    }

    fn on_form_event(&mut self, event: &RequestFormEvent, window: &mut Window, cx: &mut Context<Self>) {
        match event {
            RequestFormEvent::LocationDetected(location) => {
                let values = [
                    location.country.clone(),
                    format!("{:.4}", location.latitude),
                    format!("{:.4}", location.longitude),
                ];
                for (input, value) in self.inputs.location().into_iter().zip(values) {
                    input.update(cx, |input, cx| input.set_value(value, window, cx));
                }
            }
            RequestFormEvent::LocationFailed => {
                for input in self.inputs.location() {
                    input.update(cx, |input, cx| input.set_value("", window, cx));
                }
            }
            RequestFormEvent::Submitted => {
                for input in self.inputs.all() {
                    input.update(cx, |input, cx| input.set_value("", window, cx));
                }
            }
        }
    }

    fn collect(&self, cx: &App) -> NewCustomRequest {
        let inputs = &self.inputs;
        NewCustomRequest {
            name: text(&inputs.name, cx),
            email: text(&inputs.email, cx),
            phone: optional_text(&inputs.phone, cx),
            description: text(&inputs.description, cx),
            country: optional_text(&inputs.country, cx),
            latitude: coordinate(&inputs.latitude, cx),
            longitude: coordinate(&inputs.longitude, cx),
        }
    }
}

impl Render for RequestFormView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let state = self.state.read(cx);
        let (detecting, submitting) = (state.is_detecting(), state.is_submitting());
        let inputs = &self.inputs;

        v_flex()
            .id("request-form")
            .size_full()
            .p_4()
            .gap_4()
            .overflow_y_scroll()
            .child(Label::new(i18n_request(cx, "title")).text_xl())
            .child(
                h_flex()
                    .gap_3()
                    .child(FormField::new(i18n_request(cx, "name"), Input::new(&inputs.name)))
                    .child(FormField::new(i18n_request(cx, "email"), Input::new(&inputs.email)))
                    .child(FormField::new(i18n_request(cx, "phone"), Input::new(&inputs.phone))),
            )
            .child(FormField::new(
                i18n_request(cx, "description"),
                Input::new(&inputs.description),
            ))
            .child(
                h_flex()
                    .gap_3()
                    .items_end()
                    .child(FormField::new(i18n_request(cx, "country"), Input::new(&inputs.country)))
                    .child(FormField::new(i18n_request(cx, "latitude"), Input::new(&inputs.latitude)).width(140.0))
                    .child(FormField::new(i18n_request(cx, "longitude"), Input::new(&inputs.longitude)).width(140.0))
                    .child(
                        Button::new("detect-location")
                            .ghost()
                            .icon(IconName::Map)
                            .label(i18n_request(cx, "detect"))
                            .loading(detecting)
                            .on_click(cx.listener(|this, _, _, cx| {
                                this.state.update(cx, |state, cx| state.detect_location(cx));
                            })),
                    ),
            )
            .child(
                h_flex().justify_end().child(
                    Button::new("submit-request")
                        .primary()
                        .label(i18n_request(cx, "submit"))
                        .loading(submitting)
                        .on_click(cx.listener(|this, _, _, cx| {
                            let request = this.collect(cx);
                            this.state.update(cx, |state, cx| state.submit(request, cx));
                        })),
                ),
            )
    }
}
