use super::dom;
use super::installer::EffectContext;
use crate::effects::form::{
    label_lifted, FieldTone, SubmitState, LABEL_LIFT_TRANSFORM, SENDING_LABEL, SUBMIT_PRESSED_TRANSFORM,
};
use crate::logging::{log_event, LogLevel};
use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{Document, Element, Event};

const FORM_SELECTOR: &str = ".contact-form";
const FIELD_SELECTOR: &str = "input, textarea";
const SUBMIT_SELECTOR: &str = "button[type=\"submit\"], button:not([type]), input[type=\"submit\"]";

pub struct FormEffect {
    _listeners: Vec<EventListener>,
}

pub fn install(ctx: &EffectContext) -> Option<FormEffect> {
    let form = ctx.query(FORM_SELECTOR)?;
    let fields = dom::query_all_within(&form, FIELD_SELECTOR);
    let accent = Rc::new(ctx.config.form_accent_color.clone());
    let error = Rc::new(ctx.config.form_error_color.clone());
    let mut listeners = Vec::new();

    for field in fields {
        if is_submit_control(&field) {
            continue;
        }

        let label = adjacent_label(&ctx.document, &field);

        if let Some(label) = label.clone() {
            let accent = Rc::clone(&accent);
            listeners.push(EventListener::new(&field, "focus", move |_event: &Event| {
                dom::set_style(&label, "transform", LABEL_LIFT_TRANSFORM);
                dom::set_style(&label, "color", &accent);
            }));
        }

        if let Some(label) = label {
            let target = field.clone();
            listeners.push(EventListener::new(&field, "blur", move |_event: &Event| {
                let value = dom::field_state(&target)
                    .map(|(value, _)| value)
                    .unwrap_or_default();
                if !label_lifted(false, &value) {
                    dom::clear_style(&label, "transform");
                }
                dom::clear_style(&label, "color");
            }));
        }

        let target = field.clone();
        let accent = Rc::clone(&accent);
        let error = Rc::clone(&error);
        listeners.push(EventListener::new(&field, "input", move |_event: &Event| {
            let Some((value, valid)) = dom::field_state(&target) else {
                return;
            };
            match FieldTone::classify(valid, &value).color(&accent, &error) {
                Some(color) => dom::set_style(&target, "border-color", color),
                None => dom::clear_style(&target, "border-color"),
            }
        }));
    }

    let submit = Rc::new(RefCell::new(SubmitState::default()));
    let sending_ms = ctx.config.form_sending_ms;
    let min_level = ctx.config.log_level;
    let target = form.clone();
    listeners.push(EventListener::new_with_options(
        &form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event: &Event| {
            event.prevent_default();
            if !submit.borrow_mut().begin() {
                return;
            }

            let Some(button) = dom::query_all_within(&target, SUBMIT_SELECTOR).into_iter().next() else {
                submit.borrow_mut().finish();
                return;
            };
            let original = button.inner_html();
            show_sending(&button);
            log_event(min_level, LogLevel::Debug, "form_sending", json!({ "duration_ms": sending_ms }));

            let submit = Rc::clone(&submit);
            Timeout::new(sending_ms, move || {
                restore(&button, &original);
                submit.borrow_mut().finish();
            })
            .forget();
        },
    ));

    Some(FormEffect {
        _listeners: listeners,
    })
}

fn is_submit_control(element: &Element) -> bool {
    element
        .get_attribute("type")
        .is_some_and(|kind| kind.eq_ignore_ascii_case("submit"))
}

/// Previous sibling `<label>`, else a `<label for=...>` matching the field id.
fn adjacent_label(document: &Document, field: &Element) -> Option<Element> {
    if let Some(previous) = field.previous_element_sibling() {
        if previous.tag_name().eq_ignore_ascii_case("label") {
            return Some(previous);
        }
    }

    let id = field.id();
    if id.is_empty() {
        return None;
    }
    dom::query(document, &format!("label[for=\"{id}\"]"))
}

fn show_sending(button: &Element) {
    button.set_inner_html(&format!("<span class=\"spinner\" aria-hidden=\"true\"></span> {SENDING_LABEL}"));
    dom::set_style(button, "transform", SUBMIT_PRESSED_TRANSFORM);
    let _ = button.set_attribute("disabled", "");
}

fn restore(button: &Element, original: &str) {
    button.set_inner_html(original);
    dom::clear_style(button, "transform");
    let _ = button.remove_attribute("disabled");
}
