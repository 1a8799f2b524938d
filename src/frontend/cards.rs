use super::dom;
use super::installer::EffectContext;
use crate::effects::cards::{CardEffects, CardRect, Ripple};
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, MouseEvent};

const GRID_SELECTOR: &str = ".card-grid";
const CARD_SELECTOR: &str = ".card";
const GRID_CARD_SELECTOR: &str = ".card-grid .card";
const RIPPLE_CLASS: &str = "ripple";

pub struct CardsEffect {
    _listeners: Vec<EventListener>,
}

pub fn install(ctx: &EffectContext) -> Option<CardsEffect> {
    let selector = if ctx.query(GRID_SELECTOR).is_some() {
        GRID_CARD_SELECTOR
    } else {
        CARD_SELECTOR
    };
    let cards = ctx.query_all(selector);
    if cards.is_empty() {
        return None;
    }

    let effects = CardEffects::new(ctx.env, ctx.config.tilt_divisor);
    let ripple_ms = ctx.config.ripple_duration_ms;
    let mut listeners = Vec::new();

    for card in cards {
        if effects.tilt_enabled() {
            let target = card.clone();
            listeners.push(EventListener::new(&card, "mousemove", move |event: &Event| {
                let Some(pointer) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let transform = effects.pointer_move(
                    card_rect(&target),
                    f64::from(pointer.client_x()),
                    f64::from(pointer.client_y()),
                );
                if let Some(transform) = transform {
                    dom::set_style(&target, "transform", &transform);
                }
            }));

            let target = card.clone();
            listeners.push(EventListener::new(&card, "mouseleave", move |_event: &Event| {
                if let Some(transform) = effects.pointer_leave() {
                    dom::set_style(&target, "transform", transform);
                }
            }));
        }

        let target = card.clone();
        let document = ctx.document.clone();
        listeners.push(EventListener::new(&card, "click", move |event: &Event| {
            let Some(pointer) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let ripple = effects.click(
                card_rect(&target),
                f64::from(pointer.client_x()),
                f64::from(pointer.client_y()),
            );
            spawn_ripple(&document, &target, ripple, ripple_ms);
        }));
    }

    Some(CardsEffect {
        _listeners: listeners,
    })
}

fn card_rect(card: &Element) -> CardRect {
    let rect = card.get_bounding_client_rect();
    CardRect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

fn spawn_ripple(document: &Document, card: &Element, ripple: Ripple, duration_ms: u32) {
    let Ok(element) = document.create_element("span") else {
        return;
    };
    element.set_class_name(RIPPLE_CLASS);
    let _ = element.set_attribute("style", &ripple.style());
    if card.append_child(&element).is_err() {
        return;
    }

    Timeout::new(duration_ms, move || element.remove()).forget();
}
