use super::installer::EffectContext;
use crate::effects::overlay::{LoadingOverlay, OverlayPhase, OverlaySchedule};
use crate::logging::{log_event, LogLevel};
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::Element;

const OVERLAY_ID: &str = "loading-screen";
const FADE_CLASS: &str = "fade-out";

pub struct OverlayEffect {
    _load: Option<EventListener>,
}

pub fn install(ctx: &EffectContext) -> Option<OverlayEffect> {
    let element = ctx.document.get_element_by_id(OVERLAY_ID)?;
    let overlay = Rc::new(RefCell::new(LoadingOverlay::new(OverlaySchedule {
        fade_delay_ms: ctx.config.overlay_fade_delay_ms,
        remove_delay_ms: ctx.config.overlay_remove_delay_ms,
    })));
    let min_level = ctx.config.log_level;

    if ctx.document.ready_state() == "complete" {
        schedule_next(element, overlay, min_level);
        return Some(OverlayEffect { _load: None });
    }

    let load = EventListener::once(&ctx.window, "load", move |_event| {
        schedule_next(element, overlay, min_level);
    });

    Some(OverlayEffect { _load: Some(load) })
}

fn schedule_next(element: Element, overlay: Rc<RefCell<LoadingOverlay>>, min_level: LogLevel) {
    let Some(delay) = overlay.borrow().delay_before_next() else {
        return;
    };

    Timeout::new(delay, move || {
        let phase = overlay.borrow_mut().advance();
        match phase {
            Some(OverlayPhase::Fading) => {
                let _ = element.class_list().add_1(FADE_CLASS);
                super::dom::set_style(&element, "opacity", "0");
            }
            Some(OverlayPhase::Removed) => {
                super::dom::set_style(&element, "display", "none");
                log_event(min_level, LogLevel::Debug, "overlay_removed", json!({ "id": OVERLAY_ID }));
            }
            Some(OverlayPhase::Visible) | None => return,
        }
        schedule_next(element, overlay, min_level);
    })
    .forget();
}
