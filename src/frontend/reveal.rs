use super::installer::EffectContext;
use crate::effects::reveal::{Intersection, RevealEngine, RevealMode, Transition};
use crate::logging::{log_event, LogLevel};
use js_sys::{Array, Reflect};
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

const TAG_CLASS: &str = "reveal";
const REVEALED_CLASS: &str = "revealed";
const ID_ATTRIBUTE: &str = "data-reveal-id";

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

pub struct RevealEffect {
    observer: Option<IntersectionObserver>,
    _callback: Option<ObserverCallback>,
}

impl Drop for RevealEffect {
    fn drop(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
    }
}

pub fn install(ctx: &EffectContext) -> Option<RevealEffect> {
    let selectors = ctx.config.reveal_selectors.join(", ");
    if selectors.is_empty() {
        return None;
    }

    let elements = ctx.query_all(&selectors);
    if elements.is_empty() {
        return None;
    }

    let mut engine = RevealEngine::tag(elements.len(), ctx.config.reveal_stagger_cycle);
    for (id, (element, target)) in elements.iter().zip(engine.targets()).enumerate() {
        tag(element, id, target.stagger);
    }

    let observer_available =
        Reflect::has(&ctx.window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false);
    let mode = RevealMode::choose(observer_available, ctx.env.reduced_motion, engine.len());

    if mode == RevealMode::Immediate {
        reveal_immediately(&mut engine, &elements);
        log_event(
            ctx.config.log_level,
            LogLevel::Info,
            "reveal_immediate",
            json!({
                "count": elements.len(),
                "observer_available": observer_available,
                "reduced_motion": ctx.env.reduced_motion,
            }),
        );
        return Some(RevealEffect {
            observer: None,
            _callback: None,
        });
    }

    let engine = Rc::new(RefCell::new(engine));
    let callback = {
        let engine = Rc::clone(&engine);
        ObserverCallback::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(id) = reveal_id(&target) else {
                    continue;
                };

                let report = Intersection {
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                };
                if engine.borrow_mut().observe(id, report) == Transition::Revealed {
                    mark_revealed(&target);
                    observer.unobserve(&target);
                }
            }

            if engine.borrow().pending_count() == 0 {
                observer.disconnect();
            }
        })
    };

    let options = IntersectionObserverInit::new();
    options.set_root_margin(&ctx.config.reveal_root_margin);
    options.set_threshold(&JsValue::from_f64(ctx.config.reveal_threshold));

    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(_) => {
            reveal_immediately(&mut engine.borrow_mut(), &elements);
            log_event(
                ctx.config.log_level,
                LogLevel::Warn,
                "reveal_observer_failed",
                json!({ "count": elements.len() }),
            );
            return Some(RevealEffect {
                observer: None,
                _callback: None,
            });
        }
    };

    for element in &elements {
        observer.observe(element);
    }
    log_event(
        ctx.config.log_level,
        LogLevel::Debug,
        "reveal_observing",
        json!({ "count": elements.len(), "root_margin": ctx.config.reveal_root_margin }),
    );

    Some(RevealEffect {
        observer: Some(observer),
        _callback: Some(callback),
    })
}

fn tag(element: &Element, id: usize, stagger: u32) {
    let _ = element.class_list().add_1(TAG_CLASS);
    let _ = element.set_attribute(ID_ATTRIBUTE, &id.to_string());
    let _ = element.set_attribute("data-stagger", &stagger.to_string());
    super::dom::set_style(element, "--reveal-stagger", &stagger.to_string());
}

fn reveal_id(element: &Element) -> Option<usize> {
    element.get_attribute(ID_ATTRIBUTE)?.parse().ok()
}

fn mark_revealed(element: &Element) {
    let _ = element.class_list().add_1(REVEALED_CLASS);
    let _ = element.set_attribute("data-revealed", "true");
}

fn reveal_immediately(engine: &mut RevealEngine, elements: &[Element]) {
    for id in engine.reveal_all() {
        if let Some(element) = elements.get(id) {
            mark_revealed(element);
        }
    }
}
