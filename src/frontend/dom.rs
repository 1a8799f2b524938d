use crate::config::{EffectsConfig, CONFIG_SCRIPT_ID};
use crate::logging::{log_event, LogLevel};
use serde_json::json;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    CssStyleDeclaration, Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement, NodeList, Window,
};

const FALLBACK_VIEWPORT_WIDTH: f64 = 1280.0;

pub fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn viewport_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT_WIDTH)
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn query(root: &Document, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

pub fn query_all(root: &Document, selector: &str) -> Vec<Element> {
    elements(root.query_selector_all(selector))
}

pub fn query_all_within(root: &Element, selector: &str) -> Vec<Element> {
    elements(root.query_selector_all(selector))
}

fn elements(list: Result<NodeList, JsValue>) -> Vec<Element> {
    let Ok(list) = list else {
        return Vec::new();
    };

    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn style(element: &Element) -> Option<CssStyleDeclaration> {
    element.dyn_ref::<HtmlElement>().map(HtmlElement::style)
}

pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(style) = style(element) {
        let _ = style.set_property(property, value);
    }
}

pub fn clear_style(element: &Element, property: &str) {
    if let Some(style) = style(element) {
        let _ = style.remove_property(property);
    }
}

pub fn set_class(element: &Element, class: &str, present: bool) {
    let _ = element.class_list().toggle_with_force(class, present);
}

pub fn field_state(element: &Element) -> Option<(String, bool)> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some((input.value(), input.validity().valid()));
    }

    element
        .dyn_ref::<HtmlTextAreaElement>()
        .map(|area| (area.value(), area.validity().valid()))
}

pub fn read_config(document: &Document) -> EffectsConfig {
    let Some(raw) = document
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|script| script.text_content())
        .filter(|raw| !raw.trim().is_empty())
    else {
        return EffectsConfig::default();
    };

    match EffectsConfig::from_json(&raw) {
        Ok(config) => config,
        Err(error) => {
            let config = EffectsConfig::default();
            log_event(
                config.log_level,
                LogLevel::Warn,
                "config_invalid",
                json!({ "error": error.to_string() }),
            );
            config
        }
    }
}
