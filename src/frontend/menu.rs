use super::installer::EffectContext;
use crate::effects::menu::{MenuCause, MenuController, MenuSurface};
use crate::logging::{log_event, LogLevel};
use gloo::events::EventListener;
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, KeyboardEvent};

const TRIGGER_SELECTOR: &str = ".hamburger";
const PANEL_SELECTOR: &str = ".nav-menu";
const DEFAULT_PANEL_ID: &str = "primary-navigation";
const ACTIVE_CLASS: &str = "active";
const SCROLL_LOCK_CLASS: &str = "no-scroll";

struct DomMenuSurface {
    trigger: Element,
    panel: Element,
    backdrop: Element,
    body: Option<HtmlElement>,
}

impl MenuSurface for DomMenuSurface {
    fn set_trigger_expanded(&self, expanded: bool) {
        let _ = self
            .trigger
            .set_attribute("aria-expanded", &expanded.to_string());
    }

    fn set_panel_hidden(&self, hidden: bool) {
        let _ = self.panel.set_attribute("aria-hidden", &hidden.to_string());
    }

    fn set_panel_active(&self, active: bool) {
        let _ = self
            .panel
            .class_list()
            .toggle_with_force(ACTIVE_CLASS, active);
    }

    fn set_backdrop_active(&self, active: bool) {
        let _ = self
            .backdrop
            .class_list()
            .toggle_with_force(ACTIVE_CLASS, active);
    }

    fn set_scroll_lock(&self, locked: bool) {
        if let Some(body) = self.body.as_ref() {
            let _ = body
                .class_list()
                .toggle_with_force(SCROLL_LOCK_CLASS, locked);
        }
    }
}

type SharedMenu = Rc<RefCell<MenuController<DomMenuSurface>>>;

pub struct MenuEffect {
    _listeners: Vec<EventListener>,
    menu: SharedMenu,
    backdrop: Element,
}

impl Drop for MenuEffect {
    fn drop(&mut self) {
        if let Ok(mut menu) = self.menu.try_borrow_mut() {
            menu.close();
        }
        self.backdrop.remove();
    }
}

pub fn install(ctx: &EffectContext) -> Option<MenuEffect> {
    let trigger = ctx.query(TRIGGER_SELECTOR)?;
    let panel = ctx.query(PANEL_SELECTOR)?;

    let has_controls = trigger
        .get_attribute("aria-controls")
        .is_some_and(|value| !value.trim().is_empty());
    if !has_controls {
        let _ = trigger.set_attribute("aria-controls", DEFAULT_PANEL_ID);
    }

    let backdrop = ctx.document.create_element("div").ok()?;
    backdrop.set_class_name("backdrop");
    let body = ctx.document.body();
    if let Some(body) = body.as_ref() {
        let _ = body.append_child(&backdrop);
    }

    let surface = DomMenuSurface {
        trigger: trigger.clone(),
        panel: panel.clone(),
        backdrop: backdrop.clone(),
        body,
    };
    let menu: SharedMenu = Rc::new(RefCell::new(MenuController::new(
        surface,
        ctx.config.menu_breakpoint,
    )));
    let min_level = ctx.config.log_level;

    let mut listeners = Vec::new();

    let on_trigger = {
        let menu = Rc::clone(&menu);
        EventListener::new(&trigger, "click", move |_event: &Event| {
            let changed = menu.borrow_mut().toggle();
            report(&menu, min_level, changed, MenuCause::Trigger);
        })
    };
    listeners.push(on_trigger);

    let on_backdrop = {
        let menu = Rc::clone(&menu);
        EventListener::new(&backdrop, "click", move |_event: &Event| {
            let changed = menu.borrow_mut().close();
            report(&menu, min_level, changed, MenuCause::Backdrop);
        })
    };
    listeners.push(on_backdrop);

    let on_panel = {
        let menu = Rc::clone(&menu);
        EventListener::new(&panel, "click", move |event: &Event| {
            let hit_anchor = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|element| element.closest("a").ok().flatten())
                .is_some();
            let changed = menu.borrow_mut().handle_panel_click(hit_anchor);
            report(&menu, min_level, changed, MenuCause::Link);
        })
    };
    listeners.push(on_panel);

    let on_key = {
        let menu = Rc::clone(&menu);
        EventListener::new(&ctx.document, "keydown", move |event: &Event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
                return;
            };
            let changed = menu.borrow_mut().handle_key(&key);
            report(&menu, min_level, changed, MenuCause::Escape);
        })
    };
    listeners.push(on_key);

    let on_resize = {
        let menu = Rc::clone(&menu);
        let window = ctx.window.clone();
        EventListener::new(&ctx.window, "resize", move |_event: &Event| {
            let width = super::dom::viewport_width(&window);
            let changed = menu.borrow_mut().handle_resize(width);
            report(&menu, min_level, changed, MenuCause::Resize);
        })
    };
    listeners.push(on_resize);

    Some(MenuEffect {
        _listeners: listeners,
        menu,
        backdrop,
    })
}

fn report(menu: &SharedMenu, min_level: LogLevel, changed: bool, cause: MenuCause) {
    if !changed {
        return;
    }

    let event = if menu.borrow().is_open() {
        "menu_opened"
    } else {
        "menu_closed"
    };
    log_event(min_level, LogLevel::Debug, event, json!({ "cause": cause.as_str() }));
}
