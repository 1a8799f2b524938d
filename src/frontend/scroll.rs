use super::dom;
use super::installer::EffectContext;
use crate::effects::scroll::{FrameGate, HeaderTracker, Parallax, ScrollActivity, ScrollPlan};
use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{Element, Window};

const HEADER_SELECTOR: &str = ".header";
const LAYER_SELECTOR: &str = ".parallax-layer";
const SCROLLED_CLASS: &str = "scrolled";
const SCROLLING_CLASS: &str = "is-scrolling";

struct ScrollState {
    window: Window,
    header: Option<Element>,
    layers: Vec<Element>,
    body: Option<Element>,
    plan: RefCell<ScrollPlan>,
    gate: RefCell<FrameGate>,
    frame: RefCell<Option<AnimationFrame>>,
    activity: RefCell<ScrollActivity>,
    idle: RefCell<Option<Timeout>>,
    idle_ms: u32,
}

impl ScrollState {
    fn on_scroll(self: &Rc<Self>) {
        self.mark_scrolling();
        self.queue_render();
    }

    fn mark_scrolling(self: &Rc<Self>) {
        if self.activity.borrow_mut().touch() {
            if let Some(body) = self.body.as_ref() {
                dom::set_class(body, SCROLLING_CLASS, true);
            }
        }

        let state = Rc::clone(self);
        let timeout = Timeout::new(self.idle_ms, move || {
            if state.activity.borrow_mut().settle() {
                if let Some(body) = state.body.as_ref() {
                    dom::set_class(body, SCROLLING_CLASS, false);
                }
            }
        });
        *self.idle.borrow_mut() = Some(timeout);
    }

    fn queue_render(self: &Rc<Self>) {
        if !self.gate.borrow_mut().request() {
            return;
        }

        let state = Rc::clone(self);
        let handle = request_animation_frame(move |_| {
            state.frame.borrow_mut().take();
            state.gate.borrow_mut().complete();
            state.render();
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn render(&self) {
        let scroll_y = dom::scroll_y(&self.window);

        let frame = self.plan.borrow_mut().frame(scroll_y, self.layers.len());

        if let Some(header) = self.header.as_ref() {
            dom::set_class(header, SCROLLED_CLASS, frame.header.scrolled);
            dom::set_style(header, "transform", frame.header.transform());
        }

        for (layer, transform) in self.layers.iter().zip(&frame.layer_transforms) {
            dom::set_style(layer, "transform", transform);
        }
    }
}

pub struct ScrollEffect {
    _listener: EventListener,
    state: Rc<ScrollState>,
}

impl Drop for ScrollEffect {
    fn drop(&mut self) {
        self.state.idle.borrow_mut().take();
        self.state.frame.borrow_mut().take();
    }
}

pub fn install(ctx: &EffectContext) -> Option<ScrollEffect> {
    let header = ctx.query(HEADER_SELECTOR);
    let layers = ctx.query_all(LAYER_SELECTOR);
    let body = ctx.document.body().map(Element::from);
    if header.is_none() && layers.is_empty() && body.is_none() {
        return None;
    }

    let initial_y = dom::scroll_y(&ctx.window);
    let plan = ScrollPlan::new(
        ctx.env,
        HeaderTracker::new(
            initial_y,
            ctx.config.header_scrolled_threshold,
            ctx.config.header_hide_threshold,
        ),
        Parallax {
            base_speed: ctx.config.parallax_base_speed,
            speed_step: ctx.config.parallax_speed_step,
        },
    );

    let state = Rc::new(ScrollState {
        window: ctx.window.clone(),
        header,
        layers,
        body,
        plan: RefCell::new(plan),
        gate: RefCell::new(FrameGate::default()),
        frame: RefCell::new(None),
        activity: RefCell::new(ScrollActivity::default()),
        idle: RefCell::new(None),
        idle_ms: ctx.config.scroll_end_idle_ms,
    });
    state.render();

    let listener = {
        let state = Rc::clone(&state);
        EventListener::new(&ctx.window, "scroll", move |_event| state.on_scroll())
    };

    Some(ScrollEffect {
        _listener: listener,
        state,
    })
}
