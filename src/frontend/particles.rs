use super::installer::EffectContext;
use crate::effects::particles::{ParticleGenerator, ParticleTiming};
use crate::logging::{log_event, LogLevel};
use gloo::timers::callback::{Interval, Timeout};
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{Document, Element};

const CONTAINER_SELECTOR: &str = ".particles";
const PARTICLE_CLASS: &str = "particle";

pub struct ParticlesEffect {
    _interval: Interval,
}

pub fn install(ctx: &EffectContext) -> Option<ParticlesEffect> {
    let container = ctx.query(CONTAINER_SELECTOR)?;
    let generator = ParticleGenerator::new(
        ParticleTiming {
            max_delay_ms: ctx.config.particle_max_delay_ms,
            min_duration_ms: ctx.config.particle_min_duration_ms,
            duration_spread_ms: ctx.config.particle_duration_spread_ms,
        },
        ctx.config.particle_max_live,
        ctx.env,
    );
    if !generator.is_enabled() {
        log_event(
            ctx.config.log_level,
            LogLevel::Debug,
            "particles_disabled",
            json!({ "reason": "reduced_motion" }),
        );
        return None;
    }

    let generator = Rc::new(RefCell::new(generator));
    let document = ctx.document.clone();

    let interval = Interval::new(ctx.config.particle_interval_ms, move || {
        spawn(&document, &container, &generator);
    });

    Some(ParticlesEffect {
        _interval: interval,
    })
}

fn spawn(document: &Document, container: &Element, generator: &Rc<RefCell<ParticleGenerator>>) {
    let Some(spec) = generator.borrow_mut().spawn(js_sys::Math::random) else {
        return;
    };
    let lifetime_ms = generator.borrow().timing().lifetime_ms();

    let Ok(particle) = document.create_element("div") else {
        generator.borrow_mut().retire();
        return;
    };
    particle.set_class_name(PARTICLE_CLASS);
    let _ = particle.set_attribute("style", &spec.style());
    if container.append_child(&particle).is_err() {
        generator.borrow_mut().retire();
        return;
    }

    let generator = Rc::clone(generator);
    Timeout::new(lifetime_ms, move || {
        particle.remove();
        generator.borrow_mut().retire();
    })
    .forget();
}
