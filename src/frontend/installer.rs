use super::{cards, dom, form, menu, overlay, particles, reveal, scroll};
use crate::config::EffectsConfig;
use crate::effects::Environment;
use crate::logging::{log_event, LogLevel};
use serde_json::json;
use web_sys::{window, Document, Element, Window};

pub struct EffectContext {
    pub window: Window,
    pub document: Document,
    pub config: EffectsConfig,
    pub env: Environment,
}

impl EffectContext {
    pub fn from_window() -> Option<Self> {
        let window = window()?;
        let document = window.document()?;
        let config = dom::read_config(&document);
        let env = Environment {
            reduced_motion: dom::prefers_reduced_motion(&window),
            viewport_width: dom::viewport_width(&window),
        };

        Some(Self {
            window,
            document,
            config,
            env,
        })
    }

    pub fn query(&self, selector: &str) -> Option<Element> {
        dom::query(&self.document, selector)
    }

    pub fn query_all(&self, selector: &str) -> Vec<Element> {
        dom::query_all(&self.document, selector)
    }
}

pub struct InstalledEffects {
    _menu: Option<menu::MenuEffect>,
    _reveal: Option<reveal::RevealEffect>,
    _overlay: Option<overlay::OverlayEffect>,
    _scroll: Option<scroll::ScrollEffect>,
    _cards: Option<cards::CardsEffect>,
    _form: Option<form::FormEffect>,
    _particles: Option<particles::ParticlesEffect>,
}

pub fn install() -> Option<InstalledEffects> {
    let ctx = EffectContext::from_window()?;

    let menu = menu::install(&ctx);
    let reveal = reveal::install(&ctx);
    let overlay = overlay::install(&ctx);
    let scroll = scroll::install(&ctx);
    let cards = cards::install(&ctx);
    let form = form::install(&ctx);
    let particles = particles::install(&ctx);

    log_event(
        ctx.config.log_level,
        LogLevel::Info,
        "effects_installed",
        json!({
            "reduced_motion": ctx.env.reduced_motion,
            "viewport_width": ctx.env.viewport_width,
            "menu": menu.is_some(),
            "reveal": reveal.is_some(),
            "overlay": overlay.is_some(),
            "scroll": scroll.is_some(),
            "cards": cards.is_some(),
            "form": form.is_some(),
            "particles": particles.is_some(),
        }),
    );

    Some(InstalledEffects {
        _menu: menu,
        _reveal: reveal,
        _overlay: overlay,
        _scroll: scroll,
        _cards: cards,
        _form: form,
        _particles: particles,
    })
}
