pub trait MenuSurface {
    fn set_trigger_expanded(&self, expanded: bool);
    fn set_panel_hidden(&self, hidden: bool);
    fn set_panel_active(&self, active: bool);
    fn set_backdrop_active(&self, active: bool);
    fn set_scroll_lock(&self, locked: bool);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuCause {
    Trigger,
    Backdrop,
    Link,
    Escape,
    Resize,
}

impl MenuCause {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trigger => "trigger",
            Self::Backdrop => "backdrop",
            Self::Link => "link",
            Self::Escape => "escape",
            Self::Resize => "resize",
        }
    }
}

pub struct MenuController<S> {
    surface: S,
    open: bool,
    breakpoint: f64,
}

impl<S: MenuSurface> MenuController<S> {
    pub fn new(surface: S, breakpoint: f64) -> Self {
        let controller = Self {
            surface,
            open: false,
            breakpoint,
        };
        controller.apply();
        controller
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns `true` when the menu was closed before the call.
    pub fn open(&mut self) -> bool {
        if self.open {
            return false;
        }
        self.open = true;
        self.apply();
        true
    }

    /// Returns `true` when the menu was open before the call.
    pub fn close(&mut self) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        self.apply();
        true
    }

    pub fn toggle(&mut self) -> bool {
        if self.open {
            self.close()
        } else {
            self.open()
        }
    }

    pub fn handle_key(&mut self, key: &str) -> bool {
        key == "Escape" && self.close()
    }

    pub fn handle_panel_click(&mut self, hit_anchor: bool) -> bool {
        hit_anchor && self.close()
    }

    pub fn handle_resize(&mut self, viewport_width: f64) -> bool {
        viewport_width > self.breakpoint && self.close()
    }

    fn apply(&self) {
        let open = self.open;
        self.surface.set_panel_active(open);
        self.surface.set_backdrop_active(open);
        self.surface.set_trigger_expanded(open);
        self.surface.set_panel_hidden(!open);
        self.surface.set_scroll_lock(open);
    }
}
