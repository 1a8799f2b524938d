use super::Environment;

pub const TILT_RESET_TRANSFORM: &str = "perspective(1000px) rotateX(0deg) rotateY(0deg)";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub fn from_pointer(rect: CardRect, client_x: f64, client_y: f64, divisor: f64) -> Self {
        let x = client_x - rect.left;
        let y = client_y - rect.top;
        let center_x = rect.width / 2.0;
        let center_y = rect.height / 2.0;

        Self {
            rotate_x: -(y - center_y) / divisor,
            rotate_y: (x - center_x) / divisor,
        }
    }

    pub fn transform(self) -> String {
        format!(
            "perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg) scale3d(1.02, 1.02, 1.02)",
            self.rotate_x, self.rotate_y
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    pub fn at(rect: CardRect, client_x: f64, client_y: f64) -> Self {
        let size = rect.width.max(rect.height);

        Self {
            size,
            left: client_x - rect.left - size / 2.0,
            top: client_y - rect.top - size / 2.0,
        }
    }

    pub fn style(self) -> String {
        format!(
            "width: {size:.2}px; height: {size:.2}px; left: {left:.2}px; top: {top:.2}px;",
            size = self.size,
            left = self.left,
            top = self.top
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardEffects {
    tilt_divisor: f64,
    tilt_enabled: bool,
}

impl CardEffects {
    pub fn new(env: Environment, tilt_divisor: f64) -> Self {
        Self {
            tilt_divisor,
            tilt_enabled: env.allows_motion(),
        }
    }

    pub fn tilt_enabled(self) -> bool {
        self.tilt_enabled
    }

    pub fn pointer_move(self, rect: CardRect, client_x: f64, client_y: f64) -> Option<String> {
        self.tilt_enabled
            .then(|| Tilt::from_pointer(rect, client_x, client_y, self.tilt_divisor).transform())
    }

    pub fn pointer_leave(self) -> Option<&'static str> {
        self.tilt_enabled.then_some(TILT_RESET_TRANSFORM)
    }

    pub fn click(self, rect: CardRect, client_x: f64, client_y: f64) -> Ripple {
        Ripple::at(rect, client_x, client_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: CardRect = CardRect {
        left: 100.0,
        top: 50.0,
        width: 200.0,
        height: 100.0,
    };

    fn env(reduced_motion: bool) -> Environment {
        Environment {
            reduced_motion,
            viewport_width: 1280.0,
        }
    }

    #[test]
    fn reduced_motion_never_produces_a_tilt_transform() {
        let cards = CardEffects::new(env(true), 10.0);

        assert!(!cards.tilt_enabled());
        for (x, y) in [(100.0, 50.0), (300.0, 150.0), (180.0, 72.0)] {
            assert_eq!(cards.pointer_move(RECT, x, y), None);
        }
        assert_eq!(cards.pointer_leave(), None);
        assert_eq!(cards.click(RECT, 120.0, 60.0).size, 200.0);
    }

    #[test]
    fn motion_allowed_tilts_and_resets() {
        let cards = CardEffects::new(env(false), 10.0);

        assert!(cards.tilt_enabled());
        assert_eq!(
            cards.pointer_move(RECT, 300.0, 50.0).as_deref(),
            Some("perspective(1000px) rotateX(5.00deg) rotateY(10.00deg) scale3d(1.02, 1.02, 1.02)")
        );
        assert_eq!(cards.pointer_leave(), Some(TILT_RESET_TRANSFORM));
    }

    #[test]
    fn center_pointer_has_no_tilt() {
        let tilt = Tilt::from_pointer(RECT, 200.0, 100.0, 10.0);
        assert_eq!(tilt.rotate_x, 0.0);
        assert_eq!(tilt.rotate_y, 0.0);
    }

    #[test]
    fn axes_follow_offset_from_center() {
        let tilt = Tilt::from_pointer(RECT, 300.0, 50.0, 10.0);

        assert_eq!(tilt.rotate_y, 10.0);
        assert_eq!(tilt.rotate_x, 5.0);
        assert_eq!(
            tilt.transform(),
            "perspective(1000px) rotateX(5.00deg) rotateY(10.00deg) scale3d(1.02, 1.02, 1.02)"
        );
    }

    #[test]
    fn ripple_uses_larger_dimension_and_centers_on_click() {
        let ripple = Ripple::at(RECT, 120.0, 60.0);

        assert_eq!(ripple.size, 200.0);
        assert_eq!(ripple.left, -80.0);
        assert_eq!(ripple.top, -90.0);
        assert_eq!(
            ripple.style(),
            "width: 200.00px; height: 200.00px; left: -80.00px; top: -90.00px;"
        );
    }
}
