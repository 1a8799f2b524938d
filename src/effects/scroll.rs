use super::Environment;

#[derive(Debug, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Returns `true` when the caller should schedule a frame. A request made
    /// while one is already pending is dropped.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn complete(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parallax {
    pub base_speed: f64,
    pub speed_step: f64,
}

impl Parallax {
    pub fn speed(self, index: usize) -> f64 {
        self.base_speed + index as f64 * self.speed_step
    }

    pub fn offset(self, scroll_y: f64, index: usize) -> f64 {
        -(scroll_y * self.speed(index))
    }

    pub fn transform(self, scroll_y: f64, index: usize) -> String {
        format!("translate3d(0, {:.2}px, 0)", self.offset(scroll_y, index))
    }
}

pub const HEADER_HIDDEN_TRANSFORM: &str = "translateY(-100%)";
pub const HEADER_SHOWN_TRANSFORM: &str = "translateY(0)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderState {
    pub scrolled: bool,
    pub hidden: bool,
}

impl HeaderState {
    pub fn transform(self) -> &'static str {
        if self.hidden {
            HEADER_HIDDEN_TRANSFORM
        } else {
            HEADER_SHOWN_TRANSFORM
        }
    }
}

#[derive(Debug)]
pub struct HeaderTracker {
    last_y: f64,
    state: HeaderState,
    scrolled_threshold: f64,
    hide_threshold: f64,
}

impl HeaderTracker {
    pub fn new(initial_y: f64, scrolled_threshold: f64, hide_threshold: f64) -> Self {
        Self {
            last_y: initial_y,
            state: HeaderState {
                scrolled: initial_y > scrolled_threshold,
                hidden: false,
            },
            scrolled_threshold,
            hide_threshold,
        }
    }

    pub fn state(&self) -> HeaderState {
        self.state
    }

    pub fn update(&mut self, scroll_y: f64) -> HeaderState {
        self.state.scrolled = scroll_y > self.scrolled_threshold;

        if scroll_y > self.last_y && scroll_y > self.hide_threshold {
            self.state.hidden = true;
        } else if scroll_y < self.last_y {
            self.state.hidden = false;
        }

        self.last_y = scroll_y;
        self.state
    }
}

#[derive(Debug, Default)]
pub struct ScrollActivity {
    scrolling: bool,
}

impl ScrollActivity {
    pub fn touch(&mut self) -> bool {
        !std::mem::replace(&mut self.scrolling, true)
    }

    pub fn settle(&mut self) -> bool {
        std::mem::replace(&mut self.scrolling, false)
    }

    pub fn is_scrolling(&self) -> bool {
        self.scrolling
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollFrame {
    pub header: HeaderState,
    pub layer_transforms: Vec<String>,
}

#[derive(Debug)]
pub struct ScrollPlan {
    tracker: HeaderTracker,
    parallax: Option<Parallax>,
}

impl ScrollPlan {
    pub fn new(env: Environment, tracker: HeaderTracker, parallax: Parallax) -> Self {
        Self {
            tracker,
            parallax: env.allows_motion().then_some(parallax),
        }
    }

    pub fn parallax(&self) -> Option<Parallax> {
        self.parallax
    }

    pub fn frame(&mut self, scroll_y: f64, layer_count: usize) -> ScrollFrame {
        let header = self.tracker.update(scroll_y);
        let layer_transforms = match self.parallax {
            Some(parallax) => (0..layer_count)
                .map(|index| parallax.transform(scroll_y, index))
                .collect(),
            None => Vec::new(),
        };

        ScrollFrame {
            header,
            layer_transforms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARALLAX: Parallax = Parallax {
        base_speed: 0.1,
        speed_step: 0.1,
    };

    fn plan(reduced_motion: bool) -> ScrollPlan {
        let env = Environment {
            reduced_motion,
            viewport_width: 1280.0,
        };
        ScrollPlan::new(env, HeaderTracker::new(0.0, 50.0, 200.0), PARALLAX)
    }

    #[test]
    fn reduced_motion_keeps_header_but_drops_parallax() {
        let mut plan = plan(true);
        assert_eq!(plan.parallax(), None);

        let frame = plan.frame(100.0, 3);
        assert!(frame.header.scrolled);
        assert!(frame.layer_transforms.is_empty());

        let frame = plan.frame(300.0, 3);
        assert!(frame.header.hidden);
        assert_eq!(frame.header.transform(), HEADER_HIDDEN_TRANSFORM);
        assert!(frame.layer_transforms.is_empty());
    }

    #[test]
    fn motion_allowed_transforms_every_layer() {
        let mut plan = plan(false);

        let frame = plan.frame(100.0, 3);
        assert!(frame.header.scrolled);
        assert_eq!(
            frame.layer_transforms,
            vec![
                "translate3d(0, -10.00px, 0)",
                "translate3d(0, -20.00px, 0)",
                "translate3d(0, -30.00px, 0)",
            ]
        );
    }

    #[test]
    fn frame_gate_drops_requests_while_pending() {
        let mut gate = FrameGate::default();

        assert!(gate.request());
        assert!(!gate.request());
        assert!(!gate.request());
        gate.complete();
        assert!(!gate.is_pending());
        assert!(gate.request());
    }

    #[test]
    fn parallax_speed_increases_with_index() {
        let parallax = Parallax {
            base_speed: 0.1,
            speed_step: 0.1,
        };

        let offsets: Vec<f64> = (0..4).map(|index| parallax.offset(300.0, index)).collect();
        for pair in offsets.windows(2) {
            assert!(pair[1] < pair[0]);
        }
        assert!((offsets[0] + 30.0).abs() < 1e-9);
        assert_eq!(parallax.transform(100.0, 1), "translate3d(0, -20.00px, 0)");
    }

    #[test]
    fn header_marks_scrolled_past_threshold() {
        let mut header = HeaderTracker::new(0.0, 50.0, 200.0);

        assert!(!header.update(40.0).scrolled);
        assert!(header.update(60.0).scrolled);
        assert!(!header.update(10.0).scrolled);
    }

    #[test]
    fn header_hides_on_downward_scroll_past_hide_threshold() {
        let mut header = HeaderTracker::new(0.0, 50.0, 200.0);

        assert!(!header.update(150.0).hidden);
        let state = header.update(250.0);
        assert!(state.hidden);
        assert_eq!(state.transform(), HEADER_HIDDEN_TRANSFORM);
    }

    #[test]
    fn any_upward_scroll_restores_header() {
        let mut header = HeaderTracker::new(0.0, 50.0, 200.0);
        header.update(400.0);

        let state = header.update(399.0);
        assert!(!state.hidden);
        assert_eq!(state.transform(), HEADER_SHOWN_TRANSFORM);
    }

    #[test]
    fn equal_offsets_keep_header_state() {
        let mut header = HeaderTracker::new(0.0, 50.0, 200.0);
        header.update(400.0);

        assert!(header.update(400.0).hidden);
    }

    #[test]
    fn initial_offset_sets_scrolled() {
        let header = HeaderTracker::new(120.0, 50.0, 200.0);
        assert!(header.state().scrolled);
        assert!(!header.state().hidden);
    }

    #[test]
    fn scroll_activity_reports_gesture_edges() {
        let mut activity = ScrollActivity::default();

        assert!(activity.touch());
        assert!(!activity.touch());
        assert!(activity.is_scrolling());
        assert!(activity.settle());
        assert!(!activity.settle());
    }
}
