pub const LABEL_LIFT_TRANSFORM: &str = "translateY(-5px)";
pub const SUBMIT_PRESSED_TRANSFORM: &str = "scale(0.95)";
pub const SENDING_LABEL: &str = "Sending...";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldTone {
    Accent,
    Error,
    Neutral,
}

impl FieldTone {
    pub fn classify(valid: bool, value: &str) -> Self {
        if value.is_empty() {
            Self::Neutral
        } else if valid {
            Self::Accent
        } else {
            Self::Error
        }
    }

    pub fn color<'a>(self, accent: &'a str, error: &'a str) -> Option<&'a str> {
        match self {
            Self::Accent => Some(accent),
            Self::Error => Some(error),
            Self::Neutral => None,
        }
    }
}

pub fn label_lifted(focused: bool, value: &str) -> bool {
    focused || !value.is_empty()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Sending,
}

#[derive(Debug)]
pub struct SubmitState {
    phase: SubmitPhase,
}

impl Default for SubmitState {
    fn default() -> Self {
        Self {
            phase: SubmitPhase::Idle,
        }
    }
}

impl SubmitState {
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Returns `false` for a submit that arrives while already sending.
    pub fn begin(&mut self) -> bool {
        if self.phase == SubmitPhase::Sending {
            return false;
        }
        self.phase = SubmitPhase::Sending;
        true
    }

    pub fn finish(&mut self) {
        self.phase = SubmitPhase::Idle;
    }
}
