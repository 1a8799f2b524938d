#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum OverlayPhase {
    Visible,
    Fading,
    Removed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlaySchedule {
    pub fade_delay_ms: u32,
    pub remove_delay_ms: u32,
}

pub struct LoadingOverlay {
    phase: OverlayPhase,
    schedule: OverlaySchedule,
}

impl LoadingOverlay {
    pub fn new(schedule: OverlaySchedule) -> Self {
        Self {
            phase: OverlayPhase::Visible,
            schedule,
        }
    }

    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    pub fn schedule(&self) -> OverlaySchedule {
        self.schedule
    }

    pub fn advance(&mut self) -> Option<OverlayPhase> {
        let next = match self.phase {
            OverlayPhase::Visible => OverlayPhase::Fading,
            OverlayPhase::Fading => OverlayPhase::Removed,
            OverlayPhase::Removed => return None,
        };
        self.phase = next;
        Some(next)
    }

    pub fn delay_before_next(&self) -> Option<u32> {
        match self.phase {
            OverlayPhase::Visible => Some(self.schedule.fade_delay_ms),
            OverlayPhase::Fading => Some(self.schedule.remove_delay_ms),
            OverlayPhase::Removed => None,
        }
    }
}
