#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Revealed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealTarget {
    pub state: RevealState,
    pub stagger: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub is_intersecting: bool,
    pub ratio: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Revealed,
    Unchanged,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealMode {
    Observe,
    Immediate,
}

impl RevealMode {
    pub fn choose(observer_available: bool, reduced_motion: bool, target_count: usize) -> Self {
        if observer_available && !reduced_motion && target_count > 0 {
            Self::Observe
        } else {
            Self::Immediate
        }
    }
}

pub struct RevealEngine {
    targets: Vec<RevealTarget>,
}

impl RevealEngine {
    pub fn tag(count: usize, stagger_cycle: u32) -> Self {
        let cycle = stagger_cycle.max(1) as usize;
        let targets = (0..count)
            .map(|index| RevealTarget {
                state: RevealState::Pending,
                stagger: (index % cycle) as u32,
            })
            .collect();

        Self { targets }
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn target(&self, id: usize) -> Option<RevealTarget> {
        self.targets.get(id).copied()
    }

    pub fn targets(&self) -> &[RevealTarget] {
        &self.targets
    }

    pub fn pending_count(&self) -> usize {
        self.targets
            .iter()
            .filter(|target| target.state == RevealState::Pending)
            .count()
    }

    /// The observer's own threshold decides when `is_intersecting` flips, so
    /// the ratio is not checked again here. A caller that sees
    /// [`Transition::Revealed`] must stop observing the element.
    pub fn observe(&mut self, id: usize, report: Intersection) -> Transition {
        let Some(target) = self.targets.get_mut(id) else {
            return Transition::Unchanged;
        };

        if target.state == RevealState::Revealed {
            return Transition::Unchanged;
        }

        if !report.is_intersecting {
            return Transition::Unchanged;
        }

        target.state = RevealState::Revealed;
        Transition::Revealed
    }

    pub fn reveal_all(&mut self) -> Vec<usize> {
        self.targets
            .iter_mut()
            .enumerate()
            .filter(|(_, target)| target.state == RevealState::Pending)
            .map(|(id, target)| {
                target.state = RevealState::Revealed;
                id
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VISIBLE: Intersection = Intersection {
        is_intersecting: true,
        ratio: 0.4,
    };

    #[test]
    fn tagging_assigns_cyclic_stagger_in_document_order() {
        let engine = RevealEngine::tag(13, 12);

        let staggers: Vec<u32> = engine.targets().iter().map(|target| target.stagger).collect();
        assert_eq!(staggers, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0]);
        assert_eq!(engine.pending_count(), 13);
    }

    #[test]
    fn immediate_mode_reveals_all_thirteen() {
        let mut engine = RevealEngine::tag(13, 12);
        assert_eq!(RevealMode::choose(false, false, engine.len()), RevealMode::Immediate);

        let revealed = engine.reveal_all();
        assert_eq!(revealed, (0..13).collect::<Vec<_>>());
        assert!(engine
            .targets()
            .iter()
            .all(|target| target.state == RevealState::Revealed));
        assert_eq!(engine.target(12).map(|target| target.stagger), Some(0));
    }

    #[test]
    fn mode_requires_observer_motion_and_targets() {
        assert_eq!(RevealMode::choose(true, false, 3), RevealMode::Observe);
        assert_eq!(RevealMode::choose(true, false, 0), RevealMode::Immediate);
        assert_eq!(RevealMode::choose(true, true, 3), RevealMode::Immediate);
        assert_eq!(RevealMode::choose(false, false, 3), RevealMode::Immediate);
    }

    #[test]
    fn first_sufficient_report_reveals_once() {
        let mut engine = RevealEngine::tag(2, 12);

        assert_eq!(engine.observe(1, VISIBLE), Transition::Revealed);
        assert_eq!(engine.observe(1, VISIBLE), Transition::Unchanged);
        assert_eq!(engine.target(1).map(|target| target.state), Some(RevealState::Revealed));
        assert_eq!(engine.pending_count(), 1);
    }

    #[test]
    fn non_intersecting_reports_keep_target_pending() {
        let mut engine = RevealEngine::tag(1, 12);

        let outside = Intersection {
            is_intersecting: false,
            ratio: 0.9,
        };

        assert_eq!(engine.observe(0, outside), Transition::Unchanged);
        assert_eq!(engine.target(0).map(|target| target.state), Some(RevealState::Pending));
    }

    #[test]
    fn intersecting_report_below_threshold_still_reveals() {
        let mut engine = RevealEngine::tag(2, 12);

        let rounded = Intersection {
            is_intersecting: true,
            ratio: 0.099_999_99,
        };
        // 7000px section seen through a 630px viewport.
        let tall_section = Intersection {
            is_intersecting: true,
            ratio: 630.0 / 7000.0,
        };

        assert_eq!(engine.observe(0, rounded), Transition::Revealed);
        assert_eq!(engine.observe(1, tall_section), Transition::Revealed);
        assert_eq!(engine.pending_count(), 0);
    }

    #[test]
    fn revealed_never_reverts() {
        let mut engine = RevealEngine::tag(1, 12);
        engine.observe(0, VISIBLE);

        let leaving = Intersection {
            is_intersecting: false,
            ratio: 0.0,
        };
        assert_eq!(engine.observe(0, leaving), Transition::Unchanged);
        assert!(engine.reveal_all().is_empty());
        assert_eq!(engine.target(0).map(|target| target.state), Some(RevealState::Revealed));
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut engine = RevealEngine::tag(1, 12);
        assert_eq!(engine.observe(7, VISIBLE), Transition::Unchanged);
    }

    #[test]
    fn zero_cycle_is_treated_as_one() {
        let engine = RevealEngine::tag(3, 0);
        assert!(engine.targets().iter().all(|target| target.stagger == 0));
    }
}
