use super::Environment;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSpec {
    pub left_percent: f64,
    pub delay_ms: f64,
    pub duration_ms: f64,
}

impl ParticleSpec {
    pub fn style(self) -> String {
        format!(
            "left: {:.2}%; animation-delay: {:.0}ms; animation-duration: {:.0}ms;",
            self.left_percent, self.delay_ms, self.duration_ms
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParticleTiming {
    pub max_delay_ms: u32,
    pub min_duration_ms: u32,
    pub duration_spread_ms: u32,
}

impl ParticleTiming {
    pub fn lifetime_ms(self) -> u32 {
        self.min_duration_ms.saturating_add(self.duration_spread_ms)
    }
}

pub struct ParticleGenerator {
    timing: ParticleTiming,
    max_live: u32,
    live: u32,
    enabled: bool,
}

impl ParticleGenerator {
    pub fn new(timing: ParticleTiming, max_live: u32, env: Environment) -> Self {
        Self {
            timing,
            max_live,
            live: 0,
            enabled: env.allows_motion(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn live(&self) -> u32 {
        self.live
    }

    pub fn timing(&self) -> ParticleTiming {
        self.timing
    }

    /// Draws a new particle from `random`, which yields values in `[0, 1)`.
    /// Returns `None` when disabled or at capacity.
    pub fn spawn(&mut self, mut random: impl FnMut() -> f64) -> Option<ParticleSpec> {
        if !self.enabled || self.live >= self.max_live {
            return None;
        }

        let spec = ParticleSpec {
            left_percent: unit(random()) * 100.0,
            delay_ms: unit(random()) * f64::from(self.timing.max_delay_ms),
            duration_ms: f64::from(self.timing.min_duration_ms)
                + unit(random()) * f64::from(self.timing.duration_spread_ms),
        };
        self.live += 1;
        Some(spec)
    }

    pub fn retire(&mut self) {
        self.live = self.live.saturating_sub(1);
    }
}

fn unit(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMING: ParticleTiming = ParticleTiming {
        max_delay_ms: 2_000,
        min_duration_ms: 3_000,
        duration_spread_ms: 3_000,
    };

    const MOTION: Environment = Environment {
        reduced_motion: false,
        viewport_width: 1280.0,
    };

    #[test]
    fn spawn_scales_random_draws() {
        let mut generator = ParticleGenerator::new(TIMING, 10, MOTION);
        let mut draws = [0.25, 0.5, 1.0].into_iter();

        let spec = generator
            .spawn(|| draws.next().unwrap_or(0.0))
            .expect("enabled generator spawns");

        assert_eq!(spec.left_percent, 25.0);
        assert_eq!(spec.delay_ms, 1_000.0);
        assert_eq!(spec.duration_ms, 6_000.0);
        assert!(spec.duration_ms <= f64::from(TIMING.lifetime_ms()));
        assert_eq!(generator.live(), 1);
    }

    #[test]
    fn reduced_motion_never_spawns() {
        let env = Environment {
            reduced_motion: true,
            ..MOTION
        };
        let mut generator = ParticleGenerator::new(TIMING, 10, env);
        assert!(!generator.is_enabled());

        for _ in 0..50 {
            assert!(generator.spawn(|| 0.5).is_none());
        }
        assert_eq!(generator.live(), 0);
    }

    #[test]
    fn spawning_stops_at_capacity_until_retired() {
        let mut generator = ParticleGenerator::new(TIMING, 2, MOTION);

        assert!(generator.spawn(|| 0.1).is_some());
        assert!(generator.spawn(|| 0.1).is_some());
        assert!(generator.spawn(|| 0.1).is_none());
        generator.retire();
        assert!(generator.spawn(|| 0.1).is_some());
    }

    #[test]
    fn out_of_range_draws_are_clamped() {
        let mut generator = ParticleGenerator::new(TIMING, 2, MOTION);

        let spec = generator.spawn(|| f64::NAN).expect("spawns");
        assert_eq!(spec.left_percent, 0.0);
        assert_eq!(spec.duration_ms, 3_000.0);
    }

    #[test]
    fn style_formats_inline_properties() {
        let spec = ParticleSpec {
            left_percent: 12.5,
            delay_ms: 400.0,
            duration_ms: 4_250.0,
        };
        assert_eq!(
            spec.style(),
            "left: 12.50%; animation-delay: 400ms; animation-duration: 4250ms;"
        );
    }
}
