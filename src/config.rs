use crate::logging::LogLevel;
use serde::Deserialize;

pub const CONFIG_SCRIPT_ID: &str = "effects-config";

const DEFAULT_MENU_BREAKPOINT: f64 = 768.0;
const DEFAULT_REVEAL_ROOT_MARGIN: &str = "0px 0px -10% 0px";
const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
const DEFAULT_REVEAL_STAGGER_CYCLE: u32 = 12;
const DEFAULT_OVERLAY_FADE_DELAY_MS: u32 = 500;
const DEFAULT_OVERLAY_REMOVE_DELAY_MS: u32 = 500;
const DEFAULT_PARALLAX_BASE_SPEED: f64 = 0.1;
const DEFAULT_PARALLAX_SPEED_STEP: f64 = 0.1;
const DEFAULT_HEADER_SCROLLED_THRESHOLD: f64 = 50.0;
const DEFAULT_HEADER_HIDE_THRESHOLD: f64 = 200.0;
const DEFAULT_SCROLL_END_IDLE_MS: u32 = 150;
const DEFAULT_TILT_DIVISOR: f64 = 10.0;
const DEFAULT_RIPPLE_DURATION_MS: u32 = 600;
const DEFAULT_FORM_ACCENT_COLOR: &str = "#00d4ff";
const DEFAULT_FORM_ERROR_COLOR: &str = "#ff4757";
const DEFAULT_FORM_SENDING_MS: u32 = 2_000;
const DEFAULT_PARTICLE_INTERVAL_MS: u32 = 300;
const DEFAULT_PARTICLE_MAX_DELAY_MS: u32 = 2_000;
const DEFAULT_PARTICLE_MIN_DURATION_MS: u32 = 3_000;
const DEFAULT_PARTICLE_DURATION_SPREAD_MS: u32 = 3_000;
const DEFAULT_PARTICLE_MAX_LIVE: u32 = 40;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const MENU_BREAKPOINT_BOUNDS: (f64, f64) = (320.0, 4_096.0);
const REVEAL_THRESHOLD_BOUNDS: (f64, f64) = (0.0, 1.0);
const REVEAL_STAGGER_CYCLE_BOUNDS: (u32, u32) = (1, 64);
const OVERLAY_DELAY_MS_BOUNDS: (u32, u32) = (0, 10_000);
const PARALLAX_BASE_SPEED_BOUNDS: (f64, f64) = (0.0, 2.0);
const PARALLAX_SPEED_STEP_BOUNDS: (f64, f64) = (0.001, 1.0);
const HEADER_THRESHOLD_BOUNDS: (f64, f64) = (0.0, 5_000.0);
const SCROLL_END_IDLE_MS_BOUNDS: (u32, u32) = (16, 2_000);
const TILT_DIVISOR_BOUNDS: (f64, f64) = (1.0, 100.0);
const RIPPLE_DURATION_MS_BOUNDS: (u32, u32) = (50, 5_000);
const FORM_SENDING_MS_BOUNDS: (u32, u32) = (0, 30_000);
const PARTICLE_INTERVAL_MS_BOUNDS: (u32, u32) = (16, 60_000);
const PARTICLE_MAX_DELAY_MS_BOUNDS: (u32, u32) = (0, 10_000);
const PARTICLE_MIN_DURATION_MS_BOUNDS: (u32, u32) = (100, 30_000);
const PARTICLE_DURATION_SPREAD_MS_BOUNDS: (u32, u32) = (0, 30_000);
const PARTICLE_MAX_LIVE_BOUNDS: (u32, u32) = (1, 500);

fn default_reveal_selectors() -> Vec<String> {
    [".section", ".card", ".section-title", "[data-reveal]"]
        .iter()
        .map(|selector| selector.to_string())
        .collect()
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EffectsConfig {
    pub menu_breakpoint: f64,
    pub reveal_selectors: Vec<String>,
    pub reveal_root_margin: String,
    pub reveal_threshold: f64,
    pub reveal_stagger_cycle: u32,
    pub overlay_fade_delay_ms: u32,
    pub overlay_remove_delay_ms: u32,
    pub parallax_base_speed: f64,
    pub parallax_speed_step: f64,
    pub header_scrolled_threshold: f64,
    pub header_hide_threshold: f64,
    pub scroll_end_idle_ms: u32,
    pub tilt_divisor: f64,
    pub ripple_duration_ms: u32,
    pub form_accent_color: String,
    pub form_error_color: String,
    pub form_sending_ms: u32,
    pub particle_interval_ms: u32,
    pub particle_max_delay_ms: u32,
    pub particle_min_duration_ms: u32,
    pub particle_duration_spread_ms: u32,
    pub particle_max_live: u32,
    pub log_level: LogLevel,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            menu_breakpoint: DEFAULT_MENU_BREAKPOINT,
            reveal_selectors: default_reveal_selectors(),
            reveal_root_margin: DEFAULT_REVEAL_ROOT_MARGIN.to_string(),
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            reveal_stagger_cycle: DEFAULT_REVEAL_STAGGER_CYCLE,
            overlay_fade_delay_ms: DEFAULT_OVERLAY_FADE_DELAY_MS,
            overlay_remove_delay_ms: DEFAULT_OVERLAY_REMOVE_DELAY_MS,
            parallax_base_speed: DEFAULT_PARALLAX_BASE_SPEED,
            parallax_speed_step: DEFAULT_PARALLAX_SPEED_STEP,
            header_scrolled_threshold: DEFAULT_HEADER_SCROLLED_THRESHOLD,
            header_hide_threshold: DEFAULT_HEADER_HIDE_THRESHOLD,
            scroll_end_idle_ms: DEFAULT_SCROLL_END_IDLE_MS,
            tilt_divisor: DEFAULT_TILT_DIVISOR,
            ripple_duration_ms: DEFAULT_RIPPLE_DURATION_MS,
            form_accent_color: DEFAULT_FORM_ACCENT_COLOR.to_string(),
            form_error_color: DEFAULT_FORM_ERROR_COLOR.to_string(),
            form_sending_ms: DEFAULT_FORM_SENDING_MS,
            particle_interval_ms: DEFAULT_PARTICLE_INTERVAL_MS,
            particle_max_delay_ms: DEFAULT_PARTICLE_MAX_DELAY_MS,
            particle_min_duration_ms: DEFAULT_PARTICLE_MIN_DURATION_MS,
            particle_duration_spread_ms: DEFAULT_PARTICLE_DURATION_SPREAD_MS,
            particle_max_live: DEFAULT_PARTICLE_MAX_LIVE,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl EffectsConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let parsed: Self = serde_json::from_str(raw)?;
        Ok(parsed.sanitized())
    }

    pub fn sanitized(self) -> Self {
        Self {
            menu_breakpoint: within(self.menu_breakpoint, DEFAULT_MENU_BREAKPOINT, MENU_BREAKPOINT_BOUNDS),
            reveal_selectors: non_blank_list(self.reveal_selectors, default_reveal_selectors),
            reveal_root_margin: non_blank(self.reveal_root_margin, DEFAULT_REVEAL_ROOT_MARGIN),
            reveal_threshold: within(self.reveal_threshold, DEFAULT_REVEAL_THRESHOLD, REVEAL_THRESHOLD_BOUNDS),
            reveal_stagger_cycle: within(
                self.reveal_stagger_cycle,
                DEFAULT_REVEAL_STAGGER_CYCLE,
                REVEAL_STAGGER_CYCLE_BOUNDS,
            ),
            overlay_fade_delay_ms: within(
                self.overlay_fade_delay_ms,
                DEFAULT_OVERLAY_FADE_DELAY_MS,
                OVERLAY_DELAY_MS_BOUNDS,
            ),
            overlay_remove_delay_ms: within(
                self.overlay_remove_delay_ms,
                DEFAULT_OVERLAY_REMOVE_DELAY_MS,
                OVERLAY_DELAY_MS_BOUNDS,
            ),
            parallax_base_speed: within(
                self.parallax_base_speed,
                DEFAULT_PARALLAX_BASE_SPEED,
                PARALLAX_BASE_SPEED_BOUNDS,
            ),
            parallax_speed_step: within(
                self.parallax_speed_step,
                DEFAULT_PARALLAX_SPEED_STEP,
                PARALLAX_SPEED_STEP_BOUNDS,
            ),
            header_scrolled_threshold: within(
                self.header_scrolled_threshold,
                DEFAULT_HEADER_SCROLLED_THRESHOLD,
                HEADER_THRESHOLD_BOUNDS,
            ),
            header_hide_threshold: within(
                self.header_hide_threshold,
                DEFAULT_HEADER_HIDE_THRESHOLD,
                HEADER_THRESHOLD_BOUNDS,
            ),
            scroll_end_idle_ms: within(self.scroll_end_idle_ms, DEFAULT_SCROLL_END_IDLE_MS, SCROLL_END_IDLE_MS_BOUNDS),
            tilt_divisor: within(self.tilt_divisor, DEFAULT_TILT_DIVISOR, TILT_DIVISOR_BOUNDS),
            ripple_duration_ms: within(
                self.ripple_duration_ms,
                DEFAULT_RIPPLE_DURATION_MS,
                RIPPLE_DURATION_MS_BOUNDS,
            ),
            form_accent_color: non_blank(self.form_accent_color, DEFAULT_FORM_ACCENT_COLOR),
            form_error_color: non_blank(self.form_error_color, DEFAULT_FORM_ERROR_COLOR),
            form_sending_ms: within(self.form_sending_ms, DEFAULT_FORM_SENDING_MS, FORM_SENDING_MS_BOUNDS),
            particle_interval_ms: within(
                self.particle_interval_ms,
                DEFAULT_PARTICLE_INTERVAL_MS,
                PARTICLE_INTERVAL_MS_BOUNDS,
            ),
            particle_max_delay_ms: within(
                self.particle_max_delay_ms,
                DEFAULT_PARTICLE_MAX_DELAY_MS,
                PARTICLE_MAX_DELAY_MS_BOUNDS,
            ),
            particle_min_duration_ms: within(
                self.particle_min_duration_ms,
                DEFAULT_PARTICLE_MIN_DURATION_MS,
                PARTICLE_MIN_DURATION_MS_BOUNDS,
            ),
            particle_duration_spread_ms: within(
                self.particle_duration_spread_ms,
                DEFAULT_PARTICLE_DURATION_SPREAD_MS,
                PARTICLE_DURATION_SPREAD_MS_BOUNDS,
            ),
            particle_max_live: within(self.particle_max_live, DEFAULT_PARTICLE_MAX_LIVE, PARTICLE_MAX_LIVE_BOUNDS),
            log_level: self.log_level,
        }
    }
}

fn within<T: PartialOrd + Copy>(value: T, default: T, bounds: (T, T)) -> T {
    if bounds.0 <= value && value <= bounds.1 {
        value
    } else {
        default
    }
}

fn non_blank(value: String, default: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn non_blank_list(values: Vec<String>, default: fn() -> Vec<String>) -> Vec<String> {
    let kept: Vec<String> = values
        .into_iter()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect();
    if kept.is_empty() {
        default()
    } else {
        kept
    }
}
