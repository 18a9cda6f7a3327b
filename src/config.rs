//! Application-level configuration constants.

// Default values for input fields
pub const DEFAULT_RPM: f64 = 120.0;
pub const DEFAULT_WEIGHT_KG: f64 = 75.0;
pub const DEFAULT_RESISTANCE: u8 = 5;
pub const DEFAULT_DURATION_SEC: f64 = 600.0;
pub const DEFAULT_BATTERY_CAPACITY_WH: f64 = 50.0;

// Min/Max limits for input fields
pub const MIN_RPM: f64 = 1.0;
pub const MAX_RPM: f64 = 200.0;
pub const MIN_WEIGHT_KG: f64 = 30.0;
pub const MAX_WEIGHT_KG: f64 = 200.0;
pub const MIN_RESISTANCE: u8 = 1;
pub const MAX_RESISTANCE: u8 = 10;
pub const MIN_DURATION_SEC: f64 = 1.0;
/// One week.
pub const MAX_DURATION_SEC: f64 = 7.0 * 86_400.0;
pub const MIN_BATTERY_CAPACITY_WH: f64 = 1.0;

// Animated counters
pub const ANIMATION_DURATION_MS: f64 = 600.0;
pub const FRAME_INTERVAL_MS: u32 = 16;
/// Control points of the cubic-bezier easing curve (x1, y1, x2, y2).
pub const EASING_CURVE: (f64, f64, f64, f64) = (0.2, 0.8, 0.2, 1.0);

// Logging
#[cfg(debug_assertions)]
pub const LOG_LEVEL: log::LevelFilter = log::LevelFilter::Debug;
#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

// Site identity
pub const APP_NAME: &str = "Pedal Generator Simulator";
pub const APP_SHORT_NAME: &str = "Pedal Gen";
pub const SITE_URL: &str = "https://pedal-generator.vercel.app";
