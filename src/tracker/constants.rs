//! Conversion ratios and formula coefficients shared by every calculator.

/// Average stride length in meters used to turn actions into distance.
pub const STEP_LENGTH_M: f64 = 0.65;
pub const METERS_PER_KM: f64 = 1000.0;
pub const MINUTES_PER_HOUR: f64 = 60.0;
/// Multiply a km/h value by this to get m/s.
pub const KMH_TO_MPS: f64 = 0.278;
pub const CM_PER_M: f64 = 100.0;

pub const RUNNING_SPEED_MULTIPLIER: f64 = 18.0;
pub const RUNNING_SPEED_SHIFT: f64 = 1.79;

pub const WALKING_WEIGHT_MULTIPLIER: f64 = 0.035;
pub const WALKING_HEIGHT_SPEED_MULTIPLIER: f64 = 0.029;

pub const SWIMMING_SPEED_SHIFT: f64 = 1.1;
pub const SWIMMING_WEIGHT_MULTIPLIER: f64 = 2.0;
