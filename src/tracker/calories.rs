//! Per-activity calorie formulas. Each one derives its own speed from the raw
//! inputs, so a zero duration feeds a zero speed into the formula; the shift
//! terms still contribute in that case.

use crate::tracker::constants::{
    CM_PER_M, KMH_TO_MPS, METERS_PER_KM, MINUTES_PER_HOUR, RUNNING_SPEED_MULTIPLIER,
    RUNNING_SPEED_SHIFT, SWIMMING_SPEED_SHIFT, SWIMMING_WEIGHT_MULTIPLIER,
    WALKING_HEIGHT_SPEED_MULTIPLIER, WALKING_WEIGHT_MULTIPLIER,
};
use crate::tracker::speed::{mean_speed, swimming_mean_speed};

/// Calories burned while running `action` steps over `duration` hours.
pub fn running_calories_spent(action: i64, weight: f64, duration: f64) -> f64 {
    let speed = mean_speed(action, duration);
    RUNNING_SPEED_MULTIPLIER * speed * RUNNING_SPEED_SHIFT * weight / METERS_PER_KM
        * duration
        * MINUTES_PER_HOUR
}

/// Calories burned while walking. `height` is in centimeters.
pub fn walking_calories_spent(action: i64, duration: f64, weight: f64, height: f64) -> f64 {
    let speed_mps = mean_speed(action, duration) * KMH_TO_MPS;
    let height_m = height / CM_PER_M;

    (WALKING_WEIGHT_MULTIPLIER * weight
        + (speed_mps.powi(2) / height_m) * WALKING_HEIGHT_SPEED_MULTIPLIER * weight)
        * duration
        * MINUTES_PER_HOUR
}

/// Calories burned while swimming `pool_count` lengths of a `pool_length`
/// meter pool.
pub fn swimming_calories_spent(
    pool_length: i64,
    pool_count: i64,
    duration: f64,
    weight: f64,
) -> f64 {
    let speed = swimming_mean_speed(pool_length, pool_count, duration);
    (speed + SWIMMING_SPEED_SHIFT) * SWIMMING_WEIGHT_MULTIPLIER * weight * duration
}
