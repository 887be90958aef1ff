use crate::tracker::constants::{METERS_PER_KM, STEP_LENGTH_M};

/// Distance in kilometers covered by `action` steps or strokes.
pub fn distance(action: i64) -> f64 {
    action as f64 * STEP_LENGTH_M / METERS_PER_KM
}

/// Average speed in km/h over the whole session.
///
/// A zero `duration` yields `0.0` instead of an infinite or NaN speed.
pub fn mean_speed(action: i64, duration: f64) -> f64 {
    if duration == 0.0 {
        return 0.0;
    }
    distance(action) / duration
}

/// Average swimming speed in km/h derived from pool geometry rather than
/// stride length. Same zero-duration rule as [`mean_speed`].
pub fn swimming_mean_speed(pool_length: i64, pool_count: i64, duration: f64) -> f64 {
    if duration == 0.0 {
        return 0.0;
    }
    pool_length as f64 * pool_count as f64 / METERS_PER_KM / duration
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_scales_with_step_length() {
        assert_eq!(distance(0), 0.0);
        assert!((distance(1000) - 0.65).abs() < 1e-12);
        assert!((distance(20_000) - 13.0).abs() < 1e-9);
    }

    #[test]
    fn zero_duration_yields_zero_speed() {
        assert_eq!(mean_speed(5000, 0.0), 0.0);
        assert_eq!(swimming_mean_speed(25, 40, 0.0), 0.0);
    }

    #[test]
    fn mean_speed_divides_distance_by_duration() {
        let speed = mean_speed(9000, 0.5);
        assert!((speed - distance(9000) / 0.5).abs() < 1e-12);
    }

    #[test]
    fn swimming_speed_ignores_stride_model() {
        assert!((swimming_mean_speed(25, 40, 1.0) - 1.0).abs() < 1e-12);
        assert!((swimming_mean_speed(50, 30, 0.75) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn negative_inputs_are_not_rejected() {
        assert!(distance(-1000) < 0.0);
        assert!(mean_speed(1000, -1.0) < 0.0);
    }
}
