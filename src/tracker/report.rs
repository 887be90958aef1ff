use crate::tracker::calories::{
    running_calories_spent, swimming_calories_spent, walking_calories_spent,
};
use crate::tracker::speed::{distance, mean_speed, swimming_mean_speed};
use crate::tracker::types::{ActivityType, TrainingInput, TrainingSummary, UNKNOWN_ACTIVITY_MESSAGE};

/// Pick the speed and calorie formulas for `activity` and compute the summary.
///
/// Distance always comes from the stride model, swimming included; only the
/// swimming speed and calories use the pool geometry.
pub fn summarize_training(activity: ActivityType, input: &TrainingInput) -> TrainingSummary {
    let (speed, calories) = match activity {
        ActivityType::Running => (
            mean_speed(input.action, input.duration),
            running_calories_spent(input.action, input.weight, input.duration),
        ),
        ActivityType::Walking => (
            mean_speed(input.action, input.duration),
            walking_calories_spent(input.action, input.duration, input.weight, input.height),
        ),
        ActivityType::Swimming => (
            swimming_mean_speed(input.pool_length, input.pool_count, input.duration),
            swimming_calories_spent(
                input.pool_length,
                input.pool_count,
                input.duration,
                input.weight,
            ),
        ),
    };

    let summary = TrainingSummary {
        activity,
        duration: input.duration,
        distance: distance(input.action),
        speed,
        calories,
    };
    tracing::debug!(
        activity = %summary.activity,
        distance = summary.distance,
        speed = summary.speed,
        calories = summary.calories,
        "computed training summary"
    );
    summary
}

/// Render the text report for a session, or [`UNKNOWN_ACTIVITY_MESSAGE`] when
/// `activity` is not a known tag.
pub fn build_training_report(
    action: i64,
    activity: &str,
    duration: f64,
    weight: f64,
    height: f64,
    pool_length: i64,
    pool_count: i64,
) -> String {
    let activity = match activity.parse::<ActivityType>() {
        Ok(activity) => activity,
        Err(err) => {
            tracing::debug!(tag = %err.tag, "unrecognized activity tag");
            return UNKNOWN_ACTIVITY_MESSAGE.to_string();
        }
    };

    let input = TrainingInput {
        action,
        duration,
        weight,
        height,
        pool_length,
        pool_count,
    };
    summarize_training(activity, &input).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> TrainingInput {
        TrainingInput {
            action: 1000,
            duration: 1.0,
            weight: 70.0,
            height: 175.0,
            pool_length: 25,
            pool_count: 40,
        }
    }

    #[test]
    fn running_and_walking_share_stride_speed() {
        let input = sample_input();
        let running = summarize_training(ActivityType::Running, &input);
        let walking = summarize_training(ActivityType::Walking, &input);
        assert_eq!(running.speed, walking.speed);
        assert_eq!(running.distance, walking.distance);
        assert_ne!(running.calories, walking.calories);
    }

    #[test]
    fn swimming_uses_pool_speed_but_stride_distance() {
        let summary = summarize_training(ActivityType::Swimming, &sample_input());
        assert!((summary.speed - 1.0).abs() < 1e-12);
        assert!((summary.distance - 0.65).abs() < 1e-12);
    }

    #[test]
    fn unknown_tag_returns_sentinel() {
        assert_eq!(
            build_training_report(1000, "Cycling", 1.0, 70.0, 175.0, 25, 40),
            UNKNOWN_ACTIVITY_MESSAGE
        );
    }
}
