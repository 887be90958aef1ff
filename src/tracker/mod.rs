//! Distance, speed, and calorie calculations for tracked training sessions.

pub mod calories;
pub mod constants;
pub mod report;
pub mod speed;
pub mod types;

pub use calories::{running_calories_spent, swimming_calories_spent, walking_calories_spent};
pub use report::{build_training_report, summarize_training};
pub use speed::{distance, mean_speed, swimming_mean_speed};
pub use types::{
    ActivityType, TrainingInput, TrainingSummary, UNKNOWN_ACTIVITY_MESSAGE, UnknownActivityType,
};
