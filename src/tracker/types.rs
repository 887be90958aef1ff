use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Text returned in place of a report when the activity tag is not recognized.
pub const UNKNOWN_ACTIVITY_MESSAGE: &str = "unknown activity type";

/// Closed set of activities the tracker knows formulas for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ActivityType {
    Running,
    Walking,
    Swimming,
}

impl ActivityType {
    pub const ALL: [ActivityType; 3] = [
        ActivityType::Running,
        ActivityType::Walking,
        ActivityType::Swimming,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Running => "Running",
            ActivityType::Walking => "Walking",
            ActivityType::Swimming => "Swimming",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The activity tag did not name any [`ActivityType`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown activity type")]
pub struct UnknownActivityType {
    pub tag: String,
}

impl FromStr for ActivityType {
    type Err = UnknownActivityType;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        ActivityType::ALL
            .into_iter()
            .find(|activity| activity.as_str() == tag)
            .ok_or_else(|| UnknownActivityType {
                tag: tag.to_string(),
            })
    }
}

/// Raw session measurements. Fields an activity does not use are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingInput {
    /// Steps for running and walking, strokes for swimming.
    pub action: i64,
    /// Session length in hours.
    pub duration: f64,
    /// Body weight in kilograms.
    pub weight: f64,
    /// Body height in centimeters (walking only).
    pub height: f64,
    /// Pool length in meters (swimming only).
    pub pool_length: i64,
    /// Number of times the pool was crossed (swimming only).
    pub pool_count: i64,
}

/// Derived metrics for one session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingSummary {
    pub activity: ActivityType,
    pub duration: f64,
    /// Kilometers, always from the stride model.
    pub distance: f64,
    /// Kilometers per hour.
    pub speed: f64,
    pub calories: f64,
}

impl fmt::Display for TrainingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Activity type: {}", self.activity)?;
        writeln!(f, "Duration: {:.2} h.", self.duration)?;
        writeln!(f, "Distance: {:.2} km.", self.distance)?;
        writeln!(f, "Speed: {:.2} km/h", self.speed)?;
        writeln!(f, "Calories burned: {:.2}", self.calories)
    }
}
