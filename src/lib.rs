pub mod templates;
pub mod tracker;

use axum::{
    Form, Router,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use templates::{render_landing_page, render_training_summary};
use tracker::{
    ActivityType, TrainingInput, UnknownActivityType, build_training_report, summarize_training,
};

/// Urlencoded form posted by the landing page. Fields an activity does not use
/// may be omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct TrainingForm {
    pub activity: String,
    #[serde(default)]
    pub action: i64,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub pool_length: i64,
    #[serde(default)]
    pub pool_count: i64,
}

impl TrainingForm {
    fn input(&self) -> TrainingInput {
        TrainingInput {
            action: self.action,
            duration: self.duration,
            weight: self.weight,
            height: self.height,
            pool_length: self.pool_length,
            pool_count: self.pool_count,
        }
    }
}

impl IntoResponse for UnknownActivityType {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

pub fn build_app() -> Router {
    Router::new()
        .route("/", get(landing_page))
        .route("/report", post(handle_report))
        .route("/report/text", post(handle_text_report))
}

async fn landing_page() -> Html<String> {
    Html(render_landing_page())
}

async fn handle_report(
    Form(form): Form<TrainingForm>,
) -> Result<Html<String>, UnknownActivityType> {
    let activity: ActivityType = form.activity.parse()?;
    tracing::info!(%activity, action = form.action, duration = form.duration, "building training report");

    let summary = summarize_training(activity, &form.input());
    Ok(Html(render_training_summary(&summary)))
}

async fn handle_text_report(Form(form): Form<TrainingForm>) -> String {
    tracing::info!(activity = %form.activity, "building text training report");
    build_training_report(
        form.action,
        &form.activity,
        form.duration,
        form.weight,
        form.height,
        form.pool_length,
        form.pool_count,
    )
}
