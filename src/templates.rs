use crate::tracker::TrainingSummary;

fn format_duration(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round().max(0.0) as u64;
    let whole_hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if whole_hours > 0 {
        format!("{:.2} h ({}h {:02}m)", hours, whole_hours, minutes)
    } else {
        format!("{:.2} h ({}m)", hours, minutes)
    }
}

fn format_speed(speed_kmh: f64) -> String {
    if speed_kmh > 0.0 {
        let total_minutes = 60.0 / speed_kmh;
        let whole_minutes = total_minutes.floor();
        let mut seconds = ((total_minutes - whole_minutes) * 60.0).round();

        // Rounding can push seconds to 60.
        let mut minutes = whole_minutes as u64;
        if seconds >= 60.0 {
            minutes += 1;
            seconds = 0.0;
        }

        format!("{:.2} km/h ({}:{:02} min/km)", speed_kmh, minutes, seconds as u64)
    } else {
        format!("{:.2} km/h", speed_kmh)
    }
}

fn summary_card(label: &str, value: &str) -> String {
    format!(
        "<div class=\"summary-card\"><p class=\"label\">{label}</p><p class=\"value\">{value}</p></div>"
    )
}

pub fn render_landing_page() -> String {
    include_str!("../templates/landing.html").to_string()
}

pub fn render_training_summary(summary: &TrainingSummary) -> String {
    let mut body = String::new();

    body.push_str("<section class=\"results-card\">");
    body.push_str(&format!(
        "<div class=\"results-header\"><div><p class=\"eyebrow\">Training Overview</p><h2>{}</h2></div>",
        summary.activity
    ));
    body.push_str("<a class=\"cta\" href=\"/\">New session</a></div>");

    body.push_str("<div class=\"summary-grid\">");
    body.push_str(&summary_card("Activity type", summary.activity.as_str()));
    body.push_str(&summary_card("Duration", &format_duration(summary.duration)));
    body.push_str(&summary_card(
        "Distance",
        &format!("{:.2} km", summary.distance),
    ));
    body.push_str(&summary_card("Speed", &format_speed(summary.speed)));
    body.push_str(&summary_card(
        "Calories burned",
        &format!("{:.2}", summary.calories),
    ));
    body.push_str("</div>");

    body.push_str(&format!("<pre class=\"report\">{summary}</pre>"));
    body.push_str("</section>");
    body
}
