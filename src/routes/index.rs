use axum::extract::State;
use axum::response::IntoResponse;

use cedarheights_enrollment::TimeSlot;

use crate::routes::AppState;
use crate::template::Template;

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub current_path: &'static str,
    pub season_class: String,
    pub season_background: &'static str,
    pub slots: Vec<TimeSlot>,
}

pub async fn page(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    let season = template.season;

    template.render(IndexTemplate {
        current_path: "home",
        season_class: season.css_class(),
        season_background: season.background_image(),
        slots: app.schedule.slots().to_vec(),
    })
}
