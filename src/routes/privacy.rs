use axum::response::IntoResponse;

use crate::template::Template;

#[derive(askama::Template)]
#[template(path = "privacy.html")]
pub struct PrivacyTemplate {
    pub current_path: &'static str,
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(PrivacyTemplate { current_path: "" })
}
