use axum::response::IntoResponse;

use crate::template::Template;

#[derive(askama::Template)]
#[template(path = "terms.html")]
pub struct TermsTemplate {
    pub current_path: &'static str,
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(TermsTemplate { current_path: "" })
}
