use axum::response::IntoResponse;

use crate::template::Template;

#[derive(askama::Template)]
#[template(path = "pricing.html")]
pub struct PricingTemplate {
    pub current_path: &'static str,
    pub monthly_price: &'static str,
    pub included_features: &'static [&'static str],
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(PricingTemplate {
        current_path: "pricing",
        monthly_price: "$125",
        included_features: &[
            "30-minute one-on-one lessons",
            "Personalized lesson plans",
            "Progress tracking and feedback",
        ],
    })
}
