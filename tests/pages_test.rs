use axum::http::StatusCode;

mod helpers;

#[tokio::test]
async fn home_page_renders_hero_and_availability() {
    let app = helpers::router(helpers::test_config());
    let (status, body) = helpers::get(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Where Your Musical Journey Starts"));
    assert!(body.contains("Free Demo Lesson"));
    // Seasonal hero: some season class and background are always present
    assert!(body.contains("season-"));
    assert!(body.contains("_bg_lrg.png"));
    // Demo availability slate
    assert!(body.contains("Monday 9:30 PM to 10:00 PM"));
    assert!(body.contains("Saturday"));
}

#[tokio::test]
async fn home_page_lists_faq_entries() {
    let app = helpers::router(helpers::test_config());
    let (_, body) = helpers::get(app, "/").await;

    assert!(body.contains("What ages do you teach?"));
    assert!(body.contains("How long are lessons?"));
    assert!(body.contains("cancellation policy"));
}

#[tokio::test]
async fn about_page_shows_the_teacher() {
    let app = helpers::router(helpers::test_config());
    let (status, body) = helpers::get(app, "/about").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Teaching music with heart and patience"));
    assert!(body.contains("Kaeden Ottenbreit"));
    assert!(body.contains("Piano, Guitar, Bass"));
}

#[tokio::test]
async fn pricing_page_shows_the_monthly_rate() {
    let app = helpers::router(helpers::test_config());
    let (status, body) = helpers::get(app, "/pricing").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Transparent pricing"));
    assert!(body.contains("$125"));
    assert!(body.contains("Commitment: current semester"));
    assert!(body.contains("Final pricing confirmed during enrollment"));
}

#[tokio::test]
async fn legal_pages_render() {
    let app = helpers::router(helpers::test_config());
    let (status, body) = helpers::get(app.clone(), "/privacy").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Privacy Policy"));
    assert!(body.contains("Last updated: January 1, 2025"));

    let (status, body) = helpers::get(app, "/terms").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Terms of Service"));
}

#[tokio::test]
async fn navigation_marks_the_current_page() {
    let app = helpers::router(helpers::test_config());
    let (_, body) = helpers::get(app, "/about").await;

    assert!(body.contains(r#"href="/about" class="active" aria-current="page""#));
}

#[tokio::test]
async fn unknown_path_renders_not_found_page() {
    let app = helpers::router(helpers::test_config());
    let (status, body) = helpers::get(app, "/no-such-page").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page not found"));
}

#[tokio::test]
async fn health_probes_respond() {
    let app = helpers::router(helpers::test_config());

    let (status, body) = helpers::get(app.clone(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("ok"));

    let (status, body) = helpers::get(app, "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("disabled"));
}

#[tokio::test]
async fn static_assets_are_served() {
    let app = helpers::router(helpers::test_config());
    let (status, body) = helpers::get(app, "/static/css/site.css").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("site-nav"));
}
