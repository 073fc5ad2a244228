use axum::{
    body::Body,
    http::{Request, Response, header},
    middleware::Next,
};

/// Middleware to set cache control headers
/// - Embedded assets: cache for a year, they only change with a deploy
/// - Everything else (rendered pages): no caching
pub async fn cache_control_middleware(req: Request<Body>, next: Next) -> Response<Body> {
    let path = req.uri().path().to_string();
    let mut response = next.run(req).await;

    let is_static_file = path.starts_with("/static/")
        || path == "/favicon.ico"
        || path.ends_with(".png")
        || path.ends_with(".jpg")
        || path.ends_with(".svg")
        || path.ends_with(".webp")
        || path.ends_with(".css")
        || path.ends_with(".js")
        || path.ends_with(".woff2");

    let headers = response.headers_mut();

    if is_static_file {
        headers.insert(
            header::CACHE_CONTROL,
            "public, max-age=31536000, immutable".parse().unwrap(),
        );
    } else {
        headers.insert(
            header::CACHE_CONTROL,
            "no-store, no-cache, must-revalidate, proxy-revalidate"
                .parse()
                .unwrap(),
        );
        headers.insert(header::PRAGMA, "no-cache".parse().unwrap());
        headers.insert(header::EXPIRES, "0".parse().unwrap());
    }

    response
}
