use std::fs;

use axum::body::{Body, to_bytes};
use axum::http::Request;
use tower::ServiceExt;

use super::*;

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn temp_site(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("portfolio-routes-{name}-{}", std::process::id()));
    fs::create_dir_all(dir.join("pkg")).unwrap();
    fs::create_dir_all(dir.join("images")).unwrap();
    fs::write(dir.join("pkg").join("portfolio.css"), "body{}").unwrap();
    fs::write(dir.join("images").join("preview.jpg"), b"jpg").unwrap();
    dir
}

#[tokio::test]
async fn healthz_returns_ok() {
    let resp = base_routes().oneshot(get_request("/healthz")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn pkg_is_served_from_site_root() {
    let site = temp_site("pkg");
    let resp = static_routes(&site, &site).oneshot(get_request("/pkg/portfolio.css")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    fs::remove_dir_all(site).unwrap();
}

#[tokio::test]
async fn images_fall_back_to_assets_dir() {
    let site = temp_site("images");
    let resp = static_routes(&site, &site).oneshot(get_request("/images/preview.jpg")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    fs::remove_dir_all(site).unwrap();
}

#[tokio::test]
async fn missing_image_is_not_found() {
    let site = temp_site("missing");
    let resp = static_routes(&site, &site).oneshot(get_request("/images/nope.jpg")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    fs::remove_dir_all(site).unwrap();
}

fn leptos_options(site_root: &Path) -> LeptosOptions {
    LeptosOptions::builder()
        .output_name("portfolio")
        .site_root(site_root.to_string_lossy().to_string())
        .build()
}

#[tokio::test]
async fn root_serves_server_rendered_portfolio() {
    let site = temp_site("root");
    let app = site_router(leptos_options(&site), None);

    let resp = app.oneshot(get_request("/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8_lossy(&body);
    assert!(html.contains("projects-container"));
    assert!(html.contains(r#"id="theme-toggle""#));
    // Saved theme is applied from the head, before the body paints.
    let head_end = html.find("</head>").unwrap();
    assert!(html[..head_end].contains(r#"localStorage.getItem("theme")"#));
    fs::remove_dir_all(site).unwrap();
}

#[tokio::test]
async fn site_router_serves_images_from_assets_override() {
    let site = temp_site("site-root");
    let assets = temp_site("assets-override");
    fs::write(assets.join("images").join("only-here.jpg"), b"jpg").unwrap();
    let app = site_router(leptos_options(&site), Some(assets.clone()));

    let resp = app.oneshot(get_request("/images/only-here.jpg")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    fs::remove_dir_all(site).unwrap();
    fs::remove_dir_all(assets).unwrap();
}
