mod common;

use common::TestApp;
use reqwest::{Client, Method, StatusCode};

#[tokio::test]
async fn options_returns_200_with_empty_body_on_any_path() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    for path in ["/api/health", "/api/items", "/api/items/1", "/not/registered"] {
        let response = client
            .request(Method::OPTIONS, format!("{}{}", app.address, path))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .expect("Missing allow-origin header")
                .to_str()
                .expect("Invalid header value"),
            "*"
        );
        assert!(response
            .text()
            .await
            .expect("Failed to read body")
            .is_empty());
    }
}

#[tokio::test]
async fn cors_headers_are_set_on_every_response() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    // Matched routes, the not-found error path, and the router fallback all
    // pass through the same middleware.
    for path in ["/api/health", "/api/items", "/api/items/999", "/nope"] {
        let response = client
            .get(format!("{}{}", app.address, path))
            .send()
            .await
            .expect("Failed to execute request");

        let headers = response.headers();
        assert_eq!(
            headers
                .get("access-control-allow-origin")
                .expect("Missing allow-origin header")
                .to_str()
                .expect("Invalid header value"),
            "*"
        );
        assert_eq!(
            headers
                .get("access-control-allow-methods")
                .expect("Missing allow-methods header")
                .to_str()
                .expect("Invalid header value"),
            "GET, POST, PUT, DELETE, OPTIONS"
        );
        assert_eq!(
            headers
                .get("access-control-allow-headers")
                .expect("Missing allow-headers header")
                .to_str()
                .expect("Invalid header value"),
            "Content-Type"
        );
    }
}

#[tokio::test]
async fn unregistered_route_returns_router_default_404() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/unknown", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
