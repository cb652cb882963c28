//! Router tests: every route exercised in-process with `oneshot`

use std::path::Path;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use cashvm_server::{OpcodeServer, ServerConfig};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

fn router_with(dirs: &[&Path]) -> Router {
    let config = ServerConfig::default().with_static_dirs(dirs.iter().copied());
    OpcodeServer::new(config).build_router()
}

fn router() -> Router {
    router_with(&[])
}

async fn get(router: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    router.oneshot(request).await.unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

// ==================== Redirect ====================

#[tokio::test]
async fn test_root_redirects() {
    let response = get(router(), "/").await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/opcodes");
}

#[tokio::test]
async fn test_root_redirect_keeps_query() {
    let response = get(router(), "/?q=hash&x=1").await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/opcodes?q=hash&x=1");
}

// ==================== Entry document ====================

#[tokio::test]
async fn test_builtin_entry_document() {
    let response = get(router(), "/opcodes").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<title>CashVM Opcodes | Bitcoin Cash</title>"));
    assert!(html.contains("href=\"#OP_CHECKSIG\""));
}

#[tokio::test]
async fn test_entry_document_subpath_and_search() {
    let response = get(router(), "/opcodes/anything/else?q=checkdatasig").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("2 matching opcodes"));
}

#[tokio::test]
async fn test_deployed_index_wins() {
    let empty = TempDir::new().unwrap();
    let site = TempDir::new().unwrap();
    std::fs::write(site.path().join("index.html"), "<html>deployed</html>").unwrap();

    let response = get(router_with(&[empty.path(), site.path()]), "/opcodes").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/html; charset=utf-8"
    );
    assert_eq!(body_text(response).await, "<html>deployed</html>");
}

// ==================== API ====================

#[tokio::test]
async fn test_api_table() {
    let json = body_json(get(router(), "/api/opcodes").await).await;
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 256);
    assert_eq!(rows[0xac]["name"], "OP_CHECKSIG");
    assert_eq!(rows[0xac]["byte"], "0xAC");
}

#[tokio::test]
async fn test_api_single_opcode() {
    let json = body_json(get(router(), "/api/opcodes/op_verif").await).await;
    assert_eq!(json["name"], "OP_BEGIN");
    assert_eq!(json["aliases"][0], "OP_VERIF");

    let json = body_json(get(router(), "/api/opcodes/0x7e").await).await;
    assert_eq!(json["name"], "OP_CAT");
}

#[tokio::test]
async fn test_api_unknown_opcode() {
    let response = get(router(), "/api/opcodes/OP_NOPE").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], 404);
    assert_eq!(json["message"], "unknown opcode: OP_NOPE");
}

#[tokio::test]
async fn test_api_categories() {
    let json = body_json(get(router(), "/api/categories").await).await;
    let categories: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c.as_str().unwrap())
        .collect();
    assert!(categories.contains(&"Crypto/Sign"));
    assert!(categories.contains(&"Reserved/Unknown"));
    let mut sorted = categories.clone();
    sorted.sort();
    assert_eq!(categories, sorted);
}

// ==================== Static files ====================

#[tokio::test]
async fn test_static_files_in_directory_order() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    std::fs::write(first.path().join("app.css"), "first").unwrap();
    std::fs::write(second.path().join("app.css"), "second").unwrap();
    std::fs::create_dir(second.path().join("fonts")).unwrap();
    std::fs::write(second.path().join("fonts").join("mono.woff2"), [0u8, 1, 2]).unwrap();

    let router = router_with(&[first.path(), second.path()]);

    let response = get(router.clone(), "/app.css").await;
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/css");
    assert_eq!(body_text(response).await, "first");

    let response = get(router, "/fonts/mono.woff2").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "font/woff2");
}

#[tokio::test]
async fn test_static_not_found() {
    let site = TempDir::new().unwrap();
    let response = get(router_with(&[site.path()]), "/missing.js").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(response).await, "Not Found");
}

#[tokio::test]
async fn test_static_rejects_traversal() {
    let root = TempDir::new().unwrap();
    let site = root.path().join("site");
    std::fs::create_dir(&site).unwrap();
    std::fs::write(root.path().join("secret.txt"), "secret").unwrap();

    let response = get(router_with(&[site.as_path()]), "/%2e%2e/secret.txt").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_default_config_does_not_expose_working_directory() {
    // Tests run from the crate directory, which holds Cargo.toml
    assert!(Path::new("Cargo.toml").exists());
    let router = OpcodeServer::new(ServerConfig::default()).build_router();

    for uri in ["/Cargo.toml", "/.git/config", "/src/lib.rs"] {
        let response = get(router.clone(), uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}

#[tokio::test]
async fn test_static_rejects_dotfiles() {
    let site = TempDir::new().unwrap();
    std::fs::write(site.path().join(".env"), "TOKEN=1").unwrap();
    std::fs::create_dir(site.path().join(".git")).unwrap();
    std::fs::write(site.path().join(".git").join("config"), "[core]").unwrap();
    std::fs::write(site.path().join("app.js"), "ok").unwrap();

    let router = router_with(&[site.path()]);
    for uri in ["/.env", "/.git/config", "/%2egit/config"] {
        let response = get(router.clone(), uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
    }

    let response = get(router, "/app.js").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");
}
