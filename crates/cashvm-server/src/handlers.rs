//! Route handlers

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Path as UrlPath, Query, RawQuery, Request, State},
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use cashvm_opcodes::OpcodeRow;
use tower_http::services::ServeDir;

use crate::error::ApiError;
use crate::page::render_page;
use crate::server::ServerState;

/// Entry document path
pub const ENTRY_PATH: &str = "/opcodes";

const INDEX_FILE: &str = "index.html";

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// `GET /`: temporary redirect to the entry document, keeping the query
pub(crate) async fn redirect_root(RawQuery(query): RawQuery) -> Redirect {
    match query.filter(|query| !query.is_empty()) {
        Some(query) => Redirect::temporary(&format!("{ENTRY_PATH}?{query}")),
        None => Redirect::temporary(ENTRY_PATH),
    }
}

/// `GET /opcodes[/*]`: deployed `index.html`, else the built-in page
pub(crate) async fn entry_document(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    for dir in &state.static_dirs {
        let index = dir.join(INDEX_FILE);
        if let Ok(body) = tokio::fs::read(&index).await {
            tracing::debug!(path = %index.display(), "serving entry document");
            return ([(header::CONTENT_TYPE, HTML_CONTENT_TYPE)], body).into_response();
        }
    }

    let search = params.get("q").map(String::as_str);
    Html(render_page(state.catalog, search)).into_response()
}

/// `GET /api/opcodes`
pub(crate) async fn list_opcodes(
    State(state): State<Arc<ServerState>>,
) -> Json<&'static [OpcodeRow]> {
    Json(state.catalog.table().rows())
}

/// `GET /api/opcodes/:id`
pub(crate) async fn show_opcode(
    State(state): State<Arc<ServerState>>,
    UrlPath(id): UrlPath<String>,
) -> Result<Json<&'static OpcodeRow>, ApiError> {
    state
        .catalog
        .table()
        .lookup(&id)
        .map(Json)
        .ok_or_else(|| ApiError::unknown_opcode(&id))
}

/// `GET /api/categories`
pub(crate) async fn list_categories(
    State(state): State<Arc<ServerState>>,
) -> Json<Vec<&'static str>> {
    Json(
        state
            .catalog
            .table()
            .categories()
            .iter()
            .map(|category| category.as_str())
            .collect(),
    )
}

/// Anything else: a file from the first asset directory that has it
pub(crate) async fn static_file(
    State(state): State<Arc<ServerState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    if !is_servable(uri.path()) {
        return not_found();
    }

    for dir in &state.static_dirs {
        let mut request = Request::new(Body::empty());
        *request.method_mut() = method.clone();
        *request.uri_mut() = uri.clone();
        *request.headers_mut() = headers.clone();

        let mut assets = ServeDir::new(dir);
        match assets.try_call(request).await {
            Ok(response) if response.status() == StatusCode::NOT_FOUND => continue,
            Ok(response) => return response.map(Body::new),
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "failed to serve asset");
            }
        }
    }

    not_found()
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

// Only plain relative paths: no `.`/`..` segments and no dotfiles
fn is_servable(path: &str) -> bool {
    let Ok(decoded) = urlencoding::decode(path) else {
        return false;
    };

    let mut segments = decoded
        .split(['/', '\\'])
        .filter(|segment| !segment.is_empty())
        .peekable();
    segments.peek().is_some() && segments.all(|segment| !segment.starts_with('.'))
}
