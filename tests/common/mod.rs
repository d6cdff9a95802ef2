//! Stub verse and synonym services served by axum on an ephemeral port.

#![allow(dead_code)]

use axum::{extract::Query, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;
use std::collections::HashMap;
use std::net::SocketAddr;

pub const VERSES_PATH: &str = "/api/read/nvi/search";
pub const SYNONYMS_PATH: &str = "/synonyms";

fn verse(id: u64, book: &str, chapter: u32, number: u32, text: &str) -> serde_json::Value {
    json!({
        "id": id,
        "book": book,
        "chapter": chapter,
        "number": number,
        "verse": text,
        "study": null
    })
}

async fn verses(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    let q = params.get("q").map(String::as_str).unwrap_or("");
    match q {
        "amor" => (
            StatusCode::OK,
            Json(json!({
                "data": [
                    verse(101, "1 Corintios", 13, 4, "El amor es paciente, el amor es bondadoso"),
                    verse(102, "Juan", 1, 1, "En el principio era el Verbo"),
                    verse(103, "Mateo", 11, 15, "El que tiene oídos para oír, oiga"),
                ]
            })),
        )
            .into_response(),
        "caridad" => (
            StatusCode::OK,
            Json(json!({
                "data": [
                    verse(101, "1 Corintios", 13, 4, "El amor es paciente, el amor es bondadoso"),
                    verse(104, "1 Pedro", 4, 8, "El amor cubrirá multitud de pecados"),
                ]
            })),
        )
            .into_response(),
        "vacio" => (StatusCode::OK, Json(json!({}))).into_response(),
        "roto" => (StatusCode::OK, "<html>not json</html>").into_response(),
        "caido" => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        "solo" => (
            StatusCode::OK,
            Json(json!({ "data": [verse(105, "Juan", 11, 35, "Jesús lloró")] })),
        )
            .into_response(),
        _ => (StatusCode::OK, Json(json!({ "data": [] }))).into_response(),
    }
}

async fn synonyms(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    let word = params.get("word").map(String::as_str).unwrap_or("");
    match word {
        "amor" => (
            StatusCode::OK,
            Json(json!([["caridad", 0.05], ["cariño", 0.049999], ["afecto", 0.01]])),
        )
            .into_response(),
        "paz" => (StatusCode::OK, Json(json!([["calma", 0.9]]))).into_response(),
        _ => (StatusCode::NOT_FOUND, "not in vocabulary").into_response(),
    }
}

/// Start the stub services and return their address.
pub async fn spawn_upstream() -> SocketAddr {
    let app = Router::new()
        .route(VERSES_PATH, get(verses))
        .route(SYNONYMS_PATH, get(synonyms));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

pub fn verses_url(addr: SocketAddr) -> String {
    format!("http://{}{}", addr, VERSES_PATH)
}

pub fn synonyms_url(addr: SocketAddr) -> String {
    format!("http://{}{}", addr, SYNONYMS_PATH)
}

/// Config file contents pointing both services at `addr`.
pub fn config_for(addr: SocketAddr) -> String {
    format!(
        r#"[verses]
base_url = "http://{addr}/api/read"
translation = "nvi"

[synonyms]
url = "http://{addr}{SYNONYMS_PATH}"

[http]
timeout_secs = 5
"#
    )
}
