use axum::extract::Query;
use axum::Json;
use serde::Deserialize;
use serde_json::{Value, json};

pub mod accounts;
pub mod payments;
pub mod uploads;

pub async fn health() -> &'static str {
    "ok"
}

#[derive(Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

pub async fn search(Query(query): Query<SearchQuery>) -> Json<Value> {
    Json(json!({ "query": query.q, "results": [] }))
}
