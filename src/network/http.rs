//! HTTP front end
//!
//! Path-parameterized endpoints that call the Store directly:
//! - `GET /addval/{key}/{value}`
//! - `GET /delval/{key}`
//! - `GET /updateval/{key}/{value}`
//! - `GET /retval/{key}`

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tokio::sync::broadcast;

use crate::error::CacheError;
use crate::protocol::quote;
use crate::store::Store;

/// Body of a successful `/retval` request
#[derive(Debug, Serialize)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

/// Build the HTTP router
pub fn router(store: Arc<Store>) -> Router {
    Router::new()
        .route("/addval/{key}/{value}", get(add_value))
        .route("/delval/{key}", get(delete_value))
        .route("/updateval/{key}/{value}", get(update_value))
        .route("/retval/{key}", get(retrieve_value))
        .with_state(store)
}

pub(crate) async fn serve(
    listener: TcpListener,
    store: Arc<Store>,
    mut shutdown: broadcast::Receiver<()>,
) {
    let served = axum::serve(listener, router(store))
        .with_graceful_shutdown(async move {
            let _ = shutdown.recv().await;
        })
        .await;

    match served {
        Ok(()) => tracing::debug!("HTTP listener stopped"),
        Err(e) => tracing::error!("HTTP server error: {}", e),
    }
}

async fn add_value(
    State(store): State<Arc<Store>>,
    Path((key, value)): Path<(String, String)>,
) -> Response {
    match store.add(key.clone(), value) {
        Ok(()) => format!("{key} has been added\n").into_response(),
        Err(e) => failure(e),
    }
}

async fn delete_value(State(store): State<Arc<Store>>, Path(key): Path<String>) -> Response {
    match store.delete(&key) {
        Ok(()) => format!("{key} has been deleted\n").into_response(),
        Err(e) => failure(e),
    }
}

async fn update_value(
    State(store): State<Arc<Store>>,
    Path((key, value)): Path<(String, String)>,
) -> Response {
    match store.update(&key, value) {
        Ok(()) => format!("{key} has been updated\n").into_response(),
        Err(e) => failure(e),
    }
}

async fn retrieve_value(State(store): State<Arc<Store>>, Path(key): Path<String>) -> Response {
    match store.get(&key) {
        Some(value) => {
            let value = String::from_utf8_lossy(&value).into_owned();
            Json(KeyValue { key, value }).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            format!("{} does not exist\n", quote(&key)),
        )
            .into_response(),
    }
}

fn failure(err: CacheError) -> Response {
    let status = match err {
        CacheError::AlreadyExists(_) => StatusCode::CONFLICT,
        CacheError::NotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    tracing::debug!("HTTP request failed: {}", err);
    (status, format!("{err}\n")).into_response()
}
