//! Route handlers and shared application state.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use relay_mempool::Pool;
use relay_network::PeerRegistry;
use relay_pipeline::TransactionService;
use relay_types::Transaction;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<TransactionService>,
    pub pool: Arc<dyn Pool>,
    pub registry: Arc<dyn PeerRegistry>,
}

/// Builds the gateway router over the given state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/transactions",
            post(submit_transaction).get(list_transactions),
        )
        .route("/nodes", post(register_node).get(list_nodes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// POST /transactions
///
/// The body is parsed by hand so that a parse failure produces the
/// `{"error": …}` shape instead of a framework default. Anything that
/// parses is handed to the pipeline and acknowledged with `200`; what the
/// pipeline does with it is not this layer's business.
async fn submit_transaction(
    State(state): State<AppState>,
    body: Bytes,
) -> (StatusCode, Json<Value>) {
    let tx: Transaction = match serde_json::from_slice(&body) {
        Ok(tx) => tx,
        Err(err) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": err.to_string() })),
            )
        }
    };

    state.pipeline.add_transaction(tx).await;
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

/// GET /transactions
async fn list_transactions(State(state): State<AppState>) -> Json<Vec<Transaction>> {
    Json(state.pool.transactions())
}

#[derive(Debug, Deserialize)]
struct RegisterNodeRequest {
    address: String,
}

/// POST /nodes
async fn register_node(State(state): State<AppState>, body: Bytes) -> (StatusCode, Json<Value>) {
    let request: RegisterNodeRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(err) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": err.to_string() })),
            )
        }
    };

    state.registry.register_node(request.address);
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

/// GET /nodes
async fn list_nodes(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.registry.nodes())
}
