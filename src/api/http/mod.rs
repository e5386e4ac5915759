// src/api/http/mod.rs

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::state::AppState;

mod plan;

pub use plan::{PlanResponse, plan_handler};

pub fn http_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(home_handler))
        .route("/api/plan", post(plan_handler))
}

/// Liveness check; answers regardless of capability load state.
async fn home_handler() -> &'static str {
    "wellplan microservice is running"
}
