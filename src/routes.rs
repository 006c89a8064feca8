//! Axum router and HTTP handlers.
//!
//! `build_router` is the single entry point; `main.rs` attaches middleware
//! after calling it so tests can drive the bare router.
//!
//! Every store outcome, including rejections, is sent with HTTP 200 and the
//! envelope's own `code`. Only a dead order actor produces a non-200 status.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use tracing::{error, info};

use crate::{
    api_types::{ErrorBody, OrderBody, ResponseBody},
    order_actor::OrderError,
    state::AppState,
};

/// Build the order API router.
///
/// The path parameter shares one name across routes because the router
/// allows only one parameter name per segment position.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/order/add", post(add_order))
        .route("/order/:key/get", get(get_order))
        .route("/order/:key/getAll", get(list_orders))
        .route("/order/:key/update", put(update_order))
        .with_state(state)
}

fn actor_unavailable(e: OrderError) -> Response {
    error!(error = %e, "Order actor unavailable");
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ErrorBody {
            error: e.to_string(),
        }),
    )
        .into_response()
}

fn envelope(result: Result<crate::domain::Response, OrderError>) -> Response {
    match result {
        Ok(response) => (StatusCode::OK, Json(ResponseBody::from(response))).into_response(),
        Err(e) => actor_unavailable(e),
    }
}

// ---------------------------------------------------------------------------
// POST /order/add
// ---------------------------------------------------------------------------

pub(crate) async fn add_order(
    State(st): State<Arc<AppState>>,
    Json(body): Json<OrderBody>,
) -> Response {
    info!(order_id = body.id, "order/add");
    envelope(st.orders.add_order(body.into()).await)
}

// ---------------------------------------------------------------------------
// GET /order/{id}/get
// ---------------------------------------------------------------------------

pub(crate) async fn get_order(State(st): State<Arc<AppState>>, Path(id): Path<i32>) -> Response {
    envelope(st.orders.get_order(id).await)
}

// ---------------------------------------------------------------------------
// GET /order/{time}/getAll
// ---------------------------------------------------------------------------

pub(crate) async fn list_orders(
    State(st): State<Arc<AppState>>,
    Path(window): Path<String>,
) -> Response {
    match st.orders.list_orders(window).await {
        Ok(orders) => {
            let body: Vec<OrderBody> = orders.into_iter().map(OrderBody::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => actor_unavailable(e),
    }
}

// ---------------------------------------------------------------------------
// PUT /order/{id}/update
// ---------------------------------------------------------------------------

pub(crate) async fn update_order(State(st): State<Arc<AppState>>, Path(id): Path<i32>) -> Response {
    info!(order_id = id, "order/update");
    envelope(st.orders.update_order(id).await)
}
