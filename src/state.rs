//! Shared state handed to every Axum handler.

use crate::clients::OrderClient;

/// Handlers receive `State<Arc<AppState>>`; the only thing they need is a
/// handle to the order actor.
#[derive(Clone)]
pub struct AppState {
    pub orders: OrderClient,
}

impl AppState {
    pub fn new(orders: OrderClient) -> Self {
        Self { orders }
    }
}
