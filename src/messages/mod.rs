use tokio::sync::oneshot;
use crate::domain::{Order, Response};
use crate::order_actor::OrderError;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Requests understood by the order actor. Each variant carries its
/// parameters and a oneshot channel for the reply.
#[derive(Debug)]
pub enum OrderRequest {
    AddOrder {
        order: Order,
        respond_to: ServiceResponse<Response, OrderError>,
    },
    GetOrder {
        id: i32,
        respond_to: ServiceResponse<Response, OrderError>,
    },
    ListOrders {
        window: String,
        respond_to: ServiceResponse<Vec<Order>, OrderError>,
    },
    UpdateOrder {
        id: i32,
        respond_to: ServiceResponse<Response, OrderError>,
    },
    Shutdown,
    #[cfg(test)]
    GetOrderCount {
        respond_to: ServiceResponse<usize, OrderError>,
    },
}
