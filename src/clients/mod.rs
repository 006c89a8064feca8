//! Cloneable handles for talking to the order actor.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::domain::{Order, Response};
use crate::messages::OrderRequest;
use crate::order_actor::OrderError;

/// Generate a client method that sends one request and waits for its reply.
///
/// A closed channel or a dropped reply sender becomes
/// `ActorCommunicationError`.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident, Error = $error_type:ty) => {
        impl $client {
            #[instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $error_type> {
                debug!("Sending request");
                let (respond_to, response) = oneshot::channel();
                self.sender.send($request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| <$error_type>::ActorCommunicationError("Actor closed".to_string()))?;

                response.await.map_err(|_| <$error_type>::ActorCommunicationError("Actor dropped".to_string()))?
            }
        }
    };
}

#[derive(Clone)]
pub struct OrderClient {
    sender: mpsc::Sender<OrderRequest>,
}

impl OrderClient {
    pub fn new(sender: mpsc::Sender<OrderRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), OrderError> {
        debug!("Sending shutdown request");
        self.sender
            .send(OrderRequest::Shutdown)
            .await
            .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))
    }
}

client_method!(OrderClient => fn add_order(order: Order) -> Response as OrderRequest::AddOrder, Error = OrderError);
client_method!(OrderClient => fn get_order(id: i32) -> Response as OrderRequest::GetOrder, Error = OrderError);
client_method!(OrderClient => fn list_orders(window: String) -> Vec<Order> as OrderRequest::ListOrders, Error = OrderError);
client_method!(OrderClient => fn update_order(id: i32) -> Response as OrderRequest::UpdateOrder, Error = OrderError);

#[cfg(test)]
client_method!(OrderClient => fn get_order_count() -> usize as OrderRequest::GetOrderCount, Error = OrderError);
