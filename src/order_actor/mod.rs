//! The order actor: a single task that owns the [`OrderStore`] and answers
//! requests arriving over its channel one at a time.

pub mod error;

pub use error::*;

use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use crate::clients::OrderClient;
use crate::domain::{Order, Response};
use crate::messages::{OrderRequest, ServiceResponse};
use crate::order_store::OrderStore;

pub struct OrderService {
    receiver: mpsc::Receiver<OrderRequest>,
    store: OrderStore,
}

impl OrderService {
    pub fn new(buffer_size: usize, store: OrderStore) -> (Self, OrderClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self { receiver, store };
        let client = OrderClient::new(sender);
        (service, client)
    }

    /// Main actor loop. Stops on `Shutdown` or once every client is dropped.
    #[instrument(name = "order_service", skip(self))]
    pub async fn run(mut self) {
        info!("OrderService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                OrderRequest::AddOrder { order, respond_to } => {
                    self.handle_add_order(order, respond_to);
                }
                OrderRequest::GetOrder { id, respond_to } => {
                    self.handle_get_order(id, respond_to);
                }
                OrderRequest::ListOrders { window, respond_to } => {
                    self.handle_list_orders(window, respond_to);
                }
                OrderRequest::UpdateOrder { id, respond_to } => {
                    self.handle_update_order(id, respond_to);
                }
                OrderRequest::Shutdown => {
                    info!("OrderService shutting down");
                    break;
                }
                #[cfg(test)]
                OrderRequest::GetOrderCount { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.len()));
                }
            }
        }

        info!("OrderService stopped");
    }

    #[instrument(fields(order_id = %order.id), skip(self, order, respond_to))]
    fn handle_add_order(&mut self, order: Order, respond_to: ServiceResponse<Response, OrderError>) {
        debug!("Processing add_order request");

        let response = self.store.add(order);
        if response.status() {
            info!("Order added successfully");
        } else {
            warn!(code = response.code.code(), reason = response.message, "Order rejected");
        }

        let _ = respond_to.send(Ok(response));
    }

    #[instrument(fields(order_id = %id), skip(self, respond_to))]
    fn handle_get_order(&self, id: i32, respond_to: ServiceResponse<Response, OrderError>) {
        debug!("Processing get_order request");

        let response = self.store.get(id);
        match &response.data {
            Some(order) => info!(date = ?order.date, time = ?order.time, "Order found"),
            None => debug!("Order not found"),
        }

        let _ = respond_to.send(Ok(response));
    }

    #[instrument(fields(window = %window), skip(self, window, respond_to))]
    fn handle_list_orders(&self, window: String, respond_to: ServiceResponse<Vec<Order>, OrderError>) {
        debug!("Processing list_orders request");

        let orders = self.store.list(&window);
        info!(order_count = orders.len(), "Listed orders");

        let _ = respond_to.send(Ok(orders));
    }

    #[instrument(fields(order_id = %id), skip(self, respond_to))]
    fn handle_update_order(&mut self, id: i32, respond_to: ServiceResponse<Response, OrderError>) {
        debug!("Processing update_order request");

        let response = self.store.update(id);
        if response.status() {
            info!("Order updated successfully");
        } else {
            warn!(code = response.code.code(), reason = response.message, "Order not updated");
        }

        let _ = respond_to.send(Ok(response));
    }
}
