//! # Mock Framework
//!
//! Utilities for testing the HTTP layer without a running order actor.
//!
//! Use [`create_mock_client`] to get a client and the receiving end of its
//! channel, then helpers like [`expect_add`] or [`expect_update`] to assert
//! which request arrived and to answer it.

use axum::body::{Body, Bytes};
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tokio::sync::mpsc;
use tower::ServiceExt;

use crate::clients::OrderClient;
use crate::domain::{Order, Response};
use crate::messages::{OrderRequest, ServiceResponse};
use crate::order_actor::OrderError;

/// Creates a client whose requests land on `receiver` instead of an actor.
pub fn create_mock_client(buffer_size: usize) -> (OrderClient, mpsc::Receiver<OrderRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (OrderClient::new(sender), receiver)
}

/// Next message must be an AddOrder request
pub async fn expect_add(
    receiver: &mut mpsc::Receiver<OrderRequest>,
) -> Option<(Order, ServiceResponse<Response, OrderError>)> {
    match receiver.recv().await {
        Some(OrderRequest::AddOrder { order, respond_to }) => Some((order, respond_to)),
        _ => None,
    }
}

/// Next message must be a GetOrder request
pub async fn expect_get(
    receiver: &mut mpsc::Receiver<OrderRequest>,
) -> Option<(i32, ServiceResponse<Response, OrderError>)> {
    match receiver.recv().await {
        Some(OrderRequest::GetOrder { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next message must be a ListOrders request
pub async fn expect_list(
    receiver: &mut mpsc::Receiver<OrderRequest>,
) -> Option<(String, ServiceResponse<Vec<Order>, OrderError>)> {
    match receiver.recv().await {
        Some(OrderRequest::ListOrders { window, respond_to }) => Some((window, respond_to)),
        _ => None,
    }
}

/// Next message must be an UpdateOrder request
pub async fn expect_update(
    receiver: &mut mpsc::Receiver<OrderRequest>,
) -> Option<(i32, ServiceResponse<Response, OrderError>)> {
    match receiver.recv().await {
        Some(OrderRequest::UpdateOrder { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Drive the router with a single request and return (status, body_bytes).
pub async fn call(router: axum::Router, req: Request<Body>) -> (StatusCode, Bytes) {
    let resp = router.oneshot(req).await.expect("oneshot failed");
    let status = resp.status();
    let body = resp
        .into_body()
        .collect()
        .await
        .expect("body collect failed")
        .to_bytes();
    (status, body)
}

pub fn parse_json(b: Bytes) -> serde_json::Value {
    serde_json::from_slice(&b).expect("body is not valid JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);

        let add_task = tokio::spawn(async move {
            client.add_order(Order::new(1, "24-05-1993", "11:45:00")).await
        });

        let (order, responder) = expect_add(&mut receiver).await.expect("Expected AddOrder request");
        assert_eq!(order.id, 1);
        responder.send(Ok(Response::order_added())).unwrap();

        let result = add_task.await.unwrap();
        assert_eq!(result, Ok(Response::order_added()));
    }

    #[tokio::test]
    async fn expect_helpers_reject_other_requests() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move { client.update_order(2).await });

        assert!(expect_get(&mut receiver).await.is_none());
        assert!(task.await.unwrap().is_err());
    }
}
