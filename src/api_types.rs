//! Wire types for the HTTP layer.
//!
//! These mirror the JSON bodies exactly and convert to and from the domain
//! types explicitly. No business logic lives here.

use serde::{Deserialize, Serialize};

use crate::domain::{Order, Response};

/// `{ "id": 1, "date": "24-05-1993", "time": "11:45:00" }`
///
/// A missing `date` or `time` is kept as `None` and rejected by the store as
/// an invalid format rather than by the JSON extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBody {
    pub id: i32,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
}

impl From<OrderBody> for Order {
    fn from(body: OrderBody) -> Self {
        Order {
            id: body.id,
            date: body.date,
            time: body.time,
        }
    }
}

impl From<Order> for OrderBody {
    fn from(order: Order) -> Self {
        OrderBody {
            id: order.id,
            date: order.date,
            time: order.time,
        }
    }
}

/// Envelope returned by add, get and update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseBody {
    pub code: u16,
    pub status: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<OrderBody>,
}

impl From<Response> for ResponseBody {
    fn from(response: Response) -> Self {
        ResponseBody {
            code: response.code.code(),
            status: response.status(),
            message: response.message.to_string(),
            data: response.data.map(OrderBody::from),
        }
    }
}

/// Body sent with `503 Service Unavailable` when the order actor is gone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
