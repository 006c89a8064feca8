use super::Order;

/// Outcome of a store operation, carried as the numeric `code` of a [`Response`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    Success,
    InvalidFormat,
    AlreadyExists,
    NotFoundForUpdate,
    WindowExpired,
    NotFoundForGet,
}

impl ResponseCode {
    /// Numeric code exposed to clients.
    pub fn code(self) -> u16 {
        match self {
            ResponseCode::Success => 200,
            ResponseCode::InvalidFormat => 433,
            ResponseCode::AlreadyExists => 519,
            ResponseCode::NotFoundForUpdate => 520,
            ResponseCode::WindowExpired => 521,
            ResponseCode::NotFoundForGet => 522,
        }
    }

    pub fn is_success(self) -> bool {
        self == ResponseCode::Success
    }
}

/// Result envelope returned by `add`, `get` and `update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub code: ResponseCode,
    pub message: &'static str,
    pub data: Option<Order>,
}

impl Response {
    pub fn new(code: ResponseCode, message: &'static str) -> Self {
        Self {
            code,
            message,
            data: None,
        }
    }

    pub fn with_data(mut self, order: Order) -> Self {
        self.data = Some(order);
        self
    }

    pub fn status(&self) -> bool {
        self.code.is_success()
    }

    pub fn order_added() -> Self {
        Self::new(ResponseCode::Success, "Order added successfully")
    }

    pub fn order_returned(order: Order) -> Self {
        Self::new(ResponseCode::Success, "Return order successfully").with_data(order)
    }

    pub fn order_updated() -> Self {
        Self::new(ResponseCode::Success, "Order updated successfully")
    }

    pub fn invalid_format() -> Self {
        Self::new(ResponseCode::InvalidFormat, "Invalid order format")
    }

    pub fn already_exists() -> Self {
        Self::new(ResponseCode::AlreadyExists, "The order already exist")
    }

    pub fn not_found_for_update() -> Self {
        Self::new(ResponseCode::NotFoundForUpdate, "The order doesn't exist")
    }

    pub fn window_expired() -> Self {
        Self::new(ResponseCode::WindowExpired, "The order can't be updated")
    }

    pub fn not_found_for_get() -> Self {
        Self::new(ResponseCode::NotFoundForGet, "There is no order by this id")
    }
}
