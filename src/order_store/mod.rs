//! In-memory order store.
//!
//! [`OrderStore`] owns every accepted order and implements the four order
//! operations. It does no locking of its own; the running service hands it
//! to a single [`OrderService`](crate::order_actor::OrderService) task so
//! that all calls are serialized.

pub mod validation;
pub mod window;

use std::collections::HashMap;

use chrono::{Duration, Local, NaiveDateTime};
use tracing::error;

use crate::domain::{Order, Response};
pub use validation::{is_valid_date, is_valid_time, parse_date, time_offset, DATE_FORMAT, TIME_FORMAT};
pub use window::ListWindow;

/// Minutes after an order's recorded timestamp during which it may be updated.
pub const DEFAULT_UPDATE_WINDOW_MINUTES: u32 = 15;

/// Source of the current local date and time.
pub type Clock = Box<dyn Fn() -> NaiveDateTime + Send + Sync>;

pub struct OrderStore {
    orders: HashMap<i32, Order>,
    update_window: Duration,
    clock: Clock,
}

impl OrderStore {
    pub fn new(
        update_window: Duration,
        clock: impl Fn() -> NaiveDateTime + Send + Sync + 'static,
    ) -> Self {
        Self {
            orders: HashMap::new(),
            update_window,
            clock: Box::new(clock),
        }
    }

    pub fn with_system_clock(update_window: Duration) -> Self {
        Self::new(update_window, || Local::now().naive_local())
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Stores a new order.
    ///
    /// An id that is already taken is rejected before the payload is looked
    /// at, so a duplicate with malformed fields still reports "already exist".
    pub fn add(&mut self, order: Order) -> Response {
        if self.orders.contains_key(&order.id) {
            return Response::already_exists();
        }
        if !is_valid_order(&order) {
            return Response::invalid_format();
        }
        self.orders.insert(order.id, order);
        Response::order_added()
    }

    pub fn get(&self, id: i32) -> Response {
        match self.orders.get(&id) {
            Some(order) => Response::order_returned(order.clone()),
            None => Response::not_found_for_get(),
        }
    }

    /// Orders dated within `window` of today, both ends inclusive.
    ///
    /// Unknown window keywords return an empty list.
    pub fn list(&self, window: &str) -> Vec<Order> {
        let Some(window) = ListWindow::from_keyword(window) else {
            return Vec::new();
        };
        let today = (self.clock)().date();

        self.orders
            .values()
            .filter(|order| {
                let date = order.date.as_deref().and_then(parse_date);
                match date {
                    Some(date) => window.contains(today, date),
                    None => {
                        error!(order_id = order.id, date = ?order.date, "Stored order has an unparseable date");
                        false
                    }
                }
            })
            .cloned()
            .collect()
    }

    /// Stamps the order with the current date and time if its recorded
    /// timestamp is no older than the update window.
    ///
    /// The window is measured from the stored timestamp, so every successful
    /// update opens a fresh window.
    pub fn update(&mut self, id: i32) -> Response {
        let now = (self.clock)();
        let update_window = self.update_window;

        let Some(order) = self.orders.get_mut(&id) else {
            return Response::not_found_for_update();
        };

        let Some(recorded) = recorded_at(order) else {
            error!(order_id = id, date = ?order.date, time = ?order.time, "Stored order has an unparseable timestamp");
            return Response::window_expired();
        };

        // A deadline past the representable range never expires.
        if let Some(deadline) = recorded.checked_add_signed(update_window) {
            if now > deadline {
                return Response::window_expired();
            }
        }

        order.date = Some(now.format(DATE_FORMAT).to_string());
        order.time = Some(now.format(TIME_FORMAT).to_string());
        Response::order_updated()
    }
}

fn is_valid_order(order: &Order) -> bool {
    match (&order.date, &order.time) {
        (Some(date), Some(time)) => is_valid_time(time) && is_valid_date(date),
        _ => false,
    }
}

fn recorded_at(order: &Order) -> Option<NaiveDateTime> {
    let date = parse_date(order.date.as_deref()?)?;
    let offset = time_offset(order.time.as_deref()?)?;
    Some(date.and_hms_opt(0, 0, 0)? + offset)
}
