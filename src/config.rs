//! Command-line and environment configuration.

use std::net::SocketAddr;

use chrono::Duration;
use clap::Parser;

use crate::order_store::DEFAULT_UPDATE_WINDOW_MINUTES;

/// One year.
pub const MAX_UPDATE_WINDOW_MINUTES: i64 = 525_600;

#[derive(Parser, Debug, Clone)]
#[command(name = "order_service", about = "In-memory order management service")]
pub struct Config {
    /// Address the HTTP server binds to
    #[arg(long, env = "ORDER_SERVICE_ADDR", default_value = "127.0.0.1:8080")]
    pub addr: SocketAddr,

    /// Capacity of the order actor's request channel
    #[arg(
        long,
        env = "ORDER_SERVICE_BUFFER",
        default_value_t = 100,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub buffer_size: usize,

    /// Minutes after its recorded time during which an order may be updated
    #[arg(
        long,
        env = "ORDER_SERVICE_UPDATE_WINDOW_MINUTES",
        default_value_t = DEFAULT_UPDATE_WINDOW_MINUTES,
        value_parser = clap::value_parser!(u32).range(1..=MAX_UPDATE_WINDOW_MINUTES)
    )]
    pub update_window_minutes: u32,
}

impl Config {
    pub fn update_window(&self) -> Duration {
        Duration::minutes(self.update_window_minutes.into())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            buffer_size: 100,
            update_window_minutes: DEFAULT_UPDATE_WINDOW_MINUTES,
        }
    }
}
