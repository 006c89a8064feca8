//! System orchestration, startup, and shutdown logic.

pub mod order_system;
pub mod logging;

pub use order_system::*;
pub use logging::*;
