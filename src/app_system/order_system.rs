use tracing::{error, info, instrument};

use crate::clients::OrderClient;
use crate::config::Config;
use crate::order_actor::{OrderError, OrderService};
use crate::order_store::OrderStore;

/// Owns the running order actor.
///
/// One `OrderSystem` means one store: a server builds it once at startup and
/// each test builds its own.
pub struct OrderSystem {
    pub order_client: OrderClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    /// Start the order actor using local wall-clock time.
    #[instrument(name = "order_system", skip(config))]
    pub fn new(config: &Config) -> Self {
        let store = OrderStore::with_system_clock(config.update_window());
        Self::start(config.buffer_size, store)
    }

    /// Start the order actor with an explicit clock.
    #[cfg(test)]
    pub fn with_clock(
        buffer_size: usize,
        update_window: chrono::Duration,
        clock: impl Fn() -> chrono::NaiveDateTime + Send + Sync + 'static,
    ) -> Self {
        Self::start(buffer_size, OrderStore::new(update_window, clock))
    }

    fn start(buffer_size: usize, store: OrderStore) -> Self {
        info!("Starting order system");

        let (order_service, order_client) = OrderService::new(buffer_size, store);
        let handles = vec![tokio::spawn(order_service.run())];

        info!("Order system started successfully");

        Self {
            order_client,
            handles,
        }
    }

    /// Stop the actor and wait for it to finish.
    ///
    /// Join errors are logged and do not abort the shutdown.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), OrderError> {
        info!("Shutting down order system");

        let result = self.order_client.shutdown().await;

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Service shutdown error");
            }
        }

        info!("Order system shutdown complete");
        result
    }
}
