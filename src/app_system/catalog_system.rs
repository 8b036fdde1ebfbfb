use tracing::{error, info, instrument};

use crate::catalog::CatalogService;
use crate::product_actor;
use super::SystemError;

/// Owns the record store actor and hands out the catalog service bound to it.
///
/// The store is opened once by [`CatalogSystem::start`] and lives until
/// [`CatalogSystem::shutdown`]; the service is injected with the store client
/// rather than reaching for any process-wide state.
pub struct CatalogSystem {
    pub catalog: CatalogService,
    store_handle: tokio::task::JoinHandle<()>,
}

impl CatalogSystem {
    #[instrument(name = "catalog_system")]
    pub fn start(channel_capacity: usize) -> Self {
        let (store_actor, store_client) = product_actor::new(channel_capacity);
        let store_handle = tokio::spawn(store_actor.run());
        info!("Record store connected");

        Self {
            catalog: CatalogService::new(store_client),
            store_handle,
        }
    }

    /// Closes the store connection and waits for the actor to drain.
    ///
    /// Every clone of the catalog service must be dropped first, otherwise the
    /// store keeps its channel open.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");
        drop(self.catalog);

        if let Err(e) = self.store_handle.await {
            error!("Record store task failed: {:?}", e);
            return Err(SystemError::ActorTask(e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
