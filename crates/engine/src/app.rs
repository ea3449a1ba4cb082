//! Application state and composition.

use std::sync::Arc;

use warps_domain::IconCatalog;

use crate::entities::WarpRegistry;
use crate::infrastructure::app_settings::AppSettings;
use crate::infrastructure::ports::{PropertyStorePort, TeleportPort};
use crate::stores::{PresentedListStore, WizardSessionStore};
use crate::use_cases::warps::{CreateWarp, ListWarps, RemoveWarp, TeleportToWarp};
use crate::use_cases::WarpUseCases;

/// Main application state.
///
/// Holds the registry, the per-player stores and the use cases built on them.
/// Shared by the message handler.
pub struct App {
    pub registry: Arc<WarpRegistry>,
    pub catalog: Arc<IconCatalog>,
    pub stores: Stores,
    pub use_cases: UseCases,
}

/// Runtime state that is not persisted.
pub struct Stores {
    pub wizards: Arc<WizardSessionStore>,
    pub presented_lists: Arc<PresentedListStore>,
}

/// Container for all use cases.
pub struct UseCases {
    pub warps: WarpUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(
        store: Arc<dyn PropertyStorePort>,
        teleporter: Arc<dyn TeleportPort>,
        catalog: IconCatalog,
        settings: &AppSettings,
    ) -> Self {
        let registry = Arc::new(WarpRegistry::new(store, settings.property_key.clone()));
        let catalog = Arc::new(catalog);

        let stores = Stores {
            wizards: Arc::new(WizardSessionStore::new()),
            presented_lists: Arc::new(PresentedListStore::new()),
        };

        let list = Arc::new(ListWarps::new(registry.clone(), catalog.clone()));
        let warps = WarpUseCases::new(
            list.clone(),
            Arc::new(TeleportToWarp::new(
                registry.clone(),
                list.clone(),
                teleporter,
            )),
            Arc::new(RemoveWarp::new(registry.clone(), list)),
            Arc::new(CreateWarp::new(
                registry.clone(),
                catalog.clone(),
                stores.wizards.clone(),
            )),
        );

        Self {
            registry,
            catalog,
            stores,
            use_cases: UseCases { warps },
        }
    }
}
