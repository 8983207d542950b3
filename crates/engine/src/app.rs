//! Application state and composition.

use std::sync::Arc;

use crate::converters::{ConverterService, ItemConverter};
use crate::infrastructure::{
    in_memory::InMemoryRepository,
    ports::{ClockPort, ItemRepo, RelationshipRepo, RestConverter},
    request_context::RequestContexts,
    settings::ConversionSettings,
};

/// Main application state.
///
/// Holds the ports and the converters built on them.
pub struct App {
    pub repositories: Repositories,
    pub contexts: Arc<RequestContexts>,
    pub items: Arc<ItemConverter>,
}

/// Container for all repository ports.
pub struct Repositories {
    pub item: Arc<dyn ItemRepo>,
    pub relationship: Arc<dyn RelationshipRepo>,
}

impl App {
    pub fn new(
        repositories: Repositories,
        clock: Arc<dyn ClockPort>,
        settings: ConversionSettings,
    ) -> Self {
        let contexts = Arc::new(RequestContexts::new(clock));
        let converter: Arc<dyn RestConverter> = Arc::new(ConverterService::new());

        let items = Arc::new(ItemConverter::new(
            converter,
            repositories.item.clone(),
            repositories.relationship.clone(),
            contexts.clone(),
            settings,
        ));

        Self {
            repositories,
            contexts,
            items,
        }
    }

    /// Wires every repository port to one in-memory snapshot.
    pub fn in_memory(
        repo: Arc<InMemoryRepository>,
        clock: Arc<dyn ClockPort>,
        settings: ConversionSettings,
    ) -> Self {
        let repositories = Repositories {
            item: repo.clone(),
            relationship: repo,
        };
        Self::new(repositories, clock, settings)
    }
}
