//! Path-keyed registry of services.
//!
//! Paths are normalised by trimming surrounding slashes, so `"/people/"` and
//! `"people"` name the same service.

use std::collections::HashMap;
use std::sync::Arc;

use dynoserv_core::service::Service;
use dynoserv_core::storage::Store;

use crate::events::EventBus;
use crate::service::DynamoService;

/// Registry of mounted services sharing one event bus.
#[derive(Default)]
pub struct ServiceRegistry {
    services: HashMap<String, Arc<dyn Service>>,
    events: EventBus,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mounts a [`DynamoService`], wiring its events into the shared bus.
    pub fn mount<S: Store + 'static>(
        &mut self,
        path: &str,
        service: DynamoService<S>,
    ) -> Arc<dyn Service> {
        let path = normalize_path(path);
        let service = service.with_event_bus(&path, self.events.clone());
        self.register(&path, Arc::new(service))
    }

    /// Registers any service under `path`, replacing a previous one.
    pub fn register(&mut self, path: &str, service: Arc<dyn Service>) -> Arc<dyn Service> {
        let path = normalize_path(path);
        tracing::debug!(path = %path, "Registering service");
        if self.services.insert(path.clone(), service.clone()).is_some() {
            tracing::warn!(path = %path, "Replaced an existing service");
        }
        service
    }

    /// Looks up the service mounted at `path`.
    pub fn service(&self, path: &str) -> Option<Arc<dyn Service>> {
        self.services.get(normalize_path(path).as_str()).cloned()
    }

    /// Mounted paths, sorted.
    pub fn paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.services.keys().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }
}

fn normalize_path(path: &str) -> String {
    path.trim_matches('/').to_string()
}
