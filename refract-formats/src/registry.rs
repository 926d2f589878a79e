//! Adapter registry for format discovery and selection
//!
//! Holds an ordered sequence of adapters and resolves one either by an
//! exact media type match or by content sniffing. Order is meaningful:
//! the most recently registered adapter wins both resolution strategies,
//! so registering a more specific adapter later overrides an earlier,
//! more general one. Unregistration removes the most recent entry for a
//! name, restoring whatever it had shadowed.
//!
//! Every registry owns its sequence outright. Constructing a second
//! registry never observes registrations made on the first.
//!
//! Resolution borrows the registry shared, registration borrows it
//! uniquely, so a lookup can never observe a half-applied registration.

use crate::adapter::Adapter;

pub struct AdapterRegistry {
    adapters: Vec<Box<dyn Adapter>>,
}

impl AdapterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        AdapterRegistry {
            adapters: Vec::new(),
        }
    }

    /// Create a registry with the built-in wire-form adapters.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(crate::formats::RefractYaml);
        registry.register(crate::formats::RefractJson);
        registry
    }

    /// Register an adapter, appending it to the sequence. Later
    /// registrations are preferred over earlier ones.
    pub fn register(&mut self, adapter: impl Adapter + 'static) {
        log::trace!("registering adapter '{}'", adapter.name());
        self.adapters.push(Box::new(adapter));
    }

    /// Remove and return the most recently registered adapter with the
    /// given name, or `None` when no adapter has that name.
    pub fn unregister(&mut self, name: &str) -> Option<Box<dyn Adapter>> {
        let index = self
            .adapters
            .iter()
            .rposition(|adapter| adapter.name() == name)?;
        Some(self.adapters.remove(index))
    }

    /// The last-registered adapter whose media types contain an exact
    /// match, or `None`.
    pub fn resolve_by_media_type(&self, media_type: &str) -> Option<&dyn Adapter> {
        self.adapters
            .iter()
            .rev()
            .find(|adapter| adapter.handles_media_type(media_type))
            .map(|adapter| adapter.as_ref())
    }

    /// The first adapter whose detector accepts the source, scanning the
    /// most recently registered first, or `None` when nothing detects.
    pub fn resolve_by_detection(&self, source: &str) -> Option<&dyn Adapter> {
        self.adapters
            .iter()
            .rev()
            .find(|adapter| adapter.detect(source))
            .map(|adapter| adapter.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.adapters.iter().any(|adapter| adapter.name() == name)
    }

    /// Registered adapter names, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.adapters.iter().map(|adapter| adapter.name()).collect()
    }

    /// Every media type any registered adapter answers to, in
    /// registration order.
    pub fn media_types(&self) -> Vec<&str> {
        self.adapters
            .iter()
            .flat_map(|adapter| adapter.media_types().iter().copied())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Adapter> {
        self.adapters.iter().map(|adapter| adapter.as_ref())
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
