//! Dispatch engine
//!
//! One resolve -> capability check -> invoke -> normalize -> report pass
//! per call. The engine owns an adapter registry (its own, not a shared
//! one; every engine is independent) and exposes the whole conversion
//! surface: load a generic document, parse source text, serialize a tree.
//!
//! Failure policy: everything an adapter does wrong comes back through
//! the single `Err` channel as a [`DispatchError`], with the adapter's
//! own cause intact. A parse failure still normalizes whatever partial
//! output the adapter managed to produce, so diagnostic tooling can
//! inspect the tree that existed before things broke. Each call returns
//! exactly once; there are no retries and no timeouts.

use crate::adapter::{Adapter, AdapterOptions, ParseOutput, ParseRequest, SerializeRequest};
use crate::error::{DispatchError, Operation};
use crate::registry::AdapterRegistry;
use refract_elements::Element;
use serde_json::Value;

/// Inputs for a parse call.
#[derive(Debug, Clone)]
pub struct ParseOptions<'a> {
    /// The raw source text.
    pub source: &'a str,
    /// Explicit media type. When absent, the engine falls back to
    /// content detection over the source.
    pub media_type: Option<&'a str>,
    /// Options forwarded verbatim to the adapter.
    pub adapter_options: AdapterOptions,
}

impl<'a> ParseOptions<'a> {
    pub fn new(source: &'a str) -> Self {
        ParseOptions {
            source,
            media_type: None,
            adapter_options: AdapterOptions::new(),
        }
    }

    pub fn with_media_type(mut self, media_type: &'a str) -> Self {
        self.media_type = Some(media_type);
        self
    }

    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.adapter_options.insert(name.into(), value.into());
        self
    }
}

/// Inputs for a serialize call.
#[derive(Debug, Clone)]
pub struct SerializeOptions<'a> {
    /// The element tree to serialize.
    pub api: &'a Element,
    /// Media type selecting the adapter. Required: there is no content
    /// to sniff on the way out.
    pub media_type: &'a str,
    /// Options forwarded verbatim to the adapter.
    pub adapter_options: AdapterOptions,
}

impl<'a> SerializeOptions<'a> {
    pub fn new(api: &'a Element, media_type: &'a str) -> Self {
        SerializeOptions {
            api,
            media_type,
            adapter_options: AdapterOptions::new(),
        }
    }

    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.adapter_options.insert(name.into(), value.into());
        self
    }
}

/// The conversion engine: an adapter registry plus the dispatch logic.
pub struct Engine {
    registry: AdapterRegistry,
}

impl Engine {
    /// An engine with no adapters registered.
    pub fn new() -> Self {
        Engine {
            registry: AdapterRegistry::new(),
        }
    }

    /// An engine with the built-in wire-form adapters registered.
    pub fn with_defaults() -> Self {
        Engine {
            registry: AdapterRegistry::with_defaults(),
        }
    }

    /// Wrap an existing registry.
    pub fn from_registry(registry: AdapterRegistry) -> Self {
        Engine { registry }
    }

    pub fn registry(&self) -> &AdapterRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut AdapterRegistry {
        &mut self.registry
    }

    pub fn register(&mut self, adapter: impl Adapter + 'static) {
        self.registry.register(adapter);
    }

    pub fn unregister(&mut self, name: &str) -> Option<Box<dyn Adapter>> {
        self.registry.unregister(name)
    }

    /// Materialize a generic document into an element tree.
    pub fn load(&self, document: &Value) -> Element {
        refract_elements::load(document)
    }

    /// Parse source text into an element tree.
    ///
    /// Resolution uses the declared media type when given, content
    /// detection otherwise. The resolved adapter's output is normalized
    /// through the loader unless it already returned elements.
    pub fn parse(&self, options: &ParseOptions<'_>) -> Result<Element, DispatchError> {
        let adapter = match options.media_type {
            Some(media_type) => self.registry.resolve_by_media_type(media_type).ok_or_else(
                || DispatchError::NoAdapterFound {
                    media_type: Some(media_type.to_string()),
                },
            )?,
            None => self
                .registry
                .resolve_by_detection(options.source)
                .ok_or(DispatchError::NoAdapterFound { media_type: None })?,
        };

        if !adapter.supports_parsing() {
            return Err(DispatchError::MissingCapability {
                adapter: adapter.name().to_string(),
                operation: Operation::Parse,
            });
        }

        log::debug!("parsing with adapter '{}'", adapter.name());
        let request = ParseRequest {
            source: options.source,
            media_type: options.media_type,
            options: &options.adapter_options,
        };
        match adapter.parse(&request) {
            Ok(output) => Ok(normalize(output)),
            Err(failure) => {
                let (cause, partial) = failure.into_parts();
                Err(DispatchError::AdapterFailed {
                    adapter: adapter.name().to_string(),
                    cause,
                    partial: partial.map(normalize),
                })
            }
        }
    }

    /// Serialize an element tree into text.
    ///
    /// Resolution is by media type only. The adapter's output is handed
    /// back unmodified.
    pub fn serialize(&self, options: &SerializeOptions<'_>) -> Result<String, DispatchError> {
        let adapter = self
            .registry
            .resolve_by_media_type(options.media_type)
            .ok_or_else(|| DispatchError::NoAdapterFound {
                media_type: Some(options.media_type.to_string()),
            })?;

        if !adapter.supports_serialization() {
            return Err(DispatchError::MissingCapability {
                adapter: adapter.name().to_string(),
                operation: Operation::Serialize,
            });
        }

        log::debug!("serializing with adapter '{}'", adapter.name());
        let request = SerializeRequest {
            api: options.api,
            media_type: options.media_type,
            options: &options.adapter_options,
        };
        adapter.serialize(&request).map_err(|failure| {
            let (cause, partial) = failure.into_parts();
            DispatchError::AdapterFailed {
                adapter: adapter.name().to_string(),
                cause,
                partial: partial.map(normalize),
            }
        })
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Generic output goes through the loader; typed output passes through.
fn normalize(output: ParseOutput) -> Element {
    match output {
        ParseOutput::Element(element) => element,
        ParseOutput::Generic(value) => refract_elements::load(&value),
    }
}
