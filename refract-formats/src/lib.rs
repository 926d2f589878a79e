//! Multi-format conversion for API description documents
//!
//!     This crate provides a uniform interface for converting between textual
//!     API description dialects and the normalized element tree defined by
//!     refract-elements. Tooling that consumes the tree never learns which
//!     dialect a document started as.
//!
//! Architecture
//!
//!     - Adapter trait: uniform interface for all formats (parsing and/or
//!       serialization), with explicit capability flags and content detection
//!     - AdapterRegistry: ordered registration, media type and detection
//!       resolution, most-recently-registered wins
//!     - Engine: resolve -> capability check -> invoke -> normalize -> report,
//!       one pass per call, every failure through the single error channel
//!     - Adapter implementations: the generic wire form itself, in JSON and
//!       YAML flavors, behind the same trait as any third-party adapter
//!
//!     This is a pure lib: it powers whatever shell sits on top but is shell
//!     agnostic, no std print, no env vars, no process exit. Diagnostics go
//!     through the log facade.
//!
//!     The file structure:
//!     .
//!     ├── adapter.rs              # Adapter trait, requests, outputs, failures
//!     ├── error.rs                # DispatchError taxonomy
//!     ├── registry.rs             # AdapterRegistry for discovery and selection
//!     ├── engine.rs               # parse/serialize dispatch
//!     ├── formats
//!     │   ├── refract_json.rs     # JSON wire-form adapter
//!     │   └── refract_yaml.rs     # YAML wire-form adapter
//!     └── lib.rs
//!
//! Testing
//!
//!     tests
//!     ├── dispatch.rs
//!     └── fixtures
//!         └── frob.refract.json
//!
//! Adapter contract
//!
//!     An adapter declares a name, the media types it answers to, a detector
//!     for content sniffing, and capability flags for each direction. Parse
//!     output is either the generic wire form (normalized through the loader
//!     by the engine) or an already-typed element tree (passed through). A
//!     failure carries the adapter's own error verbatim plus whatever partial
//!     output existed, which the engine normalizes and reports alongside the
//!     error rather than discarding.
//!
//! Engine instances
//!
//!     There is no process-wide engine. Every Engine owns its registry and is
//!     constructed explicitly; Engine::with_defaults() is a convenience that
//!     pre-registers the built-in wire-form adapters. Two engines never share
//!     adapter state.

pub mod adapter;
pub mod engine;
pub mod error;
pub mod formats;
pub mod registry;

pub use adapter::{
    Adapter, AdapterError, AdapterOptions, ParseOutput, ParseRequest, SerializeRequest,
};
pub use engine::{Engine, ParseOptions, SerializeOptions};
pub use error::{DispatchError, Operation};
pub use formats::{RefractJson, RefractYaml};
pub use registry::AdapterRegistry;

// The element model this crate dispatches into.
pub use refract_elements::{load, Element};
