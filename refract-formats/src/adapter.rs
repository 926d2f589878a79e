//! Adapter trait definition
//!
//! An adapter translates between one textual API description dialect and
//! the normalized element tree, in one or both directions. The engine only
//! ever sees this trait: what dialect an adapter speaks, and how, stays
//! inside the adapter.
//!
//! Capabilities are explicit. An adapter declares `supports_parsing` /
//! `supports_serialization` and the engine checks them before invoking, so
//! a one-directional adapter fails resolution deterministically instead of
//! failing mid-call. The default method bodies still answer with an error
//! for implementations invoked directly.
//!
//! Example:
//!
//! ```ignore
//! struct Passthrough;
//!
//! impl Adapter for Passthrough {
//!     fn name(&self) -> &str {
//!         "passthrough"
//!     }
//!
//!     fn media_types(&self) -> &[&str] {
//!         &["text/vnd.passthrough"]
//!     }
//!
//!     fn detect(&self, _source: &str) -> bool {
//!         true
//!     }
//!
//!     fn supports_parsing(&self) -> bool {
//!         true
//!     }
//!
//!     fn parse(&self, request: &ParseRequest<'_>) -> Result<ParseOutput, AdapterError> {
//!         Ok(Element::string(request.source).into())
//!     }
//! }
//! ```

use refract_elements::Element;
use serde_json::Value;
use std::error::Error as StdError;
use std::fmt;

/// Configuration forwarded verbatim from the caller to the adapter.
pub type AdapterOptions = serde_json::Map<String, Value>;

/// What an adapter's parse operation receives.
#[derive(Debug, Clone)]
pub struct ParseRequest<'a> {
    /// The raw source text.
    pub source: &'a str,
    /// The media type the caller declared, when any.
    pub media_type: Option<&'a str>,
    /// Adapter-specific options, passed through untouched.
    pub options: &'a AdapterOptions,
}

/// What an adapter's serialize operation receives.
#[derive(Debug, Clone)]
pub struct SerializeRequest<'a> {
    /// The element tree to serialize.
    pub api: &'a Element,
    /// The media type that selected this adapter.
    pub media_type: &'a str,
    /// Adapter-specific options, passed through untouched.
    pub options: &'a AdapterOptions,
}

/// What a parse operation produces.
///
/// Adapters may hand back the generic wire form and let the engine
/// normalize it through the loader, or construct elements directly and
/// skip the loader entirely.
#[derive(Debug)]
pub enum ParseOutput {
    /// Generic wire-form document, normalized by the engine.
    Generic(Value),
    /// Already-typed element tree, passed through unchanged.
    Element(Element),
}

impl From<Value> for ParseOutput {
    fn from(value: Value) -> Self {
        ParseOutput::Generic(value)
    }
}

impl From<Element> for ParseOutput {
    fn from(element: Element) -> Self {
        ParseOutput::Element(element)
    }
}

/// A failure reported by an adapter.
///
/// The cause is kept verbatim, never wrapped into a message, so callers
/// can get at the adapter's own error type. A parse failure may carry the
/// partial output built before things went wrong; the engine normalizes
/// it and hands it to the caller alongside the error.
#[derive(Debug)]
pub struct AdapterError {
    cause: Box<dyn StdError + Send + Sync>,
    partial: Option<ParseOutput>,
}

impl AdapterError {
    pub fn new(cause: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        AdapterError {
            cause: cause.into(),
            partial: None,
        }
    }

    /// A failure from a bare message, for adapters without a richer error
    /// type of their own.
    pub fn message(message: impl Into<String>) -> Self {
        AdapterError::new(message.into())
    }

    /// Attach the output built before the failure.
    pub fn with_partial(mut self, partial: impl Into<ParseOutput>) -> Self {
        self.partial = Some(partial.into());
        self
    }

    pub fn cause(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.cause.as_ref()
    }

    pub fn partial(&self) -> Option<&ParseOutput> {
        self.partial.as_ref()
    }

    pub fn into_parts(self) -> (Box<dyn StdError + Send + Sync>, Option<ParseOutput>) {
        (self.cause, self.partial)
    }
}

impl fmt::Display for AdapterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cause)
    }
}

impl StdError for AdapterError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&*self.cause)
    }
}

/// Trait for format adapters
///
/// Implementors provide conversion between a textual dialect and the
/// element tree. Adapters can support parsing, serialization, or both.
pub trait Adapter: Send + Sync {
    /// The name of this adapter (e.g. "refract+json").
    fn name(&self) -> &str;

    /// Media types this adapter answers to, matched exactly.
    fn media_types(&self) -> &[&str];

    /// Content sniffing: does this adapter recognize the raw source?
    /// Used when the caller declares no media type.
    fn detect(&self, _source: &str) -> bool {
        false
    }

    /// Whether this adapter supports parsing (source -> tree).
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this adapter supports serialization (tree -> source).
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text.
    ///
    /// Default implementation reports an unsupported-operation failure.
    /// Adapters that support parsing should override this method.
    fn parse(&self, _request: &ParseRequest<'_>) -> Result<ParseOutput, AdapterError> {
        Err(AdapterError::message(format!(
            "adapter '{}' does not implement parsing",
            self.name()
        )))
    }

    /// Serialize an element tree.
    ///
    /// Default implementation reports an unsupported-operation failure.
    /// Adapters that support serialization should override this method.
    fn serialize(&self, _request: &SerializeRequest<'_>) -> Result<String, AdapterError> {
        Err(AdapterError::message(format!(
            "adapter '{}' does not implement serialization",
            self.name()
        )))
    }

    /// Exact-match check against this adapter's media types.
    fn handles_media_type(&self, media_type: &str) -> bool {
        self.media_types()
            .iter()
            .any(|candidate| *candidate == media_type)
    }
}
