//! Dispatch errors
//!
//! Three failure kinds, kept distinct so callers can tell them apart:
//! no adapter matched at all, an adapter matched but only speaks the other
//! direction, or the adapter itself failed. Adapter causes are forwarded
//! verbatim through `source()`, never flattened into a message, and a
//! parse failure keeps the normalized partial tree when the adapter
//! produced one.
//!
//! Every failure is scoped to one call. The engine never panics across
//! its public boundary on adapter misbehavior.

use refract_elements::Element;
use std::error::Error as StdError;
use std::fmt;

/// The direction of a dispatch operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Parse,
    Serialize,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Parse => write!(f, "parsing"),
            Operation::Serialize => write!(f, "serialization"),
        }
    }
}

/// Error reported by the dispatch engine.
#[derive(Debug)]
pub enum DispatchError {
    /// No registered adapter matched the requested media type, or none
    /// detected the content.
    NoAdapterFound { media_type: Option<String> },
    /// A resolved adapter lacks the requested operation.
    MissingCapability {
        adapter: String,
        operation: Operation,
    },
    /// The adapter itself failed. The cause is the adapter's own error,
    /// unwrapped; `partial` is the normalized partial tree when the
    /// adapter supplied one.
    AdapterFailed {
        adapter: String,
        cause: Box<dyn StdError + Send + Sync>,
        partial: Option<Element>,
    },
}

impl DispatchError {
    pub fn is_no_adapter(&self) -> bool {
        matches!(self, DispatchError::NoAdapterFound { .. })
    }

    pub fn is_missing_capability(&self) -> bool {
        matches!(self, DispatchError::MissingCapability { .. })
    }

    pub fn is_adapter_failure(&self) -> bool {
        matches!(self, DispatchError::AdapterFailed { .. })
    }

    /// The partial tree accompanying an adapter failure, when any.
    pub fn partial(&self) -> Option<&Element> {
        match self {
            DispatchError::AdapterFailed { partial, .. } => partial.as_ref(),
            _ => None,
        }
    }
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::NoAdapterFound {
                media_type: Some(media_type),
            } => {
                write!(f, "no adapter registered for media type '{media_type}'")
            }
            DispatchError::NoAdapterFound { media_type: None } => {
                write!(f, "no registered adapter detected the source format")
            }
            DispatchError::MissingCapability { adapter, operation } => {
                write!(f, "adapter '{adapter}' does not support {operation}")
            }
            DispatchError::AdapterFailed { adapter, cause, .. } => {
                write!(f, "adapter '{adapter}' failed: {cause}")
            }
        }
    }
}

impl StdError for DispatchError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            DispatchError::AdapterFailed { cause, .. } => Some(&**cause),
            _ => None,
        }
    }
}
