//! JSON wire-form adapter
//!
//! Parses the JSON rendition of the generic representation and serializes
//! element trees back to it. Detection accepts any JSON document whose
//! top level carries an `element` discriminator.

use crate::adapter::{Adapter, AdapterError, ParseOutput, ParseRequest, SerializeRequest};
use serde_json::Value;

/// Media type of the JSON wire form.
pub const MEDIA_TYPE: &str = "application/vnd.refract+json";

pub struct RefractJson;

impl Adapter for RefractJson {
    fn name(&self) -> &str {
        "refract+json"
    }

    fn media_types(&self) -> &[&str] {
        &[MEDIA_TYPE]
    }

    fn detect(&self, source: &str) -> bool {
        serde_json::from_str::<Value>(source)
            .map(|document| document.get("element").map_or(false, Value::is_string))
            .unwrap_or(false)
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, request: &ParseRequest<'_>) -> Result<ParseOutput, AdapterError> {
        let document: Value =
            serde_json::from_str(request.source).map_err(AdapterError::new)?;
        Ok(ParseOutput::Generic(document))
    }

    fn serialize(&self, request: &SerializeRequest<'_>) -> Result<String, AdapterError> {
        let document = request.api.to_generic();
        let pretty = request
            .options
            .get("pretty")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let text = if pretty {
            serde_json::to_string_pretty(&document)
        } else {
            serde_json::to_string(&document)
        };
        text.map_err(AdapterError::new)
    }
}
