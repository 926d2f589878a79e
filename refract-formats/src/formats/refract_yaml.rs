//! YAML wire-form adapter
//!
//! The YAML rendition of the same generic representation the JSON
//! adapter speaks. YAML is a superset of JSON, so detection explicitly
//! declines sources that already parse as JSON; those belong to the
//! JSON adapter regardless of registration order.

use crate::adapter::{Adapter, AdapterError, ParseOutput, ParseRequest, SerializeRequest};
use serde_json::Value;

/// Media type of the YAML wire form.
pub const MEDIA_TYPE: &str = "application/vnd.refract+yaml";

pub struct RefractYaml;

impl Adapter for RefractYaml {
    fn name(&self) -> &str {
        "refract+yaml"
    }

    fn media_types(&self) -> &[&str] {
        &[MEDIA_TYPE]
    }

    fn detect(&self, source: &str) -> bool {
        if serde_json::from_str::<Value>(source).is_ok() {
            return false;
        }
        serde_yaml::from_str::<Value>(source)
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
        serde_yaml::from_str::<Value>(request.source)
            .map(ParseOutput::Generic)
            .map_err(AdapterError::new)
    }

    fn serialize(&self, request: &SerializeRequest<'_>) -> Result<String, AdapterError> {
        // Elements serialize as their wire form, so the serde backend
        // can emit the document directly.
        serde_yaml::to_string(request.api).map_err(AdapterError::new)
    }
}
