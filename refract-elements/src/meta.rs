//! Element metadata
//!
//! Meta carries classification and presentation information about a node:
//! its classes, title and description. Meta is informational, never
//! structural; navigation and value extraction ignore it. Fields outside
//! the typed set are preserved verbatim in `extra` so documents carrying
//! vendor metadata survive a load/emit cycle.

use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Meta {
    /// Classifications, always a sequence. Loaders normalize a bare scalar
    /// to a one-element sequence.
    pub classes: Vec<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Meta fields outside the typed set, kept in wire form.
    pub extra: BTreeMap<String, Value>,
}

impl Meta {
    pub fn new() -> Self {
        Meta::default()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
            && self.title.is_none()
            && self.description.is_none()
            && self.extra.is_empty()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|candidate| candidate == class)
    }
}
