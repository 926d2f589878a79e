//! Element attributes
//!
//! Attributes map a name to an element. Attribute values are fully-formed
//! elements like everything else in the tree, so an attribute can carry
//! anything from a bare string (`href`) to a whole object structure
//! (`hrefVariables`, `headers`).
//!
//! Lookup of a missing attribute returns `None` rather than failing, the
//! same absent-value policy as indexed access on content.

use crate::element::Element;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Attributes {
    entries: BTreeMap<String, Element>,
}

impl Attributes {
    pub fn new() -> Self {
        Attributes::default()
    }

    /// The element stored under `name`, or `None` when absent.
    pub fn get(&self, name: &str) -> Option<&Element> {
        self.entries.get(name)
    }

    /// Store an element under `name`, returning the previous value if any.
    pub fn insert(&mut self, name: impl Into<String>, element: Element) -> Option<Element> {
        self.entries.insert(name.into(), element)
    }

    pub fn remove(&mut self, name: &str) -> Option<Element> {
        self.entries.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Element)> {
        self.entries.iter()
    }
}
