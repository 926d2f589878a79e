//! Resource view
//!
//! A resource is addressed by its `href` attribute, parameterized by
//! `hrefVariables`, and acted on through its child transitions.

use crate::element::Element;
use crate::kind::Kind;
use crate::views::Transition;

#[derive(Debug, Clone, Copy)]
pub struct Resource<'a> {
    element: &'a Element,
}

impl<'a> Resource<'a> {
    pub(crate) fn new(element: &'a Element) -> Self {
        Resource { element }
    }

    pub fn element(&self) -> &'a Element {
        self.element
    }

    pub fn title(&self) -> Option<&'a str> {
        self.element.title()
    }

    pub fn href(&self) -> Option<&'a str> {
        self.element.attribute("href").and_then(Element::as_str)
    }

    /// The href variables object, navigable through `keys()` and
    /// `find_member()` on the element.
    pub fn href_variables(&self) -> Option<&'a Element> {
        self.element.attribute("hrefVariables")
    }

    pub fn transitions(&self) -> Vec<Transition<'a>> {
        self.element
            .items()
            .iter()
            .filter_map(Element::as_transition)
            .collect()
    }

    /// The resource's data structure, when one is attached.
    pub fn data_structure(&self) -> Option<&'a Element> {
        self.element
            .items()
            .iter()
            .find(|child| child.kind == Kind::DataStructure)
    }

    pub fn copy(&self) -> Vec<&'a Element> {
        self.element
            .items()
            .iter()
            .filter(|child| child.kind == Kind::Copy)
            .collect()
    }
}
