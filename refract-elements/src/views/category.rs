//! Category view
//!
//! Categories group other elements. An API is a category classified
//! `api`; a resource group is a category classified `resourceGroup`
//! nested inside it. The derived accessors here are classification
//! filters over the children, nothing more.

use crate::element::Element;
use crate::kind::Kind;
use crate::views::Resource;

#[derive(Debug, Clone, Copy)]
pub struct Category<'a> {
    element: &'a Element,
}

impl<'a> Category<'a> {
    pub(crate) fn new(element: &'a Element) -> Self {
        Category { element }
    }

    pub fn element(&self) -> &'a Element {
        self.element
    }

    pub fn title(&self) -> Option<&'a str> {
        self.element.title()
    }

    /// Child categories classified as resource groups.
    pub fn resource_groups(&self) -> Vec<Category<'a>> {
        self.element
            .items()
            .iter()
            .filter(|child| {
                child.kind == Kind::ResourceGroup
                    || (child.kind == Kind::Category && child.has_class("resourceGroup"))
            })
            .map(Category::new)
            .collect()
    }

    /// Child resources, in document order.
    pub fn resources(&self) -> Vec<Resource<'a>> {
        self.element
            .items()
            .iter()
            .filter_map(Element::as_resource)
            .collect()
    }

    /// Child copy elements (human-readable prose).
    pub fn copy(&self) -> Vec<&'a Element> {
        self.element
            .items()
            .iter()
            .filter(|child| child.kind == Kind::Copy)
            .collect()
    }
}
