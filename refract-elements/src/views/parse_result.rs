//! Parse result view
//!
//! A parseResult root is an ordered sequence of top-level results: the
//! parsed API first, diagnostics interleaved or trailing. Base indexed
//! access reaches everything; the accessors here pick out the API and
//! filter the annotations by severity.

use crate::element::Element;
use crate::kind::Kind;
use crate::views::{Annotation, Category};

#[derive(Debug, Clone, Copy)]
pub struct ParseResult<'a> {
    element: &'a Element,
}

impl<'a> ParseResult<'a> {
    pub(crate) fn new(element: &'a Element) -> Self {
        ParseResult { element }
    }

    pub fn element(&self) -> &'a Element {
        self.element
    }

    /// The first category classified `api`.
    pub fn api(&self) -> Option<Category<'a>> {
        self.element
            .items()
            .iter()
            .find(|child| child.kind == Kind::Category && child.has_class("api"))
            .map(Category::new)
    }

    pub fn annotations(&self) -> Vec<Annotation<'a>> {
        self.element
            .items()
            .iter()
            .filter_map(Element::as_annotation)
            .collect()
    }

    pub fn warnings(&self) -> Vec<Annotation<'a>> {
        self.annotations()
            .into_iter()
            .filter(Annotation::is_warning)
            .collect()
    }

    pub fn errors(&self) -> Vec<Annotation<'a>> {
        self.annotations()
            .into_iter()
            .filter(Annotation::is_error)
            .collect()
    }
}
