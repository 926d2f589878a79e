//! Annotation view
//!
//! Annotations carry parser diagnostics alongside the API in a parse
//! result: a message in content, a numeric code attribute, a warning or
//! error classification, and optional source maps pointing back into the
//! original document.

use crate::element::Element;

#[derive(Debug, Clone, Copy)]
pub struct Annotation<'a> {
    element: &'a Element,
}

impl<'a> Annotation<'a> {
    pub(crate) fn new(element: &'a Element) -> Self {
        Annotation { element }
    }

    pub fn element(&self) -> &'a Element {
        self.element
    }

    pub fn code(&self) -> Option<i64> {
        self.element.attribute("code").and_then(Element::as_i64)
    }

    /// The diagnostic message.
    pub fn text(&self) -> Option<&'a str> {
        self.element.as_str()
    }

    pub fn is_warning(&self) -> bool {
        self.element.has_class("warning")
    }

    pub fn is_error(&self) -> bool {
        self.element.has_class("error")
    }

    /// Source map elements attached to this annotation.
    pub fn source_maps(&self) -> &'a [Element] {
        self.element
            .attribute("sourceMap")
            .map(Element::items)
            .unwrap_or(&[])
    }
}
