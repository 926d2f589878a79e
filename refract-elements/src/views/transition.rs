//! Transition view
//!
//! A transition is an available operation on a resource; each of its
//! child httpTransaction elements is one request/response exchange.

use crate::element::Element;
use crate::kind::Kind;
use crate::views::HttpTransaction;

#[derive(Debug, Clone, Copy)]
pub struct Transition<'a> {
    element: &'a Element,
}

impl<'a> Transition<'a> {
    pub(crate) fn new(element: &'a Element) -> Self {
        Transition { element }
    }

    pub fn element(&self) -> &'a Element {
        self.element
    }

    pub fn title(&self) -> Option<&'a str> {
        self.element.title()
    }

    pub fn transactions(&self) -> Vec<HttpTransaction<'a>> {
        self.element
            .items()
            .iter()
            .filter_map(Element::as_http_transaction)
            .collect()
    }

    pub fn copy(&self) -> Vec<&'a Element> {
        self.element
            .items()
            .iter()
            .filter(|child| child.kind == Kind::Copy)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Content;

    #[test]
    fn test_transactions_filter_by_kind() {
        let element = Element::new(Kind::Transition).with_children(vec![
            Element::new(Kind::Copy).with_content(Content::String(
                "Gets information about a single frob instance".to_string(),
            )),
            Element::new(Kind::HttpTransaction),
        ]);
        let transition = element.as_transition().unwrap();

        assert_eq!(transition.transactions().len(), 1);
        assert_eq!(transition.copy().len(), 1);
    }
}
