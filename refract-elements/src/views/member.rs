//! Member view
//!
//! A member holds a key/value pair; both sides are elements. The view
//! answers `None` for a malformed member (one whose content is not a
//! pair), which hand-built trees can produce.

use crate::element::Element;

#[derive(Debug, Clone, Copy)]
pub struct Member<'a> {
    element: &'a Element,
}

impl<'a> Member<'a> {
    pub(crate) fn new(element: &'a Element) -> Self {
        Member { element }
    }

    pub fn element(&self) -> &'a Element {
        self.element
    }

    pub fn key(&self) -> Option<&'a Element> {
        self.element.content.as_pair().map(|pair| &pair.key)
    }

    pub fn value(&self) -> Option<&'a Element> {
        self.element.content.as_pair().map(|pair| &pair.value)
    }

    /// The key's scalar string, the common case.
    pub fn key_str(&self) -> Option<&'a str> {
        self.key().and_then(Element::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::Kind;

    #[test]
    fn test_key_and_value() {
        let element = Element::member(Element::string("id"), Element::string("1"));
        let member = element.as_member().unwrap();

        assert_eq!(member.key_str(), Some("id"));
        assert_eq!(member.value().and_then(Element::as_str), Some("1"));
    }

    #[test]
    fn test_malformed_member_answers_none() {
        let element = Element::new(Kind::Member);
        let member = element.as_member().unwrap();

        assert!(member.key().is_none());
        assert!(member.value().is_none());
    }
}
