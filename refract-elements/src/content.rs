//! Element content
//!
//! `Content` is the common wrapper for everything an element can hold:
//! nothing at all, a scalar, one nested element, an ordered sequence of
//! child elements, or a member's key/value pair. It lets tooling operate
//! uniformly on mixed structures without caring which kind of node it is
//! looking at.
//!
//! `Empty` and `Null` are distinct on purpose: an element without a
//! `content` field stays without one when emitted, while an explicit null
//! scalar round-trips as `content: null`. Both unwrap to the unset value.

use crate::element::Element;
use serde_json::Number;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Content {
    /// No content at all.
    #[default]
    Empty,
    /// An explicit null scalar.
    Null,
    Boolean(bool),
    /// Numbers keep their wire representation, so integers stay integers.
    Number(Number),
    String(String),
    /// A single nested element, e.g. the payload of a dataStructure.
    Element(Box<Element>),
    /// An ordered sequence of child elements.
    Elements(Vec<Element>),
    /// A member's key/value pair.
    Pair(Box<Pair>),
}

/// The key/value pair carried by a member element. Both sides are
/// fully-formed elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Pair {
    pub key: Element,
    pub value: Element,
}

impl Content {
    pub fn is_empty(&self) -> bool {
        matches!(self, Content::Empty)
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Content::Elements(_))
    }

    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Content::Null | Content::Boolean(_) | Content::Number(_) | Content::String(_)
        )
    }

    pub fn as_pair(&self) -> Option<&Pair> {
        match self {
            Content::Pair(pair) => Some(pair),
            _ => None,
        }
    }
}
