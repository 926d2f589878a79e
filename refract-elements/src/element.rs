//! The universal element node
//!
//! `Element` is the one node type the whole tree is made of: a kind
//! discriminator plus meta, attributes and content. Attribute values and
//! member keys/values are themselves elements, so the representation is
//! homogeneous all the way down.
//!
//! The navigation surface is a set of pure projections. Nothing here
//! mutates a loaded tree; builders exist for constructing trees by hand
//! (adapters and tests do this), and every accessor borrows.
//!
//! Absent values are `None` throughout: indexed access out of range,
//! `first()` on scalar content and lookup of a missing attribute all
//! answer with the same sentinel.

use crate::attributes::Attributes;
use crate::content::{Content, Pair};
use crate::kind::Kind;
use crate::meta::Meta;
use serde_json::{Map, Number, Value};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub kind: Kind,
    pub meta: Meta,
    pub attributes: Attributes,
    pub content: Content,
}

impl Element {
    pub fn new(kind: Kind) -> Self {
        Element {
            kind,
            meta: Meta::new(),
            attributes: Attributes::new(),
            content: Content::Empty,
        }
    }

    // ----- constructors for the value kinds -----

    pub fn string(value: impl Into<String>) -> Self {
        let mut element = Element::new(Kind::String);
        element.content = Content::String(value.into());
        element
    }

    pub fn number(value: impl Into<Number>) -> Self {
        let mut element = Element::new(Kind::Number);
        element.content = Content::Number(value.into());
        element
    }

    /// A number element from a float. Non-finite values degrade to null
    /// content, which is what they unwrap back to.
    pub fn float(value: f64) -> Self {
        let mut element = Element::new(Kind::Number);
        element.content = match Number::from_f64(value) {
            Some(number) => Content::Number(number),
            None => Content::Null,
        };
        element
    }

    pub fn boolean(value: bool) -> Self {
        let mut element = Element::new(Kind::Boolean);
        element.content = Content::Boolean(value);
        element
    }

    pub fn null() -> Self {
        let mut element = Element::new(Kind::Null);
        element.content = Content::Null;
        element
    }

    pub fn array(items: Vec<Element>) -> Self {
        let mut element = Element::new(Kind::Array);
        element.content = Content::Elements(items);
        element
    }

    pub fn object(members: Vec<Element>) -> Self {
        let mut element = Element::new(Kind::Object);
        element.content = Content::Elements(members);
        element
    }

    pub fn member(key: Element, value: Element) -> Self {
        let mut element = Element::new(Kind::Member);
        element.content = Content::Pair(Box::new(Pair { key, value }));
        element
    }

    // ----- builders -----

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.meta.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.meta.description = Some(description.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.meta.classes.push(class.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, element: Element) -> Self {
        self.attributes.insert(name, element);
        self
    }

    pub fn with_content(mut self, content: Content) -> Self {
        self.content = content;
        self
    }

    /// Append a child, turning non-sequence content into a sequence.
    pub fn with_child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Elements(items) => items.push(child),
            _ => self.content = Content::Elements(vec![child]),
        }
        self
    }

    pub fn with_children(mut self, children: Vec<Element>) -> Self {
        self.content = Content::Elements(children);
        self
    }

    // ----- meta conveniences -----

    /// The wire-form discriminator of this element.
    pub fn name(&self) -> &str {
        self.kind.name()
    }

    pub fn title(&self) -> Option<&str> {
        self.meta.title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.meta.description.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.meta.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.meta.has_class(class)
    }

    /// The element stored under an attribute name, `None` when absent.
    pub fn attribute(&self, name: &str) -> Option<&Element> {
        self.attributes.get(name)
    }

    // ----- sequence navigation -----

    /// The child elements when content is a sequence, an empty slice
    /// otherwise.
    pub fn items(&self) -> &[Element] {
        match &self.content {
            Content::Elements(items) => items,
            _ => &[],
        }
    }

    pub fn first(&self) -> Option<&Element> {
        self.items().first()
    }

    pub fn get(&self, index: usize) -> Option<&Element> {
        self.items().get(index)
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    // ----- object-shaped navigation -----

    /// The ordered member key values of object-shaped content.
    pub fn keys(&self) -> Vec<String> {
        self.items()
            .iter()
            .filter_map(|item| {
                item.content
                    .as_pair()
                    .and_then(|pair| pair.key.as_str())
                    .map(String::from)
            })
            .collect()
    }

    /// The member element stored under `key`, `None` when absent.
    pub fn find_member(&self, key: &str) -> Option<&Element> {
        self.items().iter().find(|item| {
            item.content
                .as_pair()
                .and_then(|pair| pair.key.as_str())
                .map_or(false, |candidate| candidate == key)
        })
    }

    // ----- scalar extraction -----

    pub fn as_str(&self) -> Option<&str> {
        match &self.content {
            Content::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match &self.content {
            Content::Number(number) => number.as_i64(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match &self.content {
            Content::Number(number) => number.as_f64(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match &self.content {
            Content::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    // ----- value extraction -----

    /// Recursively unwrap to a plain value.
    ///
    /// Scalars pass through; sequences map element-wise; object-shaped
    /// sequences (every item a member) become key/value maps; member pairs
    /// become `{"key": …, "value": …}` objects. Absent and null content
    /// both unwrap to null, never to zero or the empty string.
    pub fn to_value(&self) -> Value {
        match &self.content {
            Content::Empty | Content::Null => Value::Null,
            Content::Boolean(value) => Value::Bool(*value),
            Content::Number(number) => Value::Number(number.clone()),
            Content::String(value) => Value::String(value.clone()),
            Content::Element(inner) => inner.to_value(),
            Content::Elements(items) => {
                let object_shaped = self.kind == Kind::Object
                    || (!items.is_empty()
                        && items.iter().all(|item| item.content.as_pair().is_some()));
                if object_shaped {
                    let mut map = Map::new();
                    for item in items {
                        if let Some(pair) = item.content.as_pair() {
                            if let Some(key) = pair.key.as_str() {
                                map.insert(key.to_string(), pair.value.to_value());
                            }
                        }
                    }
                    Value::Object(map)
                } else {
                    Value::Array(items.iter().map(Element::to_value).collect())
                }
            }
            Content::Pair(pair) => {
                let mut map = Map::new();
                map.insert("key".to_string(), pair.key.to_value());
                map.insert("value".to_string(), pair.value.to_value());
                Value::Object(map)
            }
        }
    }

    /// Emit the wire form of this subtree.
    ///
    /// Inverse of loading: a loaded tree emitted through here and loaded
    /// again compares equal.
    pub fn to_generic(&self) -> Value {
        let mut map = Map::new();
        map.insert(
            "element".to_string(),
            Value::String(self.kind.name().to_string()),
        );

        if !self.meta.is_empty() {
            let mut meta = Map::new();
            if !self.meta.classes.is_empty() {
                meta.insert(
                    "classes".to_string(),
                    Value::Array(
                        self.meta
                            .classes
                            .iter()
                            .cloned()
                            .map(Value::String)
                            .collect(),
                    ),
                );
            }
            if let Some(title) = &self.meta.title {
                meta.insert("title".to_string(), Value::String(title.clone()));
            }
            if let Some(description) = &self.meta.description {
                meta.insert(
                    "description".to_string(),
                    Value::String(description.clone()),
                );
            }
            for (name, value) in &self.meta.extra {
                meta.insert(name.clone(), value.clone());
            }
            map.insert("meta".to_string(), Value::Object(meta));
        }

        if !self.attributes.is_empty() {
            let mut attributes = Map::new();
            for (name, element) in self.attributes.iter() {
                attributes.insert(name.clone(), element.to_generic());
            }
            map.insert("attributes".to_string(), Value::Object(attributes));
        }

        match &self.content {
            Content::Empty => {}
            Content::Null => {
                map.insert("content".to_string(), Value::Null);
            }
            Content::Boolean(value) => {
                map.insert("content".to_string(), Value::Bool(*value));
            }
            Content::Number(number) => {
                map.insert("content".to_string(), Value::Number(number.clone()));
            }
            Content::String(value) => {
                map.insert("content".to_string(), Value::String(value.clone()));
            }
            Content::Element(inner) => {
                map.insert("content".to_string(), inner.to_generic());
            }
            Content::Elements(items) => {
                map.insert(
                    "content".to_string(),
                    Value::Array(items.iter().map(Element::to_generic).collect()),
                );
            }
            Content::Pair(pair) => {
                let mut content = Map::new();
                content.insert("key".to_string(), pair.key.to_generic());
                content.insert("value".to_string(), pair.value.to_generic());
                map.insert("content".to_string(), Value::Object(content));
            }
        }

        Value::Object(map)
    }

    // ----- recursive queries -----

    /// Iterate every element in this subtree's content, depth-first
    /// pre-order. Covers sequence items, single nested elements and both
    /// sides of member pairs; attribute subtrees are not walked.
    pub fn descendants(&self) -> Box<dyn Iterator<Item = &Element> + '_> {
        match &self.content {
            Content::Elements(items) => Box::new(
                items
                    .iter()
                    .flat_map(|child| std::iter::once(child).chain(child.descendants())),
            ),
            Content::Element(inner) => {
                Box::new(std::iter::once(inner.as_ref()).chain(inner.descendants()))
            }
            Content::Pair(pair) => Box::new(
                std::iter::once(&pair.key)
                    .chain(pair.key.descendants())
                    .chain(std::iter::once(&pair.value))
                    .chain(pair.value.descendants()),
            ),
            _ => Box::new(std::iter::empty()),
        }
    }

    pub fn find_by_kind(&self, kind: &Kind) -> Vec<&Element> {
        self.descendants()
            .filter(|element| &element.kind == kind)
            .collect()
    }

    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        self.descendants()
            .filter(|element| element.has_class(class))
            .collect()
    }
}

/// Elements serialize as their wire form, so any serde backend can emit
/// the generic representation directly.
impl serde::Serialize for Element {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_generic().serialize(serializer)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.content {
            Content::Empty => write!(f, "{}", self.kind.name()),
            Content::Null => write!(f, "{}(null)", self.kind.name()),
            Content::Boolean(value) => write!(f, "{}({})", self.kind.name(), value),
            Content::Number(number) => write!(f, "{}({})", self.kind.name(), number),
            Content::String(value) => write!(f, "{}('{}')", self.kind.name(), value),
            Content::Element(_) => write!(f, "{}(1 item)", self.kind.name()),
            Content::Elements(items) => {
                write!(f, "{}({} items)", self.kind.name(), items.len())
            }
            Content::Pair(pair) => write!(f, "{}({})", self.kind.name(), pair.key),
        }
    }
}
