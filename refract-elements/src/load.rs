//! Document loader
//!
//! Walks the generic nested-object representation (`element` discriminator,
//! optional `meta`, `attributes`, `content`) and materializes the matching
//! element tree, recursively.
//!
//! The loader is total: it never rejects a document. Unknown discriminators
//! load as generic elements preserving their raw shape, bare scalars in
//! places expecting element shapes are lifted into value elements, and
//! long-form meta (a bare scalar where a sequence belongs) is normalized
//! rather than refused. Tooling gets a tree out of whatever it was handed.
//!
//! Recursion rule per node: dispatch on the `element` discriminator, then
//! load attribute values and content before attaching them to the node.
//! Content objects carrying a `key` become member pairs; content objects
//! carrying their own `element` become a single nested element.

use crate::attributes::Attributes;
use crate::content::{Content, Pair};
use crate::element::Element;
use crate::kind::Kind;
use crate::meta::Meta;
use serde_json::{Map, Value};

/// Materialize a generic document into an element tree.
pub fn load(value: &Value) -> Element {
    match element_shaped(value) {
        Some((name, map)) => load_element(name, map),
        None => value_element(value),
    }
}

impl Element {
    /// See [`load`].
    pub fn from_generic(value: &Value) -> Element {
        load(value)
    }
}

/// An object with a string `element` field is element-shaped; anything
/// else is a raw value.
fn element_shaped(value: &Value) -> Option<(&str, &Map<String, Value>)> {
    let map = value.as_object()?;
    let name = map.get("element")?.as_str()?;
    Some((name, map))
}

fn load_element(name: &str, map: &Map<String, Value>) -> Element {
    let kind = Kind::from_name(name);
    if kind.is_custom() {
        log::debug!("unknown element kind '{name}', loading as a generic element");
    }

    let mut element = Element::new(kind);
    if let Some(meta) = map.get("meta").and_then(Value::as_object) {
        element.meta = load_meta(meta);
    }
    if let Some(attributes) = map.get("attributes").and_then(Value::as_object) {
        element.attributes = load_attributes(attributes);
    }
    element.content = match map.get("content") {
        None => Content::Empty,
        Some(content) => load_content(content),
    };
    element
}

fn load_meta(map: &Map<String, Value>) -> Meta {
    let mut meta = Meta::new();
    for (name, value) in map {
        match name.as_str() {
            "classes" => meta.classes = load_classes(value),
            "title" => meta.title = scalar_string(value),
            "description" => meta.description = scalar_string(value),
            _ => {
                meta.extra.insert(name.clone(), value.clone());
            }
        }
    }
    meta
}

/// Classifications normalize to a sequence: a bare scalar becomes a
/// one-element sequence, and element-shaped arrays unwrap to their
/// member strings.
fn load_classes(value: &Value) -> Vec<String> {
    match value {
        Value::String(class) => vec![class.clone()],
        Value::Array(items) => items.iter().filter_map(scalar_string).collect(),
        other => element_shaped(other)
            .and_then(|(_, map)| map.get("content"))
            .map(load_classes)
            .unwrap_or_default(),
    }
}

/// A string given either bare or wrapped in a string element.
fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        other => element_shaped(other)
            .and_then(|(_, map)| map.get("content"))
            .and_then(Value::as_str)
            .map(String::from),
    }
}

fn load_attributes(map: &Map<String, Value>) -> Attributes {
    let mut attributes = Attributes::new();
    for (name, value) in map {
        attributes.insert(name.clone(), load(value));
    }
    attributes
}

fn load_content(value: &Value) -> Content {
    match value {
        Value::Null => Content::Null,
        Value::Bool(flag) => Content::Boolean(*flag),
        Value::Number(number) => Content::Number(number.clone()),
        Value::String(text) => Content::String(text.clone()),
        Value::Array(items) => Content::Elements(items.iter().map(load).collect()),
        Value::Object(map) => load_object_content(value, map),
    }
}

fn load_object_content(value: &Value, map: &Map<String, Value>) -> Content {
    if map.get("element").map_or(false, Value::is_string) {
        return Content::Element(Box::new(load(value)));
    }
    match map.get("key") {
        Some(key) => Content::Pair(Box::new(Pair {
            key: load(key),
            value: map.get("value").map(load).unwrap_or_else(Element::null),
        })),
        // A bare object in content position lifts to members.
        None => Content::Elements(lift_members(map)),
    }
}

/// Lift a raw value into the matching value element.
fn value_element(value: &Value) -> Element {
    match value {
        Value::Null => Element::null(),
        Value::Bool(flag) => Element::boolean(*flag),
        Value::Number(number) => Element::number(number.clone()),
        Value::String(text) => Element::string(text.clone()),
        Value::Array(items) => Element::array(items.iter().map(load).collect()),
        Value::Object(map) => Element::object(lift_members(map)),
    }
}

fn lift_members(map: &Map<String, Value>) -> Vec<Element> {
    map.iter()
        .map(|(key, value)| Element::member(Element::string(key.clone()), load(value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_load_scalar_element() {
        let element = load(&json!({"element": "string", "content": "frob"}));
        assert_eq!(element.kind, Kind::String);
        assert_eq!(element.as_str(), Some("frob"));
    }

    #[test]
    fn test_load_null_content_stays_null() {
        let element = load(&json!({"element": "string", "content": null}));
        assert_eq!(element.content, Content::Null);
        assert_eq!(element.to_value(), Value::Null);
    }

    #[test]
    fn test_load_absent_content_is_empty() {
        let element = load(&json!({"element": "httpRequest"}));
        assert!(element.content.is_empty());
    }

    #[test]
    fn test_load_long_form_classes() {
        let element = load(&json!({
            "element": "category",
            "meta": {"classes": "api"},
            "content": [],
        }));
        assert_eq!(element.classes(), ["api".to_string()]);
        assert!(element.has_class("api"));
    }

    #[test]
    fn test_load_element_shaped_meta() {
        let element = load(&json!({
            "element": "category",
            "meta": {
                "classes": {"element": "array", "content": [
                    {"element": "string", "content": "api"},
                ]},
                "title": {"element": "string", "content": "My API"},
            },
        }));
        assert_eq!(element.classes(), ["api".to_string()]);
        assert_eq!(element.title(), Some("My API"));
    }

    #[test]
    fn test_load_preserves_unknown_meta() {
        let element = load(&json!({
            "element": "category",
            "meta": {"links": ["self"]},
        }));
        assert_eq!(element.meta.extra.get("links"), Some(&json!(["self"])));
    }

    #[test]
    fn test_load_unknown_kind_does_not_fail() {
        let element = load(&json!({
            "element": "vendorExtension",
            "content": "payload",
        }));
        assert_eq!(element.kind, Kind::Custom("vendorExtension".to_string()));
        assert_eq!(element.as_str(), Some("payload"));
    }

    #[test]
    fn test_load_member_pair() {
        let element = load(&json!({
            "element": "member",
            "content": {
                "key": {"element": "string", "content": "id"},
                "value": {"element": "string", "content": ""},
            },
        }));
        let pair = element.content.as_pair().unwrap();
        assert_eq!(pair.key.as_str(), Some("id"));
        assert_eq!(pair.value.as_str(), Some(""));
    }

    #[test]
    fn test_load_member_without_value_tolerated() {
        let element = load(&json!({
            "element": "member",
            "content": {"key": {"element": "string", "content": "id"}},
        }));
        let pair = element.content.as_pair().unwrap();
        assert_eq!(pair.value.kind, Kind::Null);
    }

    #[test]
    fn test_load_single_element_content() {
        let element = load(&json!({
            "element": "dataStructure",
            "content": {"element": "object", "content": []},
        }));
        match &element.content {
            Content::Element(inner) => assert_eq!(inner.kind, Kind::Object),
            other => panic!("expected single element content, got {other:?}"),
        }
    }

    #[test]
    fn test_load_raw_attribute_values() {
        let element = load(&json!({
            "element": "httpResponse",
            "attributes": {
                "statusCode": 200,
                "typeAttributes": ["required"],
            },
        }));
        assert_eq!(
            element.attribute("statusCode").and_then(Element::as_i64),
            Some(200)
        );
        let type_attributes = element.attribute("typeAttributes").unwrap();
        assert_eq!(type_attributes.kind, Kind::Array);
        assert_eq!(type_attributes.to_value(), json!(["required"]));
    }

    #[test]
    fn test_load_element_shaped_inside_raw_array() {
        // Element-shaped nodes nested in a raw array still load as typed
        // elements, the sourceMap attribute shape.
        let element = load(&json!({
            "element": "annotation",
            "attributes": {
                "sourceMap": [
                    {"element": "sourceMap", "content": [[0, 10]]},
                ],
            },
            "content": "description",
        }));
        let maps = element.attribute("sourceMap").unwrap();
        let first = maps.first().unwrap();
        assert_eq!(first.kind, Kind::SourceMap);
        assert_eq!(first.to_value(), json!([[0, 10]]));
    }

    #[test]
    fn test_load_raw_object_content_lifts_to_members() {
        let element = load(&json!({
            "element": "object",
            "content": {"id": "1"},
        }));
        assert_eq!(element.keys(), vec!["id".to_string()]);
        assert_eq!(element.to_value(), json!({"id": "1"}));
    }

    #[test]
    fn test_emit_then_load_round_trips() {
        let document = json!({
            "element": "category",
            "meta": {"classes": ["api"], "title": "My API"},
            "attributes": {"version": {"element": "string", "content": "1.0"}},
            "content": [
                {"element": "copy", "content": "An API description."},
                {"element": "string", "content": null},
            ],
        });

        let element = load(&document);
        let reloaded = load(&element.to_generic());
        assert_eq!(element, reloaded);
    }

    proptest! {
        #[test]
        fn prop_string_round_trips(text in ".*") {
            let element = load(&Value::String(text.clone()));
            prop_assert_eq!(element.to_value(), Value::String(text));
        }

        #[test]
        fn prop_integer_round_trips(number in any::<i64>()) {
            let element = load(&Value::from(number));
            prop_assert_eq!(element.to_value(), Value::from(number));
        }

        #[test]
        fn prop_boolean_round_trips(flag in any::<bool>()) {
            let element = load(&Value::Bool(flag));
            prop_assert_eq!(element.to_value(), Value::Bool(flag));
        }
    }
}
