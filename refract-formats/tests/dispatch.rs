//! End-to-end dispatch over the built-in wire-form adapters
//!
//! Parses a full API description fixture through the default engine,
//! navigates the resulting tree, and round-trips it across both built-in
//! formats.

use refract_formats::{Element, Engine, ParseOptions, SerializeOptions};
use serde_json::json;

static FROB: &str = include_str!("fixtures/frob.refract.json");

const JSON_MEDIA_TYPE: &str = "application/vnd.refract+json";
const YAML_MEDIA_TYPE: &str = "application/vnd.refract+yaml";

#[test]
fn parse_fixture_by_media_type() {
    let engine = Engine::with_defaults();

    let result = engine
        .parse(&ParseOptions::new(FROB).with_media_type(JSON_MEDIA_TYPE))
        .unwrap();
    assert_eq!(result.first().and_then(Element::title), Some("My API"));
}

#[test]
fn parse_fixture_by_detection() {
    let engine = Engine::with_defaults();

    // No media type declared; the JSON adapter detects the content.
    let result = engine.parse(&ParseOptions::new(FROB)).unwrap();
    assert_eq!(result.first().and_then(Element::title), Some("My API"));
}

#[test]
fn parsed_tree_navigates_to_the_exchange() {
    let engine = Engine::with_defaults();
    let result = engine.parse(&ParseOptions::new(FROB)).unwrap();

    let api = result.first().unwrap().as_category().unwrap();
    assert_eq!(api.resource_groups().len(), 1);

    let resource = api.resource_groups()[0].resources()[0];
    assert_eq!(resource.href(), Some("/frobs/{id}"));
    assert_eq!(
        resource.href_variables().map(Element::keys),
        Some(vec!["id".to_string()])
    );

    let response = resource.transitions()[0].transactions()[0]
        .response()
        .unwrap();
    assert_eq!(response.status_code(), Some(200));
    assert_eq!(response.header("content-type"), Some("application/json"));

    let annotation = result.get(1).unwrap().as_annotation().unwrap();
    assert_eq!(annotation.code(), Some(6));
    assert_eq!(annotation.text(), Some("description"));
}

#[test]
fn json_round_trip_preserves_the_tree() {
    let engine = Engine::with_defaults();
    let parsed = engine.parse(&ParseOptions::new(FROB)).unwrap();

    let serialized = engine
        .serialize(&SerializeOptions::new(&parsed, JSON_MEDIA_TYPE))
        .unwrap();
    let reparsed = engine
        .parse(&ParseOptions::new(&serialized).with_media_type(JSON_MEDIA_TYPE))
        .unwrap();

    assert_eq!(parsed, reparsed);
}

#[test]
fn cross_format_round_trip_through_yaml() {
    let engine = Engine::with_defaults();
    let parsed = engine.parse(&ParseOptions::new(FROB)).unwrap();

    let yaml = engine
        .serialize(&SerializeOptions::new(&parsed, YAML_MEDIA_TYPE))
        .unwrap();
    assert_ne!(yaml, FROB);

    // The YAML rendition detects and reloads to the identical tree.
    let reparsed = engine.parse(&ParseOptions::new(&yaml)).unwrap();
    assert_eq!(parsed, reparsed);
}

#[test]
fn pretty_option_reaches_the_adapter() {
    let engine = Engine::with_defaults();
    let api = engine.load(&json!({"element": "string", "content": "frob"}));

    let compact = engine
        .serialize(&SerializeOptions::new(&api, JSON_MEDIA_TYPE))
        .unwrap();
    let pretty = engine
        .serialize(&SerializeOptions::new(&api, JSON_MEDIA_TYPE).with_option("pretty", true))
        .unwrap();

    assert!(!compact.contains('\n'));
    assert!(pretty.contains('\n'));
}

#[test]
fn unregistering_the_json_adapter_breaks_detection() {
    let mut engine = Engine::with_defaults();
    engine.unregister("refract+json");

    let error = engine.parse(&ParseOptions::new(FROB)).unwrap_err();
    assert!(error.is_no_adapter());

    // The YAML adapter is still there and unaffected.
    assert!(engine.registry().has("refract+yaml"));
}
