//! Built-in adapters
//!
//! The generic wire form is itself a format, implemented behind the same
//! adapter trait as everything else so the whole system has one uniform
//! surface. Two flavors ship by default: JSON and YAML renditions of the
//! same representation. They are ordinary adapters: registered, resolved,
//! and removable like any third-party one.

pub mod refract_json;
pub mod refract_yaml;

pub use refract_json::RefractJson;
pub use refract_yaml::RefractYaml;
