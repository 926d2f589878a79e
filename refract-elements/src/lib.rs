//! Semantic element tree for API description documents
//!
//!     This crate defines the normalized, semantically typed document tree that
//!     format tooling (linters, renderers, code generators) operates on without
//!     knowing which textual dialect a document started as, plus the loader that
//!     materializes the tree from the generic wire representation.
//!
//! Architecture
//!
//!     - Element: the one universal node type (kind + meta + attributes + content),
//!       homogeneous all the way down. Attribute values and member keys/values are
//!       elements themselves.
//!     - Kind: the discriminator vocabulary, with Custom as the open extension
//!       point so unknown kinds degrade to the base contract instead of failing.
//!     - load: the document loader, a total function from wire form to tree.
//!       Tolerant by design: long-form meta normalizes, raw scalars lift into
//!       value elements, unknown discriminators load generically.
//!     - views: kind-specific derived accessors as borrowing lenses, acquired
//!       through Element::as_category() and friends.
//!
//!     The file structure:
//!     .
//!     ├── kind.rs             # Kind discriminator vocabulary
//!     ├── meta.rs             # classes / title / description
//!     ├── attributes.rs       # name -> Element map
//!     ├── content.rs          # scalar | element | sequence | pair
//!     ├── element.rs          # the node type and its navigation surface
//!     ├── load.rs             # wire form -> tree
//!     ├── views
//!     │   ├── parse_result.rs
//!     │   ├── category.rs
//!     │   ├── resource.rs
//!     │   ├── transition.rs
//!     │   ├── http.rs
//!     │   ├── annotation.rs
//!     │   └── member.rs
//!     └── lib.rs
//!
//! The wire form
//!
//!     Documents interchange as nested objects tagged by an `element`
//!     discriminator, with optional `meta`, `attributes` and `content`:
//!
//!     ```ignore
//!     {
//!       "element": "category",
//!       "meta": {"classes": ["api"], "title": "My API"},
//!       "content": [
//!         {"element": "copy", "content": "An API description."}
//!       ]
//!     }
//!     ```
//!
//!     Carried in memory as `serde_json::Value`. `load` turns it into a tree;
//!     `Element::to_generic` (and the `Serialize` impl) turn a tree back into it.
//!
//! Immutability
//!
//!     A tree is constructed once, by the loader or by the builder methods, and
//!     every accessor from then on is a pure projection. Nothing in this crate
//!     mutates a tree behind the caller's back.

pub mod attributes;
pub mod content;
pub mod element;
pub mod kind;
pub mod load;
pub mod meta;
pub mod views;

pub use attributes::Attributes;
pub use content::{Content, Pair};
pub use element::Element;
pub use kind::Kind;
pub use load::load;
pub use meta::Meta;
pub use views::{
    Annotation, Category, HttpRequest, HttpResponse, HttpTransaction, Member, ParseResult,
    Resource, Transition,
};
