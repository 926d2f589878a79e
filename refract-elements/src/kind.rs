//! Element kinds
//!
//! Every node in the tree carries a `Kind` discriminator drawn from the
//! known vocabulary of API description elements. The vocabulary is closed
//! for matching purposes but open for documents: a discriminator this
//! version does not know about loads as `Kind::Custom` and degrades to the
//! base element contract, so forward-compatible documents still load.

use std::fmt;

/// Discriminator for the polymorphic element kinds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Kind {
    // Value elements
    String,
    Number,
    Boolean,
    Null,
    Array,
    Object,
    Member,

    // API description elements
    Category,
    Copy,
    Resource,
    ResourceGroup,
    Transition,
    HttpTransaction,
    HttpRequest,
    HttpResponse,
    HttpHeaders,
    DataStructure,
    Asset,
    Annotation,
    SourceMap,
    HrefVariables,
    ParseResult,

    /// Any discriminator outside the known vocabulary.
    Custom(String),
}

impl Kind {
    /// Map a wire-form discriminator to its kind.
    ///
    /// Unknown names never fail; they become `Kind::Custom` so the rest of
    /// the document still loads.
    pub fn from_name(name: &str) -> Kind {
        match name {
            "string" => Kind::String,
            "number" => Kind::Number,
            "boolean" => Kind::Boolean,
            "null" => Kind::Null,
            "array" => Kind::Array,
            "object" => Kind::Object,
            "member" => Kind::Member,
            "category" => Kind::Category,
            "copy" => Kind::Copy,
            "resource" => Kind::Resource,
            "resourceGroup" => Kind::ResourceGroup,
            "transition" => Kind::Transition,
            "httpTransaction" => Kind::HttpTransaction,
            "httpRequest" => Kind::HttpRequest,
            "httpResponse" => Kind::HttpResponse,
            "httpHeaders" => Kind::HttpHeaders,
            "dataStructure" => Kind::DataStructure,
            "asset" => Kind::Asset,
            "annotation" => Kind::Annotation,
            "sourceMap" => Kind::SourceMap,
            "hrefVariables" => Kind::HrefVariables,
            "parseResult" => Kind::ParseResult,
            other => Kind::Custom(other.to_string()),
        }
    }

    /// The wire-form discriminator for this kind.
    pub fn name(&self) -> &str {
        match self {
            Kind::String => "string",
            Kind::Number => "number",
            Kind::Boolean => "boolean",
            Kind::Null => "null",
            Kind::Array => "array",
            Kind::Object => "object",
            Kind::Member => "member",
            Kind::Category => "category",
            Kind::Copy => "copy",
            Kind::Resource => "resource",
            Kind::ResourceGroup => "resourceGroup",
            Kind::Transition => "transition",
            Kind::HttpTransaction => "httpTransaction",
            Kind::HttpRequest => "httpRequest",
            Kind::HttpResponse => "httpResponse",
            Kind::HttpHeaders => "httpHeaders",
            Kind::DataStructure => "dataStructure",
            Kind::Asset => "asset",
            Kind::Annotation => "annotation",
            Kind::SourceMap => "sourceMap",
            Kind::HrefVariables => "hrefVariables",
            Kind::ParseResult => "parseResult",
            Kind::Custom(name) => name,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Kind::Custom(_))
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
