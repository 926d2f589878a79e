//! Typed views over elements
//!
//! Kind-specific accessors live on borrowing view structs rather than on
//! the node type itself. A view is acquired through an `as_*` method on
//! [`Element`], which answers `None` on a kind mismatch; from there the
//! view exposes the derived properties of that kind as pure lenses over
//! the generic shape. No view owns or copies tree data.
//!
//! Example:
//!
//! ```ignore
//! let result = load(&document);
//! let api = result.as_parse_result().and_then(|r| r.api()).unwrap();
//! for group in api.resource_groups() {
//!     println!("{:?}", group.title());
//! }
//! ```

mod annotation;
mod category;
mod http;
mod member;
mod parse_result;
mod resource;
mod transition;

pub use annotation::Annotation;
pub use category::Category;
pub use http::{HttpRequest, HttpResponse, HttpTransaction};
pub use member::Member;
pub use parse_result::ParseResult;
pub use resource::Resource;
pub use transition::Transition;

use crate::element::Element;
use crate::kind::Kind;

impl Element {
    pub fn as_parse_result(&self) -> Option<ParseResult<'_>> {
        (self.kind == Kind::ParseResult).then(|| ParseResult::new(self))
    }

    pub fn as_category(&self) -> Option<Category<'_>> {
        matches!(self.kind, Kind::Category | Kind::ResourceGroup).then(|| Category::new(self))
    }

    pub fn as_resource(&self) -> Option<Resource<'_>> {
        (self.kind == Kind::Resource).then(|| Resource::new(self))
    }

    pub fn as_transition(&self) -> Option<Transition<'_>> {
        (self.kind == Kind::Transition).then(|| Transition::new(self))
    }

    pub fn as_http_transaction(&self) -> Option<HttpTransaction<'_>> {
        (self.kind == Kind::HttpTransaction).then(|| HttpTransaction::new(self))
    }

    pub fn as_http_request(&self) -> Option<HttpRequest<'_>> {
        (self.kind == Kind::HttpRequest).then(|| HttpRequest::new(self))
    }

    pub fn as_http_response(&self) -> Option<HttpResponse<'_>> {
        (self.kind == Kind::HttpResponse).then(|| HttpResponse::new(self))
    }

    pub fn as_annotation(&self) -> Option<Annotation<'_>> {
        (self.kind == Kind::Annotation).then(|| Annotation::new(self))
    }

    pub fn as_member(&self) -> Option<Member<'_>> {
        (self.kind == Kind::Member).then(|| Member::new(self))
    }
}
