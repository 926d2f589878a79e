//! HTTP exchange views
//!
//! An httpTransaction pairs one request with one response. The response
//! view reads its status code and headers from attributes; header lookup
//! by name is case-insensitive, HTTP-style, against the member keys of
//! the httpHeaders element.

use crate::element::Element;
use crate::kind::Kind;

#[derive(Debug, Clone, Copy)]
pub struct HttpTransaction<'a> {
    element: &'a Element,
}

impl<'a> HttpTransaction<'a> {
    pub(crate) fn new(element: &'a Element) -> Self {
        HttpTransaction { element }
    }

    pub fn element(&self) -> &'a Element {
        self.element
    }

    pub fn title(&self) -> Option<&'a str> {
        self.element.title()
    }

    pub fn request(&self) -> Option<HttpRequest<'a>> {
        self.element
            .items()
            .iter()
            .find_map(Element::as_http_request)
    }

    pub fn response(&self) -> Option<HttpResponse<'a>> {
        self.element
            .items()
            .iter()
            .find_map(Element::as_http_response)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HttpRequest<'a> {
    element: &'a Element,
}

impl<'a> HttpRequest<'a> {
    pub(crate) fn new(element: &'a Element) -> Self {
        HttpRequest { element }
    }

    pub fn element(&self) -> &'a Element {
        self.element
    }

    pub fn method(&self) -> Option<&'a str> {
        self.element.attribute("method").and_then(Element::as_str)
    }

    pub fn headers(&self) -> Option<&'a Element> {
        self.element.attribute("headers")
    }

    pub fn header(&self, name: &str) -> Option<&'a str> {
        header_lookup(self.headers(), name)
    }

    /// The message body asset, when one is attached.
    pub fn message_body(&self) -> Option<&'a Element> {
        message_body(self.element)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HttpResponse<'a> {
    element: &'a Element,
}

impl<'a> HttpResponse<'a> {
    pub(crate) fn new(element: &'a Element) -> Self {
        HttpResponse { element }
    }

    pub fn element(&self) -> &'a Element {
        self.element
    }

    /// The status code attribute, whether the document carried it as a
    /// number or a numeric string.
    pub fn status_code(&self) -> Option<u16> {
        let code = self.element.attribute("statusCode")?;
        if let Some(number) = code.as_i64() {
            return u16::try_from(number).ok();
        }
        code.as_str().and_then(|text| text.parse().ok())
    }

    pub fn headers(&self) -> Option<&'a Element> {
        self.element.attribute("headers")
    }

    /// Header value by name, matched case-insensitively.
    pub fn header(&self, name: &str) -> Option<&'a str> {
        header_lookup(self.headers(), name)
    }

    pub fn message_body(&self) -> Option<&'a Element> {
        message_body(self.element)
    }
}

fn header_lookup<'a>(headers: Option<&'a Element>, name: &str) -> Option<&'a str> {
    headers?.items().iter().find_map(|item| {
        let pair = item.content.as_pair()?;
        let key = pair.key.as_str()?;
        if key.eq_ignore_ascii_case(name) {
            pair.value.as_str()
        } else {
            None
        }
    })
}

fn message_body(element: &Element) -> Option<&Element> {
    element
        .items()
        .iter()
        .find(|child| child.kind == Kind::Asset && child.has_class("messageBody"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_transaction() -> Element {
        crate::load(&json!({
            "element": "httpTransaction",
            "content": [
                {
                    "element": "httpRequest",
                    "attributes": {"method": "GET"},
                    "content": [],
                },
                {
                    "element": "httpResponse",
                    "attributes": {
                        "statusCode": 200,
                        "headers": {
                            "element": "httpHeaders",
                            "content": [
                                {"element": "member", "content": {
                                    "key": {"element": "string", "content": "Content-Type"},
                                    "value": {"element": "string", "content": "application/json"},
                                }},
                            ],
                        },
                    },
                    "content": [
                        {
                            "element": "asset",
                            "meta": {"classes": ["messageBody"]},
                            "content": "{\"id\": \"1\"}",
                        },
                    ],
                },
            ],
        }))
    }

    #[test]
    fn test_request_and_response() {
        let element = sample_transaction();
        let transaction = element.as_http_transaction().unwrap();

        let request = transaction.request().unwrap();
        assert_eq!(request.method(), Some("GET"));

        let response = transaction.response().unwrap();
        assert_eq!(response.status_code(), Some(200));
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let element = sample_transaction();
        let response = element.as_http_transaction().unwrap().response().unwrap();

        assert_eq!(response.header("content-type"), Some("application/json"));
        assert_eq!(response.header("CONTENT-TYPE"), Some("application/json"));
        assert!(response.header("accept").is_none());
    }

    #[test]
    fn test_string_status_code_parses() {
        let element = crate::load(&json!({
            "element": "httpResponse",
            "attributes": {"statusCode": "404"},
        }));
        let response = element.as_http_response().unwrap();
        assert_eq!(response.status_code(), Some(404));
    }

    #[test]
    fn test_message_body() {
        let element = sample_transaction();
        let response = element.as_http_transaction().unwrap().response().unwrap();

        let body = response.message_body().unwrap();
        assert_eq!(body.as_str(), Some("{\"id\": \"1\"}"));
    }
}
