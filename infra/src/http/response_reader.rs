//! Tolerant reading of upstream response bodies.
//!
//! The eGov endpoints answer JSON on good days and HTML error pages or
//! empty bodies on bad ones, sometimes with a misleading `Content-Type`.
//! Every body is therefore read as text first and parsed opportunistically,
//! so a malformed body downgrades to diagnostics instead of failing the
//! read itself.

use serde_json::Value;

/// What came back in one upstream response body.
#[derive(Debug, Clone, PartialEq)]
pub struct BodySnapshot {
    /// `Content-Type` header as received, if any
    pub content_type: Option<String>,
    /// Raw body text, always kept
    pub text: String,
    /// Parsed JSON, when the text was valid JSON
    pub json: Option<Value>,
}

impl BodySnapshot {
    /// Build a snapshot from a received body.
    ///
    /// Parsing is attempted on any non-empty text regardless of the
    /// declared content type; the header is recorded for diagnostics only.
    pub fn parse(content_type: Option<String>, text: String) -> Self {
        let json = if text.trim().is_empty() {
            None
        } else {
            serde_json::from_str(&text).ok()
        };
        Self {
            content_type,
            text,
            json,
        }
    }
}

/// Drain a reqwest response into a status code and a body snapshot.
///
/// A failure while reading the body yields an empty snapshot rather than an
/// error; the status code is already known at that point and is what the
/// caller acts on.
pub async fn read_body(response: reqwest::Response) -> (u16, BodySnapshot) {
    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string());
    let text = response.text().await.unwrap_or_default();
    (status, BodySnapshot::parse(content_type, text))
}
