//! HTTP response handling

use std::fmt;

use encoding_rs::{Encoding, UTF_8};
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use serde::de::DeserializeOwned;

use crate::error::Result;

/// Everything the transport hands back for one request
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
    }

    /// Decode the body, dropping status and headers.
    pub fn into_response(self) -> Response {
        let content = decode_body(&self.body, self.content_type());
        Response { content }
    }
}

/// Simplified response: the decoded body text only
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    pub content: String,
}

impl Response {
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Parse the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.content)?)
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

/// Decode with the declared charset, falling back to UTF-8.
///
/// A byte order mark overrides the declared charset. Malformed sequences
/// become U+FFFD.
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(charset)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8);
    let (text, _, had_errors) = encoding.decode(body);
    if had_errors {
        log::debug!("response body is not valid {}", encoding.name());
    }
    text.into_owned()
}

fn charset(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        if name.trim().eq_ignore_ascii_case("charset") {
            Some(value.trim().trim_matches('"'))
        } else {
            None
        }
    })
}
