//! Outgoing request construction
//!
//! Turns a method, a URI and a folded [`RequestOptions`] into the exact
//! request handed to the transport.

use std::time::Duration;

use percent_encoding::percent_decode_str;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, COOKIE};
use reqwest::Method;
use url::{form_urlencoded, Url};

use crate::config::{RequestOptions, StringMap};
use crate::error::{Result, RquestsError};

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A fully resolved request, built once per call
#[derive(Debug, Clone)]
pub struct OutgoingRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    /// Cookies in send order, already sanitized.
    pub cookies: Vec<(String, String)>,
    pub body: Vec<u8>,
    pub proxy: Option<Url>,
    pub timeout: Option<Duration>,
}

impl OutgoingRequest {
    /// Resolve `options` against `method` and `uri`.
    pub fn build(method: &str, uri: &str, options: &RequestOptions) -> Result<Self> {
        let method = parse_method(method)?;
        let mut url = parse_url(uri)?;

        if let Some(params) = &options.params {
            add_query_params(&mut url, params);
        }

        let (body, content_type) = resolve_body(options)?;

        let mut headers = HeaderMap::new();
        if let Some(content_type) = content_type {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        }
        if let Some(extra) = &options.headers {
            for (key, value) in extra {
                let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
                    RquestsError::InvalidHeader(format!("Invalid header name '{}': {}", key, e))
                })?;
                let value = HeaderValue::from_str(value).map_err(|e| {
                    RquestsError::InvalidHeader(format!("Invalid value for header '{}': {}", key, e))
                })?;
                headers.insert(name, value);
            }
        }

        let cookies = options
            .cookies
            .iter()
            .flatten()
            .map(|(name, value)| (sanitize_cookie_name(name), sanitize_cookie_value(value)))
            .collect();

        let proxy = match options.proxy.as_deref() {
            Some(proxy) if !proxy.is_empty() => Some(parse_proxy(proxy)?),
            _ => None,
        };

        Ok(Self {
            method,
            url,
            headers,
            cookies,
            body,
            proxy,
            timeout: options.timeout_duration(),
        })
    }

    /// Headers as they go on the wire, with cookies folded into `Cookie`.
    pub fn wire_headers(&self) -> Result<HeaderMap> {
        let mut headers = self.headers.clone();
        if let Some(rendered) = self.cookie_header() {
            let combined = match headers.get(COOKIE).and_then(|v| v.to_str().ok()) {
                Some(existing) if !existing.is_empty() => format!("{}; {}", existing, rendered),
                _ => rendered,
            };
            let value = HeaderValue::from_str(&combined).map_err(|e| {
                RquestsError::InvalidHeader(format!("Invalid cookie header: {}", e))
            })?;
            headers.insert(COOKIE, value);
        }
        Ok(headers)
    }

    /// Cookies rendered as `name=value; name2=value2`, `None` when empty.
    pub fn cookie_header(&self) -> Option<String> {
        if self.cookies.is_empty() {
            return None;
        }
        let rendered = self
            .cookies
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join("; ");
        Some(rendered)
    }
}

fn parse_method(method: &str) -> Result<Method> {
    if method.is_empty() {
        return Err(RquestsError::InvalidMethod(
            "HTTP method must not be empty".to_string(),
        ));
    }
    Method::from_bytes(method.as_bytes())
        .map_err(|_| RquestsError::InvalidMethod(format!("Invalid HTTP method '{}'", method)))
}

fn parse_url(uri: &str) -> Result<Url> {
    let url = Url::parse(uri)
        .map_err(|e| RquestsError::InvalidUrl(format!("Invalid URL '{}': {}", uri, e)))?;
    if url.cannot_be_a_base() || url.host_str().is_none() {
        return Err(RquestsError::InvalidUrl(format!(
            "Invalid URL '{}': missing host",
            uri
        )));
    }
    Ok(url)
}

fn parse_proxy(proxy: &str) -> Result<Url> {
    let url = Url::parse(proxy)
        .map_err(|e| RquestsError::Proxy(format!("Invalid proxy '{}': {}", proxy, e)))?;
    if url.host_str().is_none() {
        return Err(RquestsError::Proxy(format!(
            "Invalid proxy '{}': missing host",
            proxy
        )));
    }
    Ok(url)
}

/// Merge `params` into the query already on `url`, re-encoded sorted by key.
///
/// Existing pairs are decoded to raw bytes so escapes that are not UTF-8
/// survive the round trip.
fn add_query_params(url: &mut Url, params: &StringMap) {
    let mut pairs: Vec<(Vec<u8>, Vec<u8>)> =
        url.query().map(raw_query_pairs).unwrap_or_default();
    pairs.extend(
        params
            .iter()
            .map(|(k, v)| (k.as_bytes().to_vec(), v.as_bytes().to_vec())),
    );
    // stable: values for a repeated key keep their order
    pairs.sort_by(|a, b| a.0.cmp(&b.0));

    if pairs.is_empty() {
        url.set_query(None);
        return;
    }

    let encoded = pairs
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                form_urlencoded::byte_serialize(key).collect::<String>(),
                form_urlencoded::byte_serialize(value).collect::<String>()
            )
        })
        .collect::<Vec<_>>()
        .join("&");
    url.set_query(Some(&encoded));
}

fn raw_query_pairs(query: &str) -> Vec<(Vec<u8>, Vec<u8>)> {
    query
        .split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

fn decode_component(component: &str) -> Vec<u8> {
    percent_decode_str(&component.replace('+', " ")).collect()
}

/// The form body is computed first and a `data` body always replaces it.
fn resolve_body(options: &RequestOptions) -> Result<(Vec<u8>, Option<&'static str>)> {
    let mut body = Vec::new();
    let mut content_type = None;

    if let Some(form) = &options.form {
        body = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(form)
            .finish()
            .into_bytes();
        content_type = Some(FORM_CONTENT_TYPE);
    }

    if let Some(data) = &options.data {
        body = serde_json::to_vec(data)?;
        content_type = Some(JSON_CONTENT_TYPE);
    }

    Ok((body, content_type))
}

fn sanitize_cookie_name(name: &str) -> String {
    name.replace(['\n', '\r'], "-")
}

fn sanitize_cookie_value(value: &str) -> String {
    let cleaned: String = value
        .chars()
        .filter(|c| matches!(*c, ' '..='~') && !matches!(*c, '"' | ';' | '\\'))
        .collect();
    if cleaned.contains([' ', ',']) {
        format!("\"{}\"", cleaned)
    } else {
        cleaned
    }
}
