//! Transport boundary
//!
//! The builder never talks to the network itself. It hands a finished
//! [`OutgoingRequest`] to a [`Transport`], which owns connection handling,
//! TLS and everything below the HTTP message.

use std::future::Future;

use reqwest::ClientBuilder;

use crate::error::{Result, RquestsError};
use crate::http::request::OutgoingRequest;
use crate::http::response::TransportResponse;

/// Sends one fully built request
pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: OutgoingRequest,
    ) -> impl Future<Output = Result<TransportResponse>> + Send;
}

/// Default transport backed by reqwest
///
/// A client is built per request because proxy and timeout are per-call
/// settings.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    user_agent: Option<String>,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            user_agent: Some(format!("rquests/{}", crate::VERSION)),
        }
    }

    /// Override the default `User-Agent`; `None` sends reqwest's default.
    pub fn user_agent(mut self, user_agent: Option<String>) -> Self {
        self.user_agent = user_agent;
        self
    }

    fn client_for(&self, request: &OutgoingRequest) -> Result<reqwest::Client> {
        let mut builder = ClientBuilder::new();

        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(proxy_url) = &request.proxy {
            let proxy = reqwest::Proxy::all(proxy_url.as_str())
                .map_err(|e| RquestsError::Proxy(format!("Invalid proxy: {}", e)))?;
            builder = builder.proxy(proxy);
        }

        if let Some(user_agent) = &self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        builder.build().map_err(RquestsError::Http)
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: OutgoingRequest) -> Result<TransportResponse> {
        let client = self.client_for(&request)?;
        let headers = request.wire_headers()?;

        let mut builder = client
            .request(request.method, request.url)
            .headers(headers);
        if !request.body.is_empty() {
            builder = builder.body(request.body);
        }

        let response = builder.send().await.map_err(RquestsError::from_send)?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(RquestsError::from_send)?
            .to_vec();

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}
