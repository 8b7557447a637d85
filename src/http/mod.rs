//! HTTP request module
//!
//! [`Requests`] is the request context: it folds configurators over its
//! initial options, resolves the outgoing request and dispatches it through
//! a [`Transport`].

use crate::config::RequestOptions;
use crate::error::Result;
use crate::options::{self, Configurator};

pub mod request;
pub mod response;
pub mod transport;

pub use request::OutgoingRequest;
pub use response::{Response, TransportResponse};
pub use transport::{ReqwestTransport, Transport};

/// Request context
///
/// Holds only the initial options and the transport. Every call works on
/// its own copy of the options, so the initial options never change.
#[derive(Debug, Clone)]
pub struct Requests<T = ReqwestTransport> {
    options: RequestOptions,
    transport: T,
}

impl Requests<ReqwestTransport> {
    pub fn new() -> Self {
        Self::with_transport(ReqwestTransport::new())
    }

    /// Start every call from `options` instead of an empty set.
    pub fn with_options(options: RequestOptions) -> Self {
        Self::new().initial_options(options)
    }
}

impl Default for Requests<ReqwestTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> Requests<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            options: RequestOptions::default(),
            transport,
        }
    }

    pub fn initial_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options_ref(&self) -> &RequestOptions {
        &self.options
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fold the configurators and resolve the request without sending it.
    pub fn build_request(
        &self,
        method: &str,
        uri: &str,
        configurators: &[Configurator],
    ) -> Result<OutgoingRequest> {
        let options = options::fold(&self.options, configurators)?;
        OutgoingRequest::build(method, uri, &options)
    }

    /// Build and send one request, returning the decoded body.
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        configurators: &[Configurator],
    ) -> Result<Response> {
        let request = self.build_request(method, uri, configurators)?;
        log::debug!(
            "{} {} (body {} bytes, proxy {}, timeout {:?})",
            request.method,
            request.url,
            request.body.len(),
            request.proxy.as_ref().map(|p| p.as_str()).unwrap_or("none"),
            request.timeout
        );

        let response = self.transport.send(request).await?;
        log::debug!(
            "received status {} with {} body bytes",
            response.status,
            response.body.len()
        );
        Ok(response.into_response())
    }

    pub async fn get(&self, uri: &str, configurators: &[Configurator]) -> Result<Response> {
        self.request("GET", uri, configurators).await
    }

    pub async fn post(&self, uri: &str, configurators: &[Configurator]) -> Result<Response> {
        self.request("POST", uri, configurators).await
    }

    pub async fn put(&self, uri: &str, configurators: &[Configurator]) -> Result<Response> {
        self.request("PUT", uri, configurators).await
    }

    pub async fn delete(&self, uri: &str, configurators: &[Configurator]) -> Result<Response> {
        self.request("DELETE", uri, configurators).await
    }

    pub async fn head(&self, uri: &str, configurators: &[Configurator]) -> Result<Response> {
        self.request("HEAD", uri, configurators).await
    }

    pub async fn patch(&self, uri: &str, configurators: &[Configurator]) -> Result<Response> {
        self.request("PATCH", uri, configurators).await
    }

    pub async fn options(&self, uri: &str, configurators: &[Configurator]) -> Result<Response> {
        self.request("OPTIONS", uri, configurators).await
    }
}
