//! Blocking request context
//!
//! Wraps [`crate::http::Requests`] with a private current-thread runtime so
//! each call blocks until the response body is read or the call fails.
//!
//! Calling these methods from inside an async runtime panics in tokio's
//! `block_on`; use the async context there instead.

use tokio::runtime::{Builder, Runtime};

use crate::config::RequestOptions;
use crate::error::Result;
use crate::http::{OutgoingRequest, ReqwestTransport, Response, Transport};
use crate::options::Configurator;

/// Blocking request context
#[derive(Debug)]
pub struct Requests<T = ReqwestTransport> {
    inner: crate::http::Requests<T>,
    runtime: Runtime,
}

impl Requests<ReqwestTransport> {
    pub fn new() -> Result<Self> {
        Self::from_async(crate::http::Requests::new())
    }

    pub fn with_options(options: RequestOptions) -> Result<Self> {
        Self::from_async(crate::http::Requests::with_options(options))
    }
}

impl<T: Transport> Requests<T> {
    pub fn with_transport(transport: T) -> Result<Self> {
        Self::from_async(crate::http::Requests::with_transport(transport))
    }

    pub fn from_async(inner: crate::http::Requests<T>) -> Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self { inner, runtime })
    }

    pub fn options_ref(&self) -> &RequestOptions {
        self.inner.options_ref()
    }

    pub fn build_request(
        &self,
        method: &str,
        uri: &str,
        configurators: &[Configurator],
    ) -> Result<OutgoingRequest> {
        self.inner.build_request(method, uri, configurators)
    }

    pub fn request(
        &self,
        method: &str,
        uri: &str,
        configurators: &[Configurator],
    ) -> Result<Response> {
        self.runtime
            .block_on(self.inner.request(method, uri, configurators))
    }

    pub fn get(&self, uri: &str, configurators: &[Configurator]) -> Result<Response> {
        self.request("GET", uri, configurators)
    }

    pub fn post(&self, uri: &str, configurators: &[Configurator]) -> Result<Response> {
        self.request("POST", uri, configurators)
    }

    pub fn put(&self, uri: &str, configurators: &[Configurator]) -> Result<Response> {
        self.request("PUT", uri, configurators)
    }

    pub fn delete(&self, uri: &str, configurators: &[Configurator]) -> Result<Response> {
        self.request("DELETE", uri, configurators)
    }

    pub fn head(&self, uri: &str, configurators: &[Configurator]) -> Result<Response> {
        self.request("HEAD", uri, configurators)
    }

    pub fn patch(&self, uri: &str, configurators: &[Configurator]) -> Result<Response> {
        self.request("PATCH", uri, configurators)
    }

    pub fn options(&self, uri: &str, configurators: &[Configurator]) -> Result<Response> {
        self.request("OPTIONS", uri, configurators)
    }
}
