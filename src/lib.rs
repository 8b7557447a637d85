//! rquests - options-based HTTP requests
//!
//! A request is described by a method, a URL and an ordered list of
//! [`Configurator`]s (timeout, proxy, cookies, headers, params, form, data).
//! The configurators are folded into a [`RequestOptions`], resolved into one
//! outgoing request and sent through a [`Transport`]. The reply is reduced to
//! its decoded body text.
//!
//! ```no_run
//! use rquests::options::{cookies, data, headers, timeout};
//!
//! # async fn demo() -> rquests::Result<()> {
//! let requests = rquests::Requests::new();
//! let response = requests
//!     .post(
//!         "http://www.example.com",
//!         &[
//!             timeout(10),
//!             headers([("Content-Type", "application/json")]),
//!             cookies([("user", "solos")]),
//!             data([("hello", "world")]),
//!         ],
//!     )
//!     .await?;
//! println!("{}", response.content);
//! # Ok(())
//! # }
//! ```

pub mod blocking;
pub mod cli;
pub mod config;
pub mod error;
pub mod exit_code;
pub mod http;
pub mod logging;
pub mod options;
pub mod output;
pub mod utils;

pub use config::{OptionBag, RequestOptions};
pub use error::{ErrorKind, Result, RquestsError};
pub use http::{OutgoingRequest, ReqwestTransport, Requests, Response, Transport};
pub use options::Configurator;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
