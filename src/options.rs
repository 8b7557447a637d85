//! Request configurators
//!
//! A [`Configurator`] records one preference on a [`RequestOptions`]. A call
//! folds its configurators left to right over a fresh copy of the context's
//! options, so the last writer of a key wins.

use std::fmt;

use crate::config::{OptionBag, RequestOptions, StringMap};
use crate::error::Result;

type ApplyFn = dyn Fn(&mut RequestOptions) -> Result<()> + Send + Sync;

/// One step of request configuration
pub struct Configurator {
    name: &'static str,
    apply: Box<ApplyFn>,
}

impl Configurator {
    /// Wrap a custom configuration step.
    pub fn new<F>(name: &'static str, apply: F) -> Self
    where
        F: Fn(&mut RequestOptions) -> Result<()> + Send + Sync + 'static,
    {
        Self {
            name,
            apply: Box::new(apply),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn apply(&self, options: &mut RequestOptions) -> Result<()> {
        (self.apply)(options)
    }
}

impl fmt::Debug for Configurator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configurator")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Apply `configurators` in order on top of `base`.
///
/// `base` is left untouched; the first failing configurator aborts the fold.
pub fn fold(base: &RequestOptions, configurators: &[Configurator]) -> Result<RequestOptions> {
    let mut options = base.clone();
    for configurator in configurators {
        configurator.apply(&mut options).map_err(|err| {
            log::debug!("configurator '{}' failed: {}", configurator.name(), err);
            err
        })?;
    }
    Ok(options)
}

fn string_map<I, K, V>(pairs: I) -> StringMap
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect()
}

/// Round-trip deadline in seconds; `0` means no deadline.
pub fn timeout(seconds: u64) -> Configurator {
    Configurator::new("timeout", move |options| {
        options.timeout = Some(seconds);
        Ok(())
    })
}

/// Route the request through `url`. An empty string disables the proxy.
pub fn proxy(url: impl Into<String>) -> Configurator {
    let url = url.into();
    Configurator::new("proxy", move |options| {
        options.proxy = Some(url.clone());
        Ok(())
    })
}

pub fn cookies<I, K, V>(pairs: I) -> Configurator
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let map = string_map(pairs);
    Configurator::new("cookies", move |options| {
        options.cookies = Some(map.clone());
        Ok(())
    })
}

pub fn headers<I, K, V>(pairs: I) -> Configurator
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let map = string_map(pairs);
    Configurator::new("headers", move |options| {
        options.headers = Some(map.clone());
        Ok(())
    })
}

/// Query parameters added to the request URL.
pub fn params<I, K, V>(pairs: I) -> Configurator
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let map = string_map(pairs);
    Configurator::new("params", move |options| {
        options.params = Some(map.clone());
        Ok(())
    })
}

/// URL-encoded form body.
pub fn form<I, K, V>(pairs: I) -> Configurator
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let map = string_map(pairs);
    Configurator::new("form", move |options| {
        options.form = Some(map.clone());
        Ok(())
    })
}

/// JSON body. Replaces a `form` body when both are configured.
pub fn data<I, K, V>(pairs: I) -> Configurator
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let map = string_map(pairs);
    Configurator::new("data", move |options| {
        options.data = Some(map.clone());
        Ok(())
    })
}

/// Recorded on the options only; not used to build the body.
pub fn bin<I, K, V>(pairs: I) -> Configurator
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let map = string_map(pairs);
    Configurator::new("bin", move |options| {
        options.bin = Some(map.clone());
        Ok(())
    })
}

/// Recorded on the options only; use [`data`] for a JSON body.
pub fn json<I, K, V>(pairs: I) -> Configurator
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let map = string_map(pairs);
    Configurator::new("json", move |options| {
        options.json = Some(map.clone());
        Ok(())
    })
}

/// Overlay an untyped bag directly onto the options.
pub fn options(bag: OptionBag) -> Configurator {
    Configurator::new("options", move |options| options.merge_bag(&bag))
}
