//! Per-request option set
//!
//! [`RequestOptions`] is the typed form of the option bag that configurators
//! write into. The untyped bag ([`OptionBag`]) only survives as input to
//! [`RequestOptions::merge_bag`], which converts each known key into its
//! typed field.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;

use crate::error::{Result, RquestsError};

/// Untyped option bag: option name to arbitrary JSON value
pub type OptionBag = serde_json::Map<String, Value>;

/// String-to-string option value (headers, cookies, params, form bodies)
pub type StringMap = BTreeMap<String, String>;

/// Every option a request can be configured with.
///
/// Each field is `None` until some configurator writes it. Writes replace the
/// previous value wholesale, so the last configurator touching a key wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Round-trip deadline in seconds; `0` disables it.
    pub timeout: Option<u64>,
    pub proxy: Option<String>,
    pub cookies: Option<StringMap>,
    pub headers: Option<StringMap>,
    pub params: Option<StringMap>,
    pub form: Option<StringMap>,
    pub data: Option<StringMap>,
    pub bin: Option<StringMap>,
    pub json: Option<StringMap>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlay every entry of `bag` onto these options.
    ///
    /// `null` clears an option. Unknown keys are ignored with a warning.
    pub fn merge_bag(&mut self, bag: &OptionBag) -> Result<()> {
        for (key, value) in bag {
            match key.as_str() {
                "timeout" => self.timeout = timeout_value(value)?,
                "proxy" => self.proxy = string_value(key, value)?,
                "cookies" => self.cookies = map_value(key, value)?,
                "headers" => self.headers = map_value(key, value)?,
                "params" => self.params = map_value(key, value)?,
                "form" => self.form = map_value(key, value)?,
                "data" => self.data = map_value(key, value)?,
                "bin" => self.bin = map_value(key, value)?,
                "json" => self.json = map_value(key, value)?,
                other => log::warn!("Ignoring unknown request option '{}'", other),
            }
        }
        Ok(())
    }

    /// Load options from a JSON object file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&raw)?;
        let bag = match value {
            Value::Object(bag) => bag,
            other => {
                return Err(RquestsError::Config(format!(
                    "Options file {:?} must hold a JSON object, found {}",
                    path,
                    json_type(&other)
                )))
            }
        };

        let mut options = Self::default();
        options.merge_bag(&bag)?;
        Ok(options)
    }

    /// Effective deadline, `None` when unbounded.
    pub fn timeout_duration(&self) -> Option<std::time::Duration> {
        self.timeout
            .filter(|seconds| *seconds > 0)
            .map(std::time::Duration::from_secs)
    }
}

fn timeout_value(value: &Value) -> Result<Option<u64>> {
    match value {
        Value::Null => Ok(None),
        Value::Number(number) => {
            if let Some(seconds) = number.as_u64() {
                Ok(Some(seconds))
            } else if number.as_i64().is_some() {
                // negative counts disable the deadline
                Ok(Some(0))
            } else {
                Err(RquestsError::Configurator(format!(
                    "option 'timeout' must be an integer number of seconds, found {}",
                    number
                )))
            }
        }
        other => Err(RquestsError::Configurator(format!(
            "option 'timeout' must be an integer number of seconds, found {}",
            json_type(other)
        ))),
    }
}

fn string_value(key: &str, value: &Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        other => Err(RquestsError::Configurator(format!(
            "option '{}' must be a string, found {}",
            key,
            json_type(other)
        ))),
    }
}

fn map_value(key: &str, value: &Value) -> Result<Option<StringMap>> {
    let object = match value {
        Value::Null => return Ok(None),
        Value::Object(object) => object,
        other => {
            return Err(RquestsError::Configurator(format!(
                "option '{}' must be an object of strings, found {}",
                key,
                json_type(other)
            )))
        }
    };

    let mut map = StringMap::new();
    for (name, entry) in object {
        match entry {
            Value::String(s) => {
                map.insert(name.clone(), s.clone());
            }
            other => {
                return Err(RquestsError::Configurator(format!(
                    "option '{}' entry '{}' must be a string, found {}",
                    key,
                    name,
                    json_type(other)
                )))
            }
        }
    }
    Ok(Some(map))
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
