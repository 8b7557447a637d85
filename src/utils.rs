//! Utility functions and helpers

use crate::error::{Result, RquestsError};
use std::path::{Path, PathBuf};
use url::Url;

/// URL validation and parsing utilities
pub struct UrlUtils;

impl UrlUtils {
    /// Validate command-line URL input, adding `http://` when no scheme is given
    pub fn validate_url(input: &str) -> Result<Url> {
        let url_str = if input.contains("://") {
            input.to_string()
        } else {
            format!("http://{}", input)
        };

        Url::parse(&url_str)
            .map_err(|e| RquestsError::InvalidUrl(format!("Invalid URL '{}': {}", input, e)))
    }
}

/// File system utilities
pub struct FileUtils;

impl FileUtils {
    /// Expand tilde (~) in file paths
    pub fn expand_path(path: &str) -> Result<PathBuf> {
        Self::expand_path_with_home(path, dirs::home_dir())
    }

    fn expand_path_with_home(path: &str, home: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(rest) = path.strip_prefix("~/") {
            match home {
                Some(home_dir) => Ok(home_dir.join(rest)),
                None => Err(RquestsError::Config(
                    "Cannot determine home directory".to_string(),
                )),
            }
        } else {
            Ok(PathBuf::from(path))
        }
    }

    /// Check if file exists and is readable
    pub fn check_file_readable(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(RquestsError::Config(format!("File not found: {:?}", path)));
        }

        if !path.is_file() {
            return Err(RquestsError::Config(format!("Path is not a file: {:?}", path)));
        }

        std::fs::File::open(path)?;
        Ok(())
    }
}

/// String utilities
pub struct StringUtils;

impl StringUtils {
    /// Parse `key: value` header input
    pub fn parse_header(input: &str) -> Result<(String, String)> {
        match input.split_once(':') {
            Some((key, value)) if !key.trim().is_empty() => {
                Ok((key.trim().to_string(), value.trim().to_string()))
            }
            _ => Err(RquestsError::Config(format!(
                "Invalid header format: '{}'. Expected 'key: value'",
                input
            ))),
        }
    }

    /// Parse `key=value` input for cookies, params, form and data fields
    pub fn parse_pair(input: &str) -> Result<(String, String)> {
        match input.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
            _ => Err(RquestsError::Config(format!(
                "Invalid field format: '{}'. Expected 'key=value'",
                input
            ))),
        }
    }

    /// Parse timeout values (supports suffixes like 's', 'm', 'h')
    pub fn parse_timeout(input: &str) -> Result<std::time::Duration> {
        if let Ok(seconds) = input.parse::<u64>() {
            return Ok(std::time::Duration::from_secs(seconds));
        }

        let (number_part, suffix) = if let Some(stripped) = input.strip_suffix('s') {
            (stripped, 1)
        } else if let Some(stripped) = input.strip_suffix('m') {
            (stripped, 60)
        } else if let Some(stripped) = input.strip_suffix('h') {
            (stripped, 3600)
        } else {
            return Err(RquestsError::Config(format!(
                "Invalid timeout format: '{}'. Use number with optional suffix (s/m/h)",
                input
            )));
        };

        let number: u64 = number_part
            .parse()
            .map_err(|_| RquestsError::Config(format!("Invalid timeout number: '{}'", number_part)))?;

        let seconds = number.checked_mul(suffix).ok_or_else(|| {
            RquestsError::Config(format!("Timeout out of range: '{}'", input))
        })?;

        Ok(std::time::Duration::from_secs(seconds))
    }
}
