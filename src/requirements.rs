//! Composition requirements and their configuration sources.
//!
//! Requirements come from [`Requirements::default`], optionally overridden
//! by a partial [`RequirementOptions`] read from code, JSON or a file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

pub const REQUIREMENTS_PATH_ENV: &str = "PWD_REQUIREMENTS_PATH";
pub const DEFAULT_REQUIREMENTS_PATH: &str = "./assets/requirements.json";

#[derive(Error, Debug)]
pub enum RequirementsError {
    #[error("Requirements file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read requirements file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Invalid requirements: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Composition rules a password is validated against.
///
/// `None` or `Some(0)` for a length bound disables that bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirements {
    pub upper_case: bool,
    pub lower_case: bool,
    pub number: bool,
    pub special_symbol: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl Default for Requirements {
    fn default() -> Self {
        Self {
            upper_case: true,
            lower_case: true,
            number: true,
            special_symbol: true,
            min_length: Some(6),
            max_length: None,
        }
    }
}

impl Requirements {
    /// Every rule switched off.
    pub fn none() -> Self {
        Self {
            upper_case: false,
            lower_case: false,
            number: false,
            special_symbol: false,
            min_length: None,
            max_length: None,
        }
    }

    /// Returns a copy with every field set in `options` replaced.
    pub fn merged(&self, options: &RequirementOptions) -> Self {
        Self {
            upper_case: options.upper_case.unwrap_or(self.upper_case),
            lower_case: options.lower_case.unwrap_or(self.lower_case),
            number: options.number.unwrap_or(self.number),
            special_symbol: options.special_symbol.unwrap_or(self.special_symbol),
            min_length: options.min_length.unwrap_or(self.min_length),
            max_length: options.max_length.unwrap_or(self.max_length),
        }
    }

    /// Minimum length if it is actually enforced.
    pub fn enforced_min_length(&self) -> Option<usize> {
        self.min_length.filter(|&n| n > 0)
    }

    /// Maximum length if it is actually enforced.
    pub fn enforced_max_length(&self) -> Option<usize> {
        self.max_length.filter(|&n| n > 0)
    }
}

/// Partial requirements, merged field by field over the current ones.
///
/// For the length bounds the outer `Option` tells whether the key was given
/// at all and the inner one carries the value, so `{"minLength": null}`
/// clears the minimum while a missing `minLength` keeps it.
/// Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementOptions {
    #[serde(default)]
    pub upper_case: Option<bool>,
    #[serde(default)]
    pub lower_case: Option<bool>,
    #[serde(default)]
    pub number: Option<bool>,
    #[serde(default)]
    pub special_symbol: Option<bool>,
    #[serde(default, deserialize_with = "present")]
    pub min_length: Option<Option<usize>>,
    #[serde(default, deserialize_with = "present")]
    pub max_length: Option<Option<usize>>,
}

/// Negative bounds are accepted and kept as 0, which enforces nothing.
fn present<'de, D>(deserializer: D) -> Result<Option<Option<usize>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<i64>::deserialize(deserializer)?;
    Ok(Some(value.map(|n| usize::try_from(n).unwrap_or(0))))
}

impl RequirementOptions {
    /// Options that switch every rule off, including both length bounds.
    pub fn no_rules() -> Self {
        Self {
            upper_case: Some(false),
            lower_case: Some(false),
            number: Some(false),
            special_symbol: Some(false),
            min_length: Some(None),
            max_length: Some(None),
        }
    }

    pub fn upper_case(mut self, required: bool) -> Self {
        self.upper_case = Some(required);
        self
    }

    pub fn lower_case(mut self, required: bool) -> Self {
        self.lower_case = Some(required);
        self
    }

    pub fn number(mut self, required: bool) -> Self {
        self.number = Some(required);
        self
    }

    pub fn special_symbol(mut self, required: bool) -> Self {
        self.special_symbol = Some(required);
        self
    }

    pub fn min_length(mut self, min_length: Option<usize>) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn max_length(mut self, max_length: Option<usize>) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, RequirementsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, RequirementsError> {
        Ok(serde_json::from_value(value)?)
    }
}

/// Returns the requirements file path.
///
/// Priority:
/// 1. Environment variable `PWD_REQUIREMENTS_PATH`
/// 2. Default path `./assets/requirements.json`
pub fn requirements_path() -> PathBuf {
    std::env::var(REQUIREMENTS_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_REQUIREMENTS_PATH))
}

/// Loads requirement options from the file named by [`requirements_path`].
///
/// # Errors
///
/// Returns error if the file does not exist, cannot be read or is not a
/// valid JSON object of requirement options.
pub fn load_requirements() -> Result<RequirementOptions, RequirementsError> {
    load_requirements_from_path(requirements_path())
}

/// Loads requirement options from a specific JSON file.
pub fn load_requirements_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<RequirementOptions, RequirementsError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Requirements loading FAILED: FileNotFound {:?}", path);
        return Err(RequirementsError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let options = RequirementOptions::from_json_str(&content).inspect_err(|_e| {
        #[cfg(feature = "tracing")]
        tracing::error!("Requirements loading FAILED: {} in {:?}", _e, path);
    })?;

    #[cfg(feature = "tracing")]
    tracing::info!("Requirements loaded from {:?}", path);

    Ok(options)
}
