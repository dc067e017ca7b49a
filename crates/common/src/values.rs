use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueParseError {
    #[error("expected KEY=VALUE, got '{0}'")]
    MissingSeparator(String),
    #[error("empty key in '{0}'")]
    EmptyKey(String),
    #[error("sort order must be ASC or DESC, got '{0}'")]
    InvalidSortOrder(String),
}

fn split_pair(s: &str) -> Result<(&str, &str), ValueParseError> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| ValueParseError::MissingSeparator(s.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(ValueParseError::EmptyKey(s.to_string()));
    }
    Ok((key, value.trim()))
}

/// A key/value label attached to a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl FromStr for Tag {
    type Err = ValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = split_pair(s)?;
        Ok(Self {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Matches resources whose `key` equals any of `values`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Filter {
    pub key: String,
    pub values: Vec<String>,
}

impl FromStr for Filter {
    type Err = ValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, values) = split_pair(s)?;
        let values = values
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(String::from)
            .collect();
        Ok(Self {
            key: key.to_string(),
            values,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortValue {
    Asc,
    Desc,
}

impl FromStr for SortValue {
    type Err = ValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ASC" => Ok(SortValue::Asc),
            "DESC" => Ok(SortValue::Desc),
            _ => Err(ValueParseError::InvalidSortOrder(s.to_string())),
        }
    }
}

/// Orders search results by `key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SortCriterion {
    pub key: String,
    pub value: SortValue,
}

impl FromStr for SortCriterion {
    type Err = ValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = split_pair(s)?;
        Ok(Self {
            key: key.to_string(),
            value: value.parse()?,
        })
    }
}
