use std::fmt;

use serde::{Deserialize, Serialize};

/// A token value: a numeric scalar (pixels or weight units) or a string literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Number(i64),
    Text(String),
}

impl TokenValue {
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(value) => Some(value),
        }
    }

    /// Colors are strings starting with `#`.
    pub fn is_color(&self) -> bool {
        self.as_text().is_some_and(|text| text.starts_with('#'))
    }

    /// Formats the value the way it appears in `tokens.json`: strings quoted, numbers bare.
    pub fn to_json_literal(&self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Text(value) => format!("\"{value}\""),
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for TokenValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
