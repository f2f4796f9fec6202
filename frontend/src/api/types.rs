use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Login payload. Lives only as long as a submission.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub remember: bool,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("remember", &self.remember)
            .finish()
    }
}

/// Field name to the first message reported for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, ErrorMessages>")]
pub struct FieldErrors(BTreeMap<String, String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorMessages {
    One(String),
    Many(Vec<String>),
}

impl From<BTreeMap<String, ErrorMessages>> for FieldErrors {
    fn from(raw: BTreeMap<String, ErrorMessages>) -> Self {
        raw.into_iter()
            .filter_map(|(field, messages)| {
                let first = match messages {
                    ErrorMessages::One(message) => Some(message),
                    ErrorMessages::Many(list) => list.into_iter().next(),
                };
                first
                    .filter(|m| !m.trim().is_empty())
                    .map(|message| (field, message))
            })
            .collect()
    }
}

impl FromIterator<(String, String)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FieldErrors {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Body of a `422 Unprocessable Entity` from the auth endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidationErrorBody {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub errors: FieldErrors,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub redirect: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSuccess {
    pub redirect: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedUser {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(alias = "message")]
    pub error: String,
    #[serde(default)]
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub details: Option<Value>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl ApiError {
    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn with_status(status: u16, msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: format!("HTTP_{}", status),
            details: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoginError {
    /// Field-level rejection the form renders inline.
    #[error("{message}")]
    Validation { message: String, errors: FieldErrors },
    #[error("{0}")]
    Rejected(ApiError),
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
}
