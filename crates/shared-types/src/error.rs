use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    NotFound,
    BadRequest,
    ValidationError,
    Unauthorized,
    Forbidden,
    /// The request never produced an HTTP response (DNS, refused, timeout).
    Network,
    /// A response arrived but its body did not match the expected shape.
    Decode,
    /// The credential store could not be read or written.
    Storage,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::Forbidden => write!(f, "Forbidden"),
            AppErrorKind::Network => write!(f, "Network"),
            AppErrorKind::Decode => write!(f, "Decode"),
            AppErrorKind::Storage => write!(f, "Storage"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

/// Structured application error used across the client crates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    fn with_kind(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::NotFound, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::BadRequest, message)
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Forbidden, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Network, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Decode, message)
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Storage, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::InternalError, message)
    }

    /// Build an error from a non-success HTTP response.
    ///
    /// The kind follows the status code. The message is taken from the
    /// body when the API returned a structured error (`error`, `detail`,
    /// `non_field_errors` or `message`), otherwise `fallback` is used.
    /// Per-field messages (`{"username": ["already taken"]}`) are
    /// collected into `field_errors`.
    pub fn from_response(status: u16, body: &str, fallback: &str) -> Self {
        let kind = kind_for_status(status);
        let parsed: Option<Value> = serde_json::from_str(body).ok();

        let Some(Value::Object(map)) = parsed else {
            return Self::with_kind(kind, fallback);
        };

        let message = ["error", "detail", "message"]
            .iter()
            .find_map(|key| map.get(*key).and_then(first_text))
            .or_else(|| map.get("non_field_errors").and_then(first_text))
            .unwrap_or_else(|| fallback.to_string());

        let field_errors: HashMap<String, String> = map
            .iter()
            .filter(|(key, _)| {
                !matches!(
                    key.as_str(),
                    "error" | "detail" | "message" | "non_field_errors" | "kind"
                )
            })
            .filter_map(|(key, value)| first_text(value).map(|text| (key.clone(), text)))
            .collect();

        Self {
            kind,
            message,
            field_errors,
        }
    }

    /// Message safe to show in a form banner. Transport and decode failures
    /// carry technical detail, so those fall back to `default`.
    pub fn friendly_message_or(&self, default: &str) -> String {
        match self.kind {
            AppErrorKind::Network | AppErrorKind::Decode | AppErrorKind::Storage => {
                default.to_string()
            }
            _ if self.message.is_empty() => default.to_string(),
            _ => self.message.clone(),
        }
    }

    /// True for errors that mean the credential itself is no longer valid.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self.kind,
            AppErrorKind::Unauthorized | AppErrorKind::Forbidden
        )
    }

    fn status_code_u16(&self) -> Option<u16> {
        match self.kind {
            AppErrorKind::NotFound => Some(404),
            AppErrorKind::BadRequest => Some(400),
            AppErrorKind::ValidationError => Some(422),
            AppErrorKind::Unauthorized => Some(401),
            AppErrorKind::Forbidden => Some(403),
            AppErrorKind::InternalError => Some(500),
            AppErrorKind::Network | AppErrorKind::Decode | AppErrorKind::Storage => None,
        }
    }
}

fn kind_for_status(status: u16) -> AppErrorKind {
    match status {
        400 => AppErrorKind::BadRequest,
        401 => AppErrorKind::Unauthorized,
        403 => AppErrorKind::Forbidden,
        404 => AppErrorKind::NotFound,
        422 => AppErrorKind::ValidationError,
        _ => AppErrorKind::InternalError,
    }
}

/// First human-readable string in a JSON value: the string itself, or the
/// first string of an array (Django REST framework wraps messages in lists).
fn first_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) => items.iter().find_map(first_text),
        _ => None,
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status_code_u16() {
            Some(code) => write!(f, "{} ({}): {}", self.kind, code, self.message),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(feature = "validation")]
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        AppError::validation("Please correct the highlighted fields", field_errors)
    }
}
