//! The envelope every store operation answers with.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Failure taxonomy for store operations.
///
/// Apart from [`ActionCode::Unexpected`], each code travels to the client as
/// a short message key (`ERR001`..`ERR005`) that the frontend localizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionCode {
    /// No row with the requested id.
    NotFound,
    /// The row exists but could not be removed (usually a restricting FK).
    DeleteFailed,
    /// A unique, foreign-key or check constraint rejected the write.
    ConstraintViolation,
    /// The referenced category does not exist.
    CategoryNotFound,
    /// The referenced product does not exist.
    ProductNotFound,
    /// Any other storage failure; the message is the engine's own text.
    Unexpected,
}

impl ActionCode {
    /// The message key sent to clients, `None` for [`ActionCode::Unexpected`].
    pub fn message_key(self) -> Option<&'static str> {
        match self {
            Self::NotFound => Some("ERR001"),
            Self::DeleteFailed => Some("ERR002"),
            Self::ConstraintViolation => Some("ERR003"),
            Self::CategoryNotFound => Some("ERR004"),
            Self::ProductNotFound => Some("ERR005"),
            Self::Unexpected => None,
        }
    }

    /// Symbolic name, as used in error bodies.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::DeleteFailed => "DELETE_FAILED",
            Self::ConstraintViolation => "CONSTRAINT_VIOLATION",
            Self::CategoryNotFound => "CATEGORY_NOT_FOUND",
            Self::ProductNotFound => "PRODUCT_NOT_FOUND",
            Self::Unexpected => "UNEXPECTED",
        }
    }
}

impl fmt::Display for ActionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a store operation: success with an optional value, or failure
/// with a message from the [`ActionCode`] taxonomy.
///
/// Serialized as `{ "wasSuccess", "result", "message" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResult<T> {
    /// Whether the operation succeeded.
    pub was_success: bool,
    /// The value produced on success.
    pub result: Option<T>,
    /// Failure message: a message key, or the raw text for unexpected errors.
    pub message: Option<String>,
    #[serde(skip)]
    code: Option<ActionCode>,
}

impl<T> ActionResult<T> {
    /// A successful result carrying `value`.
    pub fn ok(value: T) -> Self {
        Self {
            was_success: true,
            result: Some(value),
            message: None,
            code: None,
        }
    }

    /// A successful result with no payload.
    pub fn done() -> Self {
        Self {
            was_success: true,
            result: None,
            message: None,
            code: None,
        }
    }

    /// A failure with one of the keyed codes.
    pub fn failure(code: ActionCode) -> Self {
        Self {
            was_success: false,
            result: None,
            message: Some(code.message_key().unwrap_or(code.as_str()).to_string()),
            code: Some(code),
        }
    }

    /// An unexpected failure carrying the underlying message verbatim.
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self {
            was_success: false,
            result: None,
            message: Some(message.into()),
            code: Some(ActionCode::Unexpected),
        }
    }

    /// The failure code, `None` on success.
    pub fn code(&self) -> Option<ActionCode> {
        self.code
    }

    /// Transform the success value, keeping a failure as is.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ActionResult<U> {
        ActionResult {
            was_success: self.was_success,
            result: self.result.map(f),
            message: self.message,
            code: self.code,
        }
    }

    /// Re-type a failure. Any success value is dropped.
    pub fn cast<U>(self) -> ActionResult<U> {
        ActionResult {
            was_success: self.was_success,
            result: None,
            message: self.message,
            code: self.code,
        }
    }

    /// Split into the success value or `(code, message)`.
    pub fn into_result(self) -> Result<Option<T>, (ActionCode, String)> {
        if self.was_success {
            Ok(self.result)
        } else {
            let code = self.code.unwrap_or(ActionCode::Unexpected);
            Err((code, self.message.unwrap_or_default()))
        }
    }
}
