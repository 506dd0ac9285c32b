//! Conversion of engine errors into failed action results.

use tracing::{error, warn};

use smartstock_core::types::{ActionCode, ActionResult};

/// Classify a sqlx error raised by a write or read.
///
/// Unique, foreign-key and check violations become `CONSTRAINT_VIOLATION`;
/// everything else is passed through as an unexpected failure.
pub(crate) fn from_sqlx<T>(err: sqlx::Error, kind: &'static str, operation: &'static str) -> ActionResult<T> {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation()
            || db_err.is_foreign_key_violation()
            || db_err.is_check_violation()
        {
            warn!(
                kind,
                operation,
                constraint = db_err.constraint().unwrap_or_default(),
                "Write rejected by constraint"
            );
            return ActionResult::failure(ActionCode::ConstraintViolation);
        }
    }
    error!(kind, operation, error = %err, "Store operation failed");
    ActionResult::unexpected(err.to_string())
}

/// Classify a failed delete. Any engine error is reported as `DELETE_FAILED`.
pub(crate) fn delete_failed<T>(err: sqlx::Error, kind: &'static str, id: i32) -> ActionResult<T> {
    warn!(kind, id, error = %err, "Delete failed");
    ActionResult::failure(ActionCode::DeleteFailed)
}
