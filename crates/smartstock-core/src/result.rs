//! Convenience result type alias for SmartStock.

use crate::error::AppError;

/// A specialized `Result` type for infrastructure operations
/// (configuration, connections, migrations, file I/O).
pub type AppResult<T> = Result<T, AppError>;
