pub use masterror::{AppError, AppResult};

/// Create file read error
pub fn file_read_error(path: &str, source: std::io::Error) -> AppError {
    AppError::internal(format!("Failed to read file '{}': {}", path, source))
}

/// Create file write error
pub fn file_write_error(path: &str, source: std::io::Error) -> AppError {
    AppError::internal(format!("Failed to write file '{}': {}", path, source))
}

/// Create directory listing error
pub fn dir_read_error(path: &str, source: std::io::Error) -> AppError {
    AppError::internal(format!("Failed to list directory '{}': {}", path, source))
}

/// Create config error
pub fn config_error(message: impl Into<String>) -> AppError {
    AppError::bad_request(message.into())
}

/// Create summary serialization error
pub fn serialize_error(message: impl Into<String>) -> AppError {
    AppError::internal(format!("Failed to serialize summary: {}", message.into()))
}
