//! Error message constants used throughout the application.

// User errors
pub const ERR_USER_EXISTS: &str = "User already exists";
pub const ERR_USER_NOT_FOUND: &str = "User not found";

// Validation errors
pub const ERR_VALIDATION_FAILED: &str = "Validation failed";
