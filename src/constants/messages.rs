//! Success message constants used throughout the application.

// User management messages
pub const MSG_USER_DELETED: &str = "User deleted successfully";

// Health check messages
pub const MSG_SERVER_RUNNING: &str = "Server is running";
