//! Response models for the HTTP boundary.

pub mod api;
pub mod user;

pub use api::*;
pub use user::*;
