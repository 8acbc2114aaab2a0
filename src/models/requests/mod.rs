//! Request models for the HTTP boundary.

pub mod user;

pub use user::*;
