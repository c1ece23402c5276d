//! Request middleware.

pub mod auth;

pub use auth::{AuthContext, AuthError, AuthValidator, BearerKeyValidator};
