//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, timeout / request-id / trace layers)
//!     → middleware/auth.rs (credential check, AuthContext attached)
//!     → proxy layer forwards to backend
//!     → server.rs handler translates result into the client response
//! ```

pub mod middleware;
pub mod request;
pub mod server;

pub use request::{UuidRequestId, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
