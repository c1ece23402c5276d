//! Backend forwarding subsystem.
//!
//! # Data Flow
//! ```text
//! authenticated request body
//!     → forwarder.rs (parse check, POST to backend with propagated auth)
//!     → BackendResponse (status + raw body)
//!     → translator.rs (2xx pass-through / error envelope extraction)
//!     → handler replies 200 or 500
//! ```
//!
//! # Design Decisions
//! - Forwarder and translator return explicit Results; the handler
//!   pattern-matches instead of relying on unwinding
//! - The backend's 2xx judgement is authoritative, not re-validated
//! - Every failure kind collapses to the same 500 envelope at the boundary
//!   (client-contract compatibility requirement)

pub mod error;
pub mod forwarder;
pub mod translator;

pub use error::ForwardError;
pub use forwarder::{BackendResponse, ProxyForwarder, CONNECT_OAUTH_PATH};
pub use translator::{translate, FALLBACK_ERROR};
