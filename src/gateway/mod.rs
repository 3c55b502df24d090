//! Gateway Module
//!
//! Request/response types and the dispatcher sitting behind the HTTP
//! front door.
//!
//! ## Core Concepts
//! - **Protocol**: `GatewayRequest`/`GatewayResponse` carry the method, path,
//!   path parameters, raw body, and status the way a proxy-integration event
//!   does, keeping the dispatcher independent of the HTTP server.
//! - **Dispatch**: stateless per request, exactly one downstream service call
//!   per request, no retries. Failures map to a short machine-readable error
//!   code; internal detail never reaches a response body.

pub mod dispatch;
pub mod protocol;

pub use dispatch::dispatch;
pub use protocol::{GatewayRequest, GatewayResponse};
