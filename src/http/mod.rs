//! HTTP server module.
//!
//! Plain-HTTP server with graceful shutdown on SIGTERM/SIGINT. TLS termination
//! is left to the ingress or reverse proxy in front of the service.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
