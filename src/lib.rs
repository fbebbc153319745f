//! hello-service - greeting and liveness endpoints over HTTP.
//!
//! Library crate exposing the configuration, routing, and server modules so
//! integration tests can build the application router without binding a socket.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;
