//! HTTP API: server, routing, and request/response mapping for the
//! read-only product catalog.

pub mod app;
pub mod config;
pub mod middleware;
pub mod server;
