//! HTTP server module.
//!
//! Serves the router over plain HTTP and drains connections gracefully on
//! SIGTERM/SIGINT, which is how the pod is stopped during a rollout.

mod server;
mod shutdown;

pub use server::{listen_addr, start_server, ServerError};
