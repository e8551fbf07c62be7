//! Minimal static-file HTTP/1.1 server: one request in, one response out,
//! then the connection is closed.

pub mod concurrency;
pub mod config;
pub mod http;
