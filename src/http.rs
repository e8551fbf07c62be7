//! HTTP/1.1 protocol engine and the socket shell that drives it.
//!
//! A request buffer flows through [`request::Request::parse`], then
//! [`engine::Engine::dispatch`] picks a handler by method name, and the
//! handler's [`response::Response`] is serialized back to bytes. Nothing is
//! kept between requests.

pub mod engine;
pub mod error;
pub mod handler;
pub mod headers;
pub mod method;
pub mod mime;
pub mod pages;
pub mod request;
pub mod response;
pub mod server;
pub mod status;

pub use engine::Engine;
pub use request::Request;
pub use response::Response;
pub use status::Status;

pub const HTTP_VERSION: &str = "HTTP/1.1";
pub const LINE_TERMINATOR: &str = "\r\n";
pub const BUFFER_SIZE: usize = 2048;

/// Served for an empty target.
pub const DEFAULT_DOCUMENT: &str = "index.html";
/// Directory holding the error pages. Never served as content.
pub const ASSETS_PREFIX: &str = ".pages";
