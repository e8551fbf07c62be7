use crate::http::HTTP_VERSION;
use crate::http::error::{AssetError, ParseError};
use crate::http::handler::{self, HandlerFunc};
use crate::http::method::Method;
use crate::http::pages::ErrorPages;
use crate::http::request::Request;
use crate::http::response::Response;
use bytes::Bytes;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Turns one raw request buffer into one raw response buffer. Holds nothing
/// mutable, so a single instance can be shared by every worker.
#[derive(Debug, Clone)]
pub struct Engine {
    root: PathBuf,
    pages: ErrorPages,
}

impl Engine {
    /// Loads the error pages below `root`; fails if either is missing.
    pub fn new(root: impl Into<PathBuf>) -> Result<Engine, AssetError> {
        let root = root.into();
        let pages = ErrorPages::load(&root)?;
        Ok(Engine::with_pages(root, pages))
    }

    pub fn with_pages(root: impl Into<PathBuf>, pages: ErrorPages) -> Engine {
        Engine {
            root: root.into(),
            pages,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn pages(&self) -> &ErrorPages {
        &self.pages
    }

    pub fn handle(&self, buf: &[u8]) -> Result<Bytes, ParseError> {
        let request = Request::parse(buf)?;
        let response = self.dispatch(&request);

        tracing::debug!(
            method = %request.method,
            target = %request.target,
            status = response.status.code_num,
            "handled request"
        );

        Ok(response.serialize(HTTP_VERSION))
    }

    pub fn dispatch(&self, request: &Request) -> Response {
        let handler = Method::from_str(&request.method)
            .map(handler_for)
            .unwrap_or(handler::not_implemented);

        handler(self, &request.target)
    }
}

fn handler_for(method: Method) -> HandlerFunc {
    match method {
        Method::GET => handler::get,
        Method::OPTIONS => handler::options,
    }
}
