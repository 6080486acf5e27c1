use http::{header, HeaderMap, Method};

use super::headers::HeaderMapExt;

/// A request as seen by the dispatch core: method, path and headers.
/// Reading the request off the wire is the hosting server's job.
#[derive(Debug)]
pub struct Request {
    pub method: Method,
    pub path: String,
    headers: HeaderMap,
}

impl Request {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
        }
    }

    /// The Host header, if the request carries one.
    pub fn host(&self) -> Option<&str> {
        self.get_header(header::HOST)
    }
}

impl HeaderMapExt for Request {
    fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }
}
