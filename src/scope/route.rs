use http::Method;

use super::{error::ConfigError, MiddlewareScope};
use crate::{
    chain::{AfterMiddlewareService, HandlerService, MiddlewareService},
    pattern::{path, PathPattern},
};

/// The method filter of a route: one verb, or any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodPattern {
    Any,
    Only(Method),
}

impl MethodPattern {
    pub fn matches(&self, method: &Method) -> bool {
        match self {
            Self::Any => true,
            Self::Only(expected) => expected == method,
        }
    }
}

impl From<Method> for MethodPattern {
    fn from(value: Method) -> Self {
        Self::Only(value)
    }
}

/// A sealed (method, path pattern, handler) registration with its own
/// middleware lists. The pattern carries every ancestor prefix, folded in
/// when the tree was sealed.
pub struct Route {
    method: MethodPattern,
    pattern: PathPattern,
    name: Option<Box<str>>,
    handler: HandlerService,
    before: Box<[MiddlewareService]>,
    after: Box<[AfterMiddlewareService]>,
}

impl Route {
    pub fn method(&self) -> &MethodPattern {
        &self.method
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub(crate) fn handler(&self) -> &HandlerService {
        &self.handler
    }
}

impl MiddlewareScope for Route {
    fn before(&self) -> &[MiddlewareService] {
        &self.before
    }

    fn after(&self) -> &[AfterMiddlewareService] {
        &self.after
    }
}

#[derive(Default)]
pub struct RouteBuilder {
    method: Option<Method>,
    pattern: String,
    name: Option<String>,
    handler: Option<HandlerService>,
    before: Vec<MiddlewareService>,
    after: Vec<AfterMiddlewareService>,
}

impl RouteBuilder {
    pub fn new(method: Method, pattern: impl Into<String>) -> Self {
        Self {
            method: Some(method),
            pattern: pattern.into(),
            ..Self::default()
        }
    }

    /// Registers for every method.
    pub fn any(pattern: impl Into<String>) -> Self {
        Self {
            method: None,
            pattern: pattern.into(),
            ..Self::default()
        }
    }

    /// A name for debugging and logs only; matching never looks at it.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn handler(mut self, handler: HandlerService) -> Self {
        self.handler = Some(handler);
        self
    }

    pub fn before(mut self, middleware: MiddlewareService) -> Self {
        self.before.push(middleware);
        self
    }

    pub fn after(mut self, middleware: AfterMiddlewareService) -> Self {
        self.after.push(middleware);
        self
    }

    pub(crate) fn build(self, prefix: &str) -> Result<Route, ConfigError> {
        let full = path::join(prefix, &self.pattern);
        let pattern = PathPattern::parse(&full)?;
        let handler = self
            .handler
            .ok_or(ConfigError::MissingHandler { route: full })?;
        Ok(Route {
            method: match self.method {
                Some(method) => MethodPattern::Only(method),
                None => MethodPattern::Any,
            },
            pattern,
            name: self.name.map(Into::into),
            handler,
            before: self.before.into_boxed_slice(),
            after: self.after.into_boxed_slice(),
        })
    }
}
