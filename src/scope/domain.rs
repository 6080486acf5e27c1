use super::{
    error::ConfigError,
    group::{Group, GroupBuilder},
    route::{Route, RouteBuilder},
    MiddlewareScope,
};
use crate::{
    chain::{AfterMiddlewareService, MiddlewareService},
    pattern::HostPattern,
};

/// A sealed host-pattern-scoped collection of routes and groups. Domains
/// are evaluated in registration order; the dispatcher uses the first whose
/// pattern matches the Host header.
pub struct Domain {
    pattern: HostPattern,
    routes: Box<[Route]>,
    groups: Box<[Group]>,
    before: Box<[MiddlewareService]>,
    after: Box<[AfterMiddlewareService]>,
}

impl Domain {
    pub fn pattern(&self) -> &HostPattern {
        &self.pattern
    }

    pub(crate) fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub(crate) fn groups(&self) -> &[Group] {
        &self.groups
    }
}

impl MiddlewareScope for Domain {
    fn before(&self) -> &[MiddlewareService] {
        &self.before
    }

    fn after(&self) -> &[AfterMiddlewareService] {
        &self.after
    }
}

pub struct DomainBuilder {
    pattern: String,
    routes: Vec<RouteBuilder>,
    groups: Vec<GroupBuilder>,
    before: Vec<MiddlewareService>,
    after: Vec<AfterMiddlewareService>,
}

impl DomainBuilder {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            routes: Vec::new(),
            groups: Vec::new(),
            before: Vec::new(),
            after: Vec::new(),
        }
    }

    pub fn route(mut self, route: RouteBuilder) -> Self {
        self.routes.push(route);
        self
    }

    pub fn group(mut self, group: GroupBuilder) -> Self {
        self.groups.push(group);
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

    pub(crate) fn build(self) -> Result<Domain, ConfigError> {
        Ok(Domain {
            pattern: HostPattern::parse(&self.pattern)?,
            routes: self
                .routes
                .into_iter()
                .map(|route| route.build(""))
                .collect::<Result<Vec<_>, _>>()?
                .into_boxed_slice(),
            groups: self
                .groups
                .into_iter()
                .map(|group| group.build(""))
                .collect::<Result<Vec<_>, _>>()?
                .into_boxed_slice(),
            before: self.before.into_boxed_slice(),
            after: self.after.into_boxed_slice(),
        })
    }
}
