use super::{
    domain::{Domain, DomainBuilder},
    error::ConfigError,
    group::{Group, GroupBuilder},
    route::{Route, RouteBuilder},
    MiddlewareScope,
};
use crate::chain::{AfterMiddlewareService, MiddlewareService};

/// The sealed root of the scope tree. Built once at startup via
/// [`RouterBuilder`]; immutable afterwards, so it can be shared across
/// request tasks behind an `Arc` without locks.
pub struct Router {
    prefix: Box<str>,
    routes: Box<[Route]>,
    groups: Box<[Group]>,
    domains: Box<[Domain]>,
    before: Box<[MiddlewareService]>,
    after: Box<[AfterMiddlewareService]>,
}

impl Router {
    pub fn builder() -> RouterBuilder {
        RouterBuilder::default()
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub(crate) fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub(crate) fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub(crate) fn domains(&self) -> &[Domain] {
        &self.domains
    }
}

impl MiddlewareScope for Router {
    fn before(&self) -> &[MiddlewareService] {
        &self.before
    }

    fn after(&self) -> &[AfterMiddlewareService] {
        &self.after
    }
}

#[derive(Default)]
pub struct RouterBuilder {
    prefix: String,
    routes: Vec<RouteBuilder>,
    groups: Vec<GroupBuilder>,
    domains: Vec<DomainBuilder>,
    before: Vec<MiddlewareService>,
    after: Vec<AfterMiddlewareService>,
}

impl RouterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A path prefix applied to every route registered directly on the
    /// router or under its groups. Domains are not affected.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn route(mut self, route: RouteBuilder) -> Self {
        self.routes.push(route);
        self
    }

    pub fn group(mut self, group: GroupBuilder) -> Self {
        self.groups.push(group);
        self
    }

    pub fn domain(mut self, domain: DomainBuilder) -> Self {
        self.domains.push(domain);
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

    /// Seals the tree. Every pattern is compiled and validated here, so a
    /// misconfigured registration fails now instead of at match time.
    pub fn build(self) -> Result<Router, ConfigError> {
        let prefix = self.prefix;
        Ok(Router {
            routes: self
                .routes
                .into_iter()
                .map(|route| route.build(&prefix))
                .collect::<Result<Vec<_>, _>>()?
                .into_boxed_slice(),
            groups: self
                .groups
                .into_iter()
                .map(|group| group.build(&prefix))
                .collect::<Result<Vec<_>, _>>()?
                .into_boxed_slice(),
            domains: self
                .domains
                .into_iter()
                .map(DomainBuilder::build)
                .collect::<Result<Vec<_>, _>>()?
                .into_boxed_slice(),
            before: self.before.into_boxed_slice(),
            after: self.after.into_boxed_slice(),
            prefix: prefix.into_boxed_str(),
        })
    }
}
