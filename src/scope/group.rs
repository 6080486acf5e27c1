use super::{
    error::ConfigError,
    route::{Route, RouteBuilder},
    MiddlewareScope,
};
use crate::{
    chain::{AfterMiddlewareService, MiddlewareService},
    pattern::path,
};

/// A sealed collection of routes and nested groups sharing a path prefix
/// and middleware. Owned exclusively by its parent scope.
pub struct Group {
    prefix: Box<str>,
    routes: Box<[Route]>,
    groups: Box<[Group]>,
    before: Box<[MiddlewareService]>,
    after: Box<[AfterMiddlewareService]>,
}

impl Group {
    /// The effective prefix: every ancestor prefix concatenated.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub(crate) fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub(crate) fn groups(&self) -> &[Group] {
        &self.groups
    }
}

impl MiddlewareScope for Group {
    fn before(&self) -> &[MiddlewareService] {
        &self.before
    }

    fn after(&self) -> &[AfterMiddlewareService] {
        &self.after
    }
}

#[derive(Default)]
pub struct GroupBuilder {
    prefix: String,
    routes: Vec<RouteBuilder>,
    groups: Vec<GroupBuilder>,
    before: Vec<MiddlewareService>,
    after: Vec<AfterMiddlewareService>,
}

impl GroupBuilder {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Self::default()
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

    pub(crate) fn build(self, parent_prefix: &str) -> Result<Group, ConfigError> {
        let prefix = if self.prefix.is_empty() {
            parent_prefix.to_string()
        } else {
            path::join(parent_prefix, &self.prefix)
        };
        Ok(Group {
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
            before: self.before.into_boxed_slice(),
            after: self.after.into_boxed_slice(),
            prefix: prefix.into_boxed_str(),
        })
    }
}
