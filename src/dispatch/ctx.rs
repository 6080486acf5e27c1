use crate::params::ParamSet;

/// Per-request context handed to every middleware and the handler as
/// `Arc<Ctx>`. Created by the dispatcher at match time, owned by that
/// request's execution, never mutated afterwards.
#[derive(Debug)]
pub struct Ctx {
    route: Option<Box<str>>,
    params: ParamSet,
}

impl Ctx {
    pub(crate) fn new(route: Option<&str>, params: ParamSet) -> Self {
        Self {
            route: route.map(Into::into),
            params,
        }
    }

    /// The matched route's debug name, when one was registered.
    pub fn route_name(&self) -> Option<&str> {
        self.route.as_deref()
    }

    pub fn params(&self) -> &ParamSet {
        &self.params
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    /// See [`ParamSet::must`]: panics on an undeclared name.
    pub fn must_param(&self, name: &str) -> &str {
        self.params.must(name)
    }
}
