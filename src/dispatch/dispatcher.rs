use std::sync::Arc;

use http::Method;
use tracing::{debug, warn};

use super::{Ctx, Result};
use crate::{
    chain::{builder, AfterMiddlewareService, AfterNext, HandlerService, MiddlewareService, Next},
    http::{Request, Response},
    params::ParamSet,
    scope::{Group, MiddlewareScope, Route, Router},
};

/// The result of dispatching one request against the sealed tree.
pub enum Outcome {
    /// A route matched; run the execution to produce a response.
    Match(Execution),
    /// Nothing satisfies method + path + host. A method mismatch at an
    /// otherwise-matching path lands here too; translating this into a
    /// protocol-level response is the caller's job.
    NotFound,
}

impl Outcome {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    pub fn into_execution(self) -> Option<Execution> {
        match self {
            Self::Match(execution) => Some(execution),
            Self::NotFound => None,
        }
    }
}

/// One matched route with its fully composed middleware chains, ready to
/// run exactly once.
pub struct Execution {
    ctx: Arc<Ctx>,
    before: Vec<MiddlewareService>,
    after: Vec<AfterMiddlewareService>,
    handler: HandlerService,
}

impl Execution {
    pub fn ctx(&self) -> &Ctx {
        &self.ctx
    }

    /// Runs the before chain down to the handler, then the after chain on
    /// whatever response the before phase produced. The after chain runs
    /// even when a before middleware short-circuited the handler; an `Err`
    /// from any stage propagates immediately instead.
    pub async fn run(self, request: Request) -> Result<Response> {
        let Execution {
            ctx,
            before,
            after,
            handler,
        } = self;
        let next = Next {
            ctx: ctx.clone(),
            it: Box::new(before.into_iter()),
            handler,
        };
        let response = next.run(request).await?;
        if after.is_empty() {
            return Ok(response);
        }
        let next = AfterNext {
            ctx,
            it: Box::new(after.into_iter()),
        };
        next.run(response).await
    }
}

impl Router {
    /// Locates the single route matching `method` + `path` + `host` and
    /// composes its execution chain.
    ///
    /// Domains are tried first, in registration order; the first whose host
    /// pattern matches restricts the search to that domain's routes and
    /// groups. With no domain match the router's own top-level routes and
    /// groups are searched. Within a scope, direct routes win over nested
    /// groups, and the first structural match wins outright.
    pub fn dispatch(&self, method: &Method, path: &str, host: &str) -> Outcome {
        let mut groups = Vec::new();
        let (domain, found) = match self
            .domains()
            .iter()
            .find(|domain| domain.pattern().matches(host))
        {
            Some(domain) => {
                debug!(domain = domain.pattern().raw(), host, "host matched");
                (
                    Some(domain),
                    find_route(domain.routes(), domain.groups(), method, path, &mut groups),
                )
            }
            None => (
                None,
                find_route(self.routes(), self.groups(), method, path, &mut groups),
            ),
        };
        let (route, params) = match found {
            Some(found) => found,
            None => {
                warn!(%method, path, host, "no route matched");
                return Outcome::NotFound;
            }
        };
        debug!(
            route = route.pattern().raw(),
            name = route.name().unwrap_or_default(),
            "matched"
        );
        let mut scopes: Vec<&dyn MiddlewareScope> = Vec::with_capacity(groups.len() + 3);
        scopes.push(self);
        if let Some(domain) = domain {
            scopes.push(domain);
        }
        scopes.extend(groups.iter().map(|group| *group as &dyn MiddlewareScope));
        scopes.push(route);
        Outcome::Match(Execution {
            ctx: Arc::new(Ctx::new(route.name(), params)),
            before: builder::before_chain(&scopes),
            after: builder::after_chain(&scopes),
            handler: route.handler().clone(),
        })
    }

    /// [`dispatch`](Router::dispatch) with method, path and Host header
    /// taken from a request.
    pub fn serve(&self, request: &Request) -> Outcome {
        self.dispatch(
            &request.method,
            &request.path,
            request.host().unwrap_or_default(),
        )
    }
}

/// Depth-first search in registration order: direct routes of the scope
/// first, then each nested group. `stack` accumulates the group path that
/// led to the match so the chains can be composed.
fn find_route<'a>(
    routes: &'a [Route],
    groups: &'a [Group],
    method: &Method,
    path: &str,
    stack: &mut Vec<&'a Group>,
) -> Option<(&'a Route, ParamSet)> {
    for route in routes {
        if !route.method().matches(method) {
            continue;
        }
        if let Some(params) = route.pattern().matches(path) {
            return Some((route, params));
        }
    }
    for group in groups {
        stack.push(group);
        if let Some(found) = find_route(group.routes(), group.groups(), method, path, stack) {
            return Some(found);
        }
        stack.pop();
    }
    None
}
