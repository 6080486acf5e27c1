use super::{AfterMiddlewareService, MiddlewareService};
use crate::scope::MiddlewareScope;

/// Flattens the before lists of a matched scope path into execution order:
/// outermost scope first, each scope's own list in registration order.
pub(crate) fn before_chain(scopes: &[&dyn MiddlewareScope]) -> Vec<MiddlewareService> {
    scopes
        .iter()
        .flat_map(|scope| scope.before().iter().cloned())
        .collect()
}

/// Flattens the after lists into execution order: innermost scope first,
/// each scope's own list reversed (last-added-first-executed).
pub(crate) fn after_chain(scopes: &[&dyn MiddlewareScope]) -> Vec<AfterMiddlewareService> {
    scopes
        .iter()
        .rev()
        .flat_map(|scope| scope.after().iter().rev().cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        chain::{AfterMiddleware, AfterNext, Middleware, Next},
        dispatch::{Ctx, Result},
        http::{Request, Response},
    };

    struct Tag(&'static str);

    #[async_trait]
    impl Middleware for Tag {
        async fn run(&self, _ctx: Arc<Ctx>, request: Request, next: Next) -> Result<Response> {
            next.run(request).await
        }

        fn name(&self) -> &str {
            self.0
        }
    }

    #[async_trait]
    impl AfterMiddleware for Tag {
        async fn run(
            &self,
            _ctx: Arc<Ctx>,
            response: Response,
            next: AfterNext,
        ) -> Result<Response> {
            next.run(response).await
        }

        fn name(&self) -> &str {
            self.0
        }
    }

    struct TestScope {
        before: Vec<MiddlewareService>,
        after: Vec<AfterMiddlewareService>,
    }

    impl TestScope {
        fn new(before: &[&'static str], after: &[&'static str]) -> Self {
            Self {
                before: before
                    .iter()
                    .map(|name| Arc::new(Tag(name)) as MiddlewareService)
                    .collect(),
                after: after
                    .iter()
                    .map(|name| Arc::new(Tag(name)) as AfterMiddlewareService)
                    .collect(),
            }
        }
    }

    impl MiddlewareScope for TestScope {
        fn before(&self) -> &[MiddlewareService] {
            &self.before
        }

        fn after(&self) -> &[AfterMiddlewareService] {
            &self.after
        }
    }

    #[test]
    fn test_before_chain_is_outer_to_inner_in_registration_order() {
        let router = TestScope::new(&["R1", "R2"], &[]);
        let group = TestScope::new(&["G1"], &[]);
        let route = TestScope::new(&["r1"], &[]);
        let chain = before_chain(&[&router, &group, &route]);
        let names: Vec<&str> = chain.iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["R1", "R2", "G1", "r1"]);
    }

    #[test]
    fn test_after_chain_is_inner_to_outer_with_intra_scope_reversal() {
        let router = TestScope::new(&[], &["Ra1", "Ra2"]);
        let group = TestScope::new(&[], &["Ga1"]);
        let route = TestScope::new(&[], &["ra1", "ra2"]);
        let chain = after_chain(&[&router, &group, &route]);
        let names: Vec<&str> = chain.iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["ra2", "ra1", "Ga1", "Ra2", "Ra1"]);
    }
}
