pub mod builder;
pub mod next;

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;

pub use next::{AfterNext, Next};

use crate::{
    dispatch::{Ctx, Result},
    http::{Request, Response},
};

pub type MiddlewareService = Arc<dyn Middleware + Send + Sync + 'static>;
pub type AfterMiddlewareService = Arc<dyn AfterMiddleware + Send + Sync + 'static>;
pub type HandlerService = Arc<dyn Handler + Send + Sync + 'static>;

/// A "before" middleware: wraps everything downstream of its scope, the
/// route handler included. Call [`Next::run`] to continue the chain, or
/// return a response without calling it to short-circuit; every more-nested
/// before stage and the handler are then skipped.
#[async_trait]
pub trait Middleware {
    async fn run(&self, ctx: Arc<Ctx>, request: Request, next: Next) -> Result<Response>;

    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// An "after" middleware: runs once the before+handler phase has produced a
/// response, in an independent chain. It runs even when a before middleware
/// short-circuited the handler.
#[async_trait]
pub trait AfterMiddleware {
    async fn run(&self, ctx: Arc<Ctx>, response: Response, next: AfterNext) -> Result<Response>;

    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// The terminal stage of the before chain: the route's handler.
#[async_trait]
pub trait Handler {
    async fn call(&self, ctx: Arc<Ctx>, request: Request) -> Result<Response>;
}

struct FnHandler<F>(F);

#[async_trait]
impl<F> Handler for FnHandler<F>
where
    F: Fn(Arc<Ctx>, Request) -> BoxFuture<'static, Result<Response>> + Send + Sync,
{
    async fn call(&self, ctx: Arc<Ctx>, request: Request) -> Result<Response> {
        (self.0)(ctx, request).await
    }
}

/// Adapts a closure returning a boxed future into a [`HandlerService`].
pub fn handler_fn<F>(f: F) -> HandlerService
where
    F: Fn(Arc<Ctx>, Request) -> BoxFuture<'static, Result<Response>> + Send + Sync + 'static,
{
    Arc::new(FnHandler(f))
}
