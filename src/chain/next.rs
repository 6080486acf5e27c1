use std::sync::Arc;

use tracing::debug;

use super::{AfterMiddlewareService, HandlerService, MiddlewareService};
use crate::{
    dispatch::{Ctx, Result},
    http::{Request, Response},
};

pub type Middlewares = Box<dyn Iterator<Item = MiddlewareService> + Send>;
pub type AfterMiddlewares = Box<dyn Iterator<Item = AfterMiddlewareService> + Send>;

/// The remainder of the before chain, ending in the route handler. Owned by
/// the middleware currently running; dropping it without calling [`run`]
/// short-circuits the chain.
///
/// [`run`]: Next::run
pub struct Next {
    pub(crate) ctx: Arc<Ctx>,
    pub(crate) it: Middlewares,
    pub(crate) handler: HandlerService,
}

impl Next {
    pub async fn run(mut self, request: Request) -> Result<Response> {
        match self.it.next() {
            Some(middleware) => {
                debug!(middleware = middleware.name(), "-->");
                let response = middleware.run(self.ctx.clone(), request, self).await;
                debug!(middleware = middleware.name(), "<--");
                response
            }
            None => self.handler.call(self.ctx.clone(), request).await,
        }
    }
}

/// The remainder of the after chain; its terminal stage passes the response
/// through unchanged.
pub struct AfterNext {
    pub(crate) ctx: Arc<Ctx>,
    pub(crate) it: AfterMiddlewares,
}

impl AfterNext {
    pub async fn run(mut self, response: Response) -> Result<Response> {
        match self.it.next() {
            Some(middleware) => {
                debug!(middleware = middleware.name(), "-->");
                let response = middleware.run(self.ctx.clone(), response, self).await;
                debug!(middleware = middleware.name(), "<--");
                response
            }
            None => Ok(response),
        }
    }
}
