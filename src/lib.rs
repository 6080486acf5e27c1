//! Request-dispatch core for HTTP routers.
//!
//! Given a request's method, path and Host header, [`Router::dispatch`]
//! locates the single matching route inside a scope tree (router → domain →
//! group → nested group → route) and composes one executable chain of
//! "before" and "after" middleware around the route's handler. Matching is
//! evaluated per request against the sealed tree; there is no regex engine,
//! no trie and no caching.
//!
//! The tree is assembled through builders and sealed by
//! [`RouterBuilder::build`], which validates every pattern up front. A sealed
//! [`Router`] is immutable; share it across request tasks behind an `Arc`.
//!
//! # Example usage
//!
//! ```
//! use futures::FutureExt;
//! use http::{Method, StatusCode};
//! use junction::{handler_fn, Outcome, Response, RouteBuilder, Router};
//!
//! let router = Router::builder()
//!     .route(
//!         RouteBuilder::new(Method::GET, "/users/:id")
//!             .named("user-detail")
//!             .handler(handler_fn(|_ctx, _request| {
//!                 async move { Ok(Response::new(StatusCode::OK)) }.boxed()
//!             })),
//!     )
//!     .build()
//!     .unwrap();
//!
//! match router.dispatch(&Method::GET, "/users/42", "") {
//!     Outcome::Match(execution) => {
//!         assert_eq!(execution.ctx().param("id"), Some("42"));
//!     }
//!     Outcome::NotFound => unreachable!(),
//! }
//! ```

pub(crate) mod chain;
pub(crate) mod dispatch;
pub(crate) mod http;
pub(crate) mod params;
pub(crate) mod pattern;
pub(crate) mod scope;

pub use chain::{
    handler_fn, AfterMiddleware, AfterMiddlewareService, AfterNext, Handler, HandlerService,
    Middleware, MiddlewareService, Next,
};
pub use dispatch::{Ctx, Error, Execution, Outcome, Result};
pub use self::http::{HeaderMapExt, Request, Response};
pub use params::ParamSet;
pub use pattern::{HostPattern, PathPattern, PatternError, Segment};
pub use scope::{
    ConfigError, Domain, DomainBuilder, Group, GroupBuilder, MethodPattern, Route, RouteBuilder,
    Router, RouterBuilder,
};
