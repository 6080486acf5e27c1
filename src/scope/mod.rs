pub mod domain;
pub mod error;
pub mod group;
pub mod route;
pub mod router;

pub use domain::{Domain, DomainBuilder};
pub use error::ConfigError;
pub use group::{Group, GroupBuilder};
pub use route::{MethodPattern, Route, RouteBuilder};
pub use router::{Router, RouterBuilder};

use crate::chain::{AfterMiddlewareService, MiddlewareService};

/// A node of the scope tree that carries middleware lists. The chain
/// builder only needs this view of a matched scope path.
pub(crate) trait MiddlewareScope {
    fn before(&self) -> &[MiddlewareService];

    fn after(&self) -> &[AfterMiddlewareService];
}
