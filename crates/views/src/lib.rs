//! `sevagate-views` — view handles and the protected route table.
//!
//! Views materialize through deferred, memoized factories so that code for
//! a view a given role never visits is never built. The registry itself is
//! read-only after construction.

pub mod descriptor;
pub mod registry;
pub mod route;

pub use descriptor::{View, ViewDescriptor, ViewId, ViewLoadError};
pub use registry::{RegistryError, RouteAccess, ViewRegistry, ViewRegistryBuilder};
pub use route::RoutePath;
