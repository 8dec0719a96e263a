//! Static route table: which roles may reach which views.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use sevagate_core::Role;

use crate::descriptor::ViewDescriptor;
use crate::route::RoutePath;

/// Outcome of a route lookup for a given role.
#[derive(Debug)]
pub enum RouteAccess<'a> {
    /// The role may mount this view.
    Permitted(&'a ViewDescriptor),
    /// The path exists but requires a role the caller does not hold.
    Forbidden,
    /// Unknown path. The gate treats this as a denial, never a crash.
    NotFound,
}

#[derive(Debug)]
struct RouteEntry {
    required: HashSet<Role>,
    view: usize,
}

/// Registry construction failures, reported at build time rather than at
/// navigation time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("route '{0}' is registered twice")]
    DuplicateRoute(RoutePath),

    #[error("landing for role '{role}' points at unregistered path '{path}'")]
    UnknownLandingPath { role: Role, path: RoutePath },
}

/// Read-only after construction: an arena of view descriptors plus the
/// path and landing indexes into it.
#[derive(Debug)]
pub struct ViewRegistry {
    arena: Vec<ViewDescriptor>,
    routes: HashMap<RoutePath, RouteEntry>,
    landing: HashMap<Role, RoutePath>,
}

impl ViewRegistry {
    pub fn builder() -> ViewRegistryBuilder {
        ViewRegistryBuilder::default()
    }

    /// Route lookup, fail-closed: unknown paths and missing roles never
    /// grant access.
    pub fn lookup(&self, path: &RoutePath, role: &Role) -> RouteAccess<'_> {
        match self.routes.get(path) {
            None => RouteAccess::NotFound,
            Some(entry) if entry.required.contains(role) => {
                RouteAccess::Permitted(&self.arena[entry.view])
            }
            Some(_) => RouteAccess::Forbidden,
        }
    }

    /// Default landing path for a role, when one is registered.
    pub fn landing_path_for(&self, role: &Role) -> Option<&RoutePath> {
        self.landing.get(role)
    }

    /// Descriptor behind the role's landing path.
    pub fn landing_for(&self, role: &Role) -> Option<&ViewDescriptor> {
        let path = self.landing.get(role)?;
        let entry = self.routes.get(path)?;
        self.arena.get(entry.view)
    }
}

/// Builder collecting routes and landings before the one-time validation.
#[derive(Debug, Default)]
pub struct ViewRegistryBuilder {
    arena: Vec<ViewDescriptor>,
    routes: Vec<(RoutePath, HashSet<Role>, usize)>,
    landing: Vec<(Role, RoutePath)>,
}

impl ViewRegistryBuilder {
    /// Register a protected path with its required-role set.
    pub fn route(
        mut self,
        path: impl Into<RoutePath>,
        required: impl IntoIterator<Item = Role>,
        view: ViewDescriptor,
    ) -> Self {
        let index = self.arena.len();
        self.arena.push(view);
        self.routes
            .push((path.into(), required.into_iter().collect(), index));
        self
    }

    /// Register the default landing path for a role. The path must also be
    /// registered as a route.
    pub fn landing(mut self, role: Role, path: impl Into<RoutePath>) -> Self {
        self.landing.push((role, path.into()));
        self
    }

    pub fn build(self) -> Result<ViewRegistry, RegistryError> {
        let mut routes = HashMap::with_capacity(self.routes.len());
        for (path, required, view) in self.routes {
            if routes
                .insert(path.clone(), RouteEntry { required, view })
                .is_some()
            {
                return Err(RegistryError::DuplicateRoute(path));
            }
        }

        let mut landing = HashMap::with_capacity(self.landing.len());
        for (role, path) in self.landing {
            if !routes.contains_key(&path) {
                return Err(RegistryError::UnknownLandingPath { role, path });
            }
            landing.insert(role, path);
        }

        Ok(ViewRegistry {
            arena: self.arena,
            routes,
            landing,
        })
    }
}
