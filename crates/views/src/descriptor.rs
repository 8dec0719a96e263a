//! View handles with deferred, load-once materialization.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of a mountable view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewId(Cow<'static, str>);

impl ViewId {
    pub fn new(id: impl Into<Cow<'static, str>>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ViewId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for ViewId {
    fn from(id: &'static str) -> Self {
        Self::new(id)
    }
}

/// A materialized view implementation.
pub trait View: Send + Sync {
    fn id(&self) -> ViewId;

    fn title(&self) -> &str;

    /// Produce the view's content for the hosting surface.
    fn mount(&self) -> String;
}

/// View code failed to materialize.
///
/// Distinct from a policy denial: the caller was permitted, yet the
/// navigation cannot complete. Not retried automatically.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("view '{view}' failed to load: {reason}")]
pub struct ViewLoadError {
    pub view: ViewId,
    pub reason: String,
}

impl ViewLoadError {
    pub fn new(view: ViewId, reason: impl Into<String>) -> Self {
        Self {
            view,
            reason: reason.into(),
        }
    }
}

type ViewFactory = Box<dyn Fn() -> Result<Arc<dyn View>, ViewLoadError> + Send + Sync>;

/// Deferred view handle.
///
/// The factory runs only once an authorized navigation actually needs the
/// view; its first success is cached for the process lifetime. Failures
/// are returned to the caller and not cached, so a later navigation may
/// try again.
pub struct ViewDescriptor {
    id: ViewId,
    factory: ViewFactory,
    loaded: OnceCell<Arc<dyn View>>,
}

impl ViewDescriptor {
    pub fn new(
        id: impl Into<ViewId>,
        factory: impl Fn() -> Result<Arc<dyn View>, ViewLoadError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            factory: Box::new(factory),
            loaded: OnceCell::new(),
        }
    }

    pub fn id(&self) -> &ViewId {
        &self.id
    }

    /// Whether the factory has already produced the view.
    pub fn is_loaded(&self) -> bool {
        self.loaded.get().is_some()
    }

    /// Load-once materialization.
    pub fn materialize(&self) -> Result<Arc<dyn View>, ViewLoadError> {
        self.loaded
            .get_or_try_init(|| (self.factory)())
            .map(Arc::clone)
    }
}

impl fmt::Debug for ViewDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewDescriptor")
            .field("id", &self.id)
            .field("loaded", &self.is_loaded())
            .finish_non_exhaustive()
    }
}
