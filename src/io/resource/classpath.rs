use std::fmt::{self, Debug, Formatter};
use std::io;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use tracing::trace;

use super::{ResourceResolver, ResourceStream};

static CLASSPATH: LazyLock<Classpath> = LazyLock::new(|| Classpath::new(env!("CARGO_PKG_NAME")));

/// Returns the process-wide [`Classpath`], which is the namespace used whenever an operation is
/// given no resolver of its own. It starts out empty; applications add their resource locations
/// with [`Classpath::push`].
pub fn classpath() -> &'static Classpath {
    &CLASSPATH
}

pub(crate) fn resolver_or_default(context: Option<&dyn ResourceResolver>) -> &dyn ResourceResolver {
    match context {
        Some(resolver) => resolver,
        None => classpath(),
    }
}

/// An ordered chain of resolvers. A resource is opened from the first resolver that has it.
///
/// Resolvers can be added through a shared reference, so a `Classpath` can be extended while it is
/// in use by other threads.
pub struct Classpath {
    name: String,
    entries: RwLock<Vec<Arc<dyn ResourceResolver>>>,
}

impl Classpath {
    pub fn new<S: Into<String>>(name: S) -> Classpath {
        Classpath {
            name: name.into(),
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Appends `resolver` to the end of the chain, giving it the lowest priority.
    pub fn push<R: ResourceResolver + 'static>(&self, resolver: R) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::new(resolver));
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Debug for Classpath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("Classpath")
            .field("name", &self.name)
            .field("entries", &entries.iter().map(|entry| entry.name()).collect::<Vec<_>>())
            .finish()
    }
}

impl ResourceResolver for Classpath {
    fn name(&self) -> &str {
        &self.name
    }

    fn open(&self, resource: &str) -> io::Result<Option<ResourceStream>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        for entry in entries.iter() {
            if let Some(stream) = entry.open(resource)? {
                trace!(resource, resolver = entry.name(), "resource found on classpath");
                return Ok(Some(stream));
            }
        }
        Ok(None)
    }
}
