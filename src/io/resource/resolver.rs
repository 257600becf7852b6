use std::collections::HashMap;
use std::fmt::{self, Debug, Formatter};
use std::fs::File;
use std::io::{self, Cursor, Read};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// An open resource, ready to be read from.
pub type ResourceStream = Box<dyn Read + Send>;

/// A namespace in which resources can be looked up by name.
///
/// Implementors decide what a name means: a relative path, a key in a table, etc. A leading `/` is
/// conventionally ignored, so that `"/config.properties"` and `"config.properties"` refer to the
/// same resource.
pub trait ResourceResolver: Send + Sync {
    /// The name of this namespace, used when reporting a missing resource.
    fn name(&self) -> &str;

    /// Opens the resource called `resource`.
    ///
    /// Returns `Ok(None)` if there is no such resource, reserving [`Err`] for resources that exist
    /// but couldn't be opened.
    fn open(&self, resource: &str) -> io::Result<Option<ResourceStream>>;
}

fn normalize(resource: &str) -> &str {
    resource.trim_start_matches('/')
}

/// Resolves resources as files below a root directory. Names which would climb out of the root,
/// such as `../secret.txt`, resolve to nothing.
#[derive(Debug, Clone)]
pub struct DirResolver {
    name: String,
    root: PathBuf,
}

impl DirResolver {
    /// Creates a resolver for `root`, named after the directory itself.
    pub fn new<P: Into<PathBuf>>(root: P) -> DirResolver {
        let root = root.into();
        DirResolver {
            name: root.display().to_string(),
            root,
        }
    }

    /// Creates a resolver for `root` with a custom name.
    pub fn named<S: Into<String>, P: Into<PathBuf>>(name: S, root: P) -> DirResolver {
        DirResolver {
            name: name.into(),
            root: root.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path of `resource` below the root, or `None` if the name would leave it.
    fn locate(&self, resource: &str) -> Option<PathBuf> {
        let relative = Path::new(normalize(resource));
        relative
            .components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
            .then(|| self.root.join(relative))
    }
}

impl ResourceResolver for DirResolver {
    fn name(&self) -> &str {
        &self.name
    }

    fn open(&self, resource: &str) -> io::Result<Option<ResourceStream>> {
        let Some(path) = self.locate(resource) else {
            return Ok(None);
        };

        match File::open(&path) {
            // Directories can be opened too, but they aren't resources.
            Ok(file) if file.metadata()?.is_file() => Ok(Some(Box::new(file))),
            Ok(_) => Ok(None),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }
}

/// Resolves resources from a table of byte strings held in memory, such as data embedded with
/// [`include_bytes!`].
///
/// # Examples
/// ```
/// # use std::io::Read;
/// # use arputil::io::{MemoryResolver, ResourceResolver};
/// let resolver = MemoryResolver::new("bundle").with("greeting.txt", "hello");
///
/// let mut text = String::new();
/// resolver.open("/greeting.txt").unwrap().unwrap().read_to_string(&mut text).unwrap();
/// assert_eq!(text, "hello");
/// assert!(resolver.open("missing.txt").unwrap().is_none());
/// ```
#[derive(Clone, Default)]
pub struct MemoryResolver {
    name: String,
    entries: HashMap<String, Arc<[u8]>>,
}

impl MemoryResolver {
    pub fn new<S: Into<String>>(name: S) -> MemoryResolver {
        MemoryResolver {
            name: name.into(),
            entries: HashMap::new(),
        }
    }

    /// Adds a resource, returning the contents it replaced, if any.
    pub fn insert<S, B>(&mut self, resource: S, contents: B) -> Option<Arc<[u8]>>
    where
        S: AsRef<str>,
        B: AsRef<[u8]>,
    {
        self.entries.insert(normalize(resource.as_ref()).to_owned(), Arc::from(contents.as_ref()))
    }

    /// Builder style version of [`MemoryResolver::insert`].
    pub fn with<S, B>(mut self, resource: S, contents: B) -> MemoryResolver
    where
        S: AsRef<str>,
        B: AsRef<[u8]>,
    {
        self.insert(resource, contents);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Debug for MemoryResolver {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryResolver")
            .field("name", &self.name)
            .field("resources", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ResourceResolver for MemoryResolver {
    fn name(&self) -> &str {
        &self.name
    }

    fn open(&self, resource: &str) -> io::Result<Option<ResourceStream>> {
        Ok(self
            .entries
            .get(normalize(resource))
            .map(|contents| Box::new(Cursor::new(Arc::clone(contents))) as ResourceStream))
    }
}
