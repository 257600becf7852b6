//! Named, read-only resources and the namespaces they are found in.
//!
//! A [`ResourceResolver`] maps a logical name, such as `"config/app.properties"`, to a readable
//! stream. This module provides resolvers backed by a directory ([`DirResolver`]) and by memory
//! ([`MemoryResolver`]), as well as [`Classpath`], which chains several resolvers together.
//!
//! # Default Namespace
//! Every operation that accepts an optional resolver falls back to the process-wide
//! [`classpath()`] when it is given `None`. It is created empty on first use.
//!
//! # Closing
//! Streams opened inside these functions are dropped before the function returns, on every path.
//! Dropping can't report an error, so a failure while reading is always the one the caller sees.

mod classpath;
mod open;
mod resolver;

pub use classpath::*;
pub use open::*;
pub use resolver::*;
