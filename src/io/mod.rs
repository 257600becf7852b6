//! Convenience routines for reading readers, files and resources, loading properties, copying
//! resources to temporary files and prompting on the console.
//!
//! # Purpose
//! Every function here is a thin, blocking wrapper around [`std::io`]: read everything, read all
//! lines, open-read-close. They exist so that callers don't have to repeat the same few lines of
//! buffering and error plumbing each time.
//!
//! # Ownership
//! Readers and writers passed in by the caller are borrowed and left open. Anything opened by the
//! functions themselves (files, resource streams, temp files) is closed before they return,
//! whether they succeed or not.
//!
//! # Errors
//! Functions which only touch caller supplied streams or paths return [`std::io::Result`].
//! Functions which look up resources return [`ResourceError`], which distinguishes absent
//! arguments, missing resources, malformed properties and plain I/O failures. Nothing is retried
//! and nothing is logged as an error; it is always handed back to the caller.

mod console;
mod error;
mod exit;
mod properties;
mod read;
mod resource;
mod temp;

pub use console::*;
pub use error::*;
pub use properties::*;
pub use read::*;
pub use resource::*;
pub use temp::*;

pub use crate::util::error::InvalidArgumentError;

mod tests;
