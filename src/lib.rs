//! A small collection of convenience helpers for arrays and I/O.
//!
//! # Purpose
//! Neither half of this crate does anything clever. Each function wraps a handful of standard
//! library calls that tend to get written over and over: joining values into a string, filling a
//! matrix, reading a whole file or resource, loading a `.properties` file and so on.
//!
//! - [`arrays`]: pure helpers over slices and slices of rows.
//! - [`io`]: blocking helpers over readers, files, named resources and the console.
//!
//! # Absent Arguments
//! Where a function accepts a missing argument, it takes an [`Option`] and documents what `None`
//! means for it. Often that is an empty or no-op result, sometimes it is an
//! [`InvalidArgumentError`](arrays::InvalidArgumentError).
//!
//! # Error Handling
//! Errors are strongly typed: small structs implementing [`Error`](std::error::Error), combined
//! into enums where an operation can fail in more than one way. Nothing in this crate panics on
//! bad input.
//!
//! # Features
//! Both halves are enabled by default and can be turned off separately:
//! - `arrays`: has no dependencies.
//! - `io`: relies on `tempfile` for temporary files, `java-properties` for parsing, `libc` to
//!   delete files on exit and `tracing` for diagnostics. The library never installs a subscriber.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]

#[cfg(feature = "arrays")]
pub mod arrays;
#[cfg(feature = "io")]
pub mod io;

#[cfg(any(feature = "arrays", feature = "io"))]
pub(crate) mod util;
