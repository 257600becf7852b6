//! Helpers for working with slices and slices of rows.
//!
//! # Purpose
//! These functions cover the small jobs that come up around plain arrays: turning them into text,
//! copying or filling a two-dimensional matrix, checking membership and gathering several slices
//! into one collection.
//!
//! # Absent Values
//! Arguments which are allowed to be missing are taken as [`Option`]s, as are the elements of
//! slices which may contain holes. Each function documents what it does with `None`: most of them
//! treat it as an empty or no-op case, while [`add_all`] and [`as_list`] reject it with an
//! [`InvalidArgumentError`].
//!
//! Apart from the matrix helpers, which write into the matrix they are given, every function here
//! leaves its arguments untouched.

mod convert;
mod join;
mod matrix;
mod search;

pub use convert::*;
pub use join::*;
pub use matrix::*;
pub use search::*;

pub use crate::util::error::{CapacityOverflow, IndexOutOfBounds, InvalidArgumentError, ListError};
