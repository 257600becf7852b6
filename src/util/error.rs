#[cfg(feature = "arrays")]
use std::error::Error;
#[cfg(feature = "arrays")]
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error};
#[cfg(feature = "arrays")]
use derive_more::{From, IsVariant};

#[cfg(feature = "arrays")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

#[cfg(feature = "arrays")]
impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for array with {} elements!", self.index, self.len)
    }
}

#[cfg(feature = "arrays")]
impl Error for IndexOutOfBounds {}

#[cfg(feature = "arrays")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityOverflow;

#[cfg(feature = "arrays")]
impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

#[cfg(feature = "arrays")]
impl Error for CapacityOverflow {}

/// A required argument was absent. The message says which one.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("{_0}")]
pub struct InvalidArgumentError(#[error(not(source))] pub &'static str);

/// The ways in which slices can fail to be combined into a single list.
#[cfg(feature = "arrays")]
#[derive(Debug, Display, Error, From, IsVariant, Clone, PartialEq, Eq)]
pub enum ListError {
    InvalidArgument(InvalidArgumentError),
    CapacityOverflow(CapacityOverflow),
}
