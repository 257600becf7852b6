use std::io;

use derive_more::{Display, Error, From, IsVariant};
use java_properties::PropertiesError;

use crate::util::error::InvalidArgumentError;

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("could not open resource {resource} using {resolver}'s loader")]
pub struct NotFoundError {
    pub resource: String,
    pub resolver: String,
}

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("temp file prefix {prefix:?} must be at least three characters long")]
pub struct PrefixLengthError {
    pub prefix: String,
}

/// Every way in which looking up, reading or copying a resource can fail.
#[derive(Debug, Display, From, Error, IsVariant)]
pub enum ResourceError {
    InvalidArgument(InvalidArgumentError),
    NotFound(NotFoundError),
    PrefixLength(PrefixLengthError),
    Properties(PropertiesError),
    Io(io::Error),
}
