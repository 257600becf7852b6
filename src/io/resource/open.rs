use std::io::BufReader;

use tracing::debug;

use super::{ResourceResolver, ResourceStream, resolver_or_default};
use crate::io::error::{NotFoundError, ResourceError};
use crate::io::read::{read_all_as_lines, read_all_as_string};
use crate::util::error::InvalidArgumentError;

/// Opens the resource called `name` from `context`, or from the [`classpath()`](super::classpath())
/// when `context` is `None`.
///
/// # Errors
/// - [`ResourceError::InvalidArgument`] if `name` is `None`.
/// - [`ResourceError::NotFound`] naming both the resource and the resolver, if there is no such
///   resource.
/// - [`ResourceError::Io`] if the resource exists but couldn't be opened.
pub fn get_resource_as_stream(
    name: Option<&str>,
    context: Option<&dyn ResourceResolver>,
) -> Result<ResourceStream, ResourceError> {
    let resolver = resolver_or_default(context);
    let name = name.ok_or(InvalidArgumentError("resource cannot be null"))?;

    debug!(resource = name, resolver = resolver.name(), "opening resource");
    match resolver.open(name)? {
        Some(stream) => Ok(stream),
        None => Err(NotFoundError {
            resource: name.to_owned(),
            resolver: resolver.name().to_owned(),
        })?,
    }
}

/// Opens the resource called `name` from the [`classpath()`](super::classpath()). See
/// [`get_resource_as_stream`].
pub fn get_default_resource_as_stream(name: Option<&str>) -> Result<ResourceStream, ResourceError> {
    get_resource_as_stream(name, None)
}

/// Reads the whole of a textual resource into a [`String`], or returns `None` if `name` is `None`.
/// The resource is closed before returning.
pub fn read_resource_as_string(
    context: Option<&dyn ResourceResolver>,
    name: Option<&str>,
) -> Result<Option<String>, ResourceError> {
    let Some(name) = name else {
        return Ok(None);
    };

    let mut reader = BufReader::new(get_resource_as_stream(Some(name), context)?);
    Ok(Some(read_all_as_string(&mut reader)?))
}

/// Reads a textual resource as a list of lines. The resource is closed before returning, even if
/// reading it failed.
///
/// # Errors
/// Fails in the same cases as [`get_resource_as_stream`] (an absent `name` included), or with
/// [`ResourceError::Io`] if reading fails part way.
pub fn read_resource_as_lines(
    context: Option<&dyn ResourceResolver>,
    name: Option<&str>,
) -> Result<Vec<String>, ResourceError> {
    let mut reader = BufReader::new(get_resource_as_stream(name, context)?);
    Ok(read_all_as_lines(&mut reader)?)
}
