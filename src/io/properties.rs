use std::collections::HashMap;

use super::error::ResourceError;
use super::resource::{ResourceResolver, get_resource_as_stream};
use crate::util::error::InvalidArgumentError;

/// Key-value pairs loaded from a `.properties` file.
pub type Properties = HashMap<String, String>;

/// Loads the properties in the resource called `name` into `properties`. Keys which are already
/// present are overwritten. Nothing happens if `name` is `None`.
///
/// The resource must use the standard `.properties` format: `key=value` or `key:value` pairs,
/// comment lines starting with `#` or `!` and lines continued with a trailing backslash. The stream
/// is closed before returning.
///
/// # Errors
/// - [`ResourceError::InvalidArgument`] if `context` is `None`.
/// - [`ResourceError::NotFound`] if `context` has no resource called `name`.
/// - [`ResourceError::Properties`] if the resource isn't valid, in which case `properties` is left
///   unchanged.
pub fn read_properties_from_resource(
    properties: &mut Properties,
    context: Option<&dyn ResourceResolver>,
    name: Option<&str>,
) -> Result<(), ResourceError> {
    let context = context.ok_or(InvalidArgumentError("context cannot be null"))?;
    if let Some(name) = name {
        let stream = get_resource_as_stream(Some(name), Some(context))?;
        properties.extend(java_properties::read(stream)?);
    }
    Ok(())
}

/// Creates a new [`Properties`] and loads the resource called `name` into it, using
/// [`read_properties_from_resource`]. If `name` is `None`, the result is empty.
///
/// # Examples
/// ```
/// # use arputil::io::{MemoryResolver, create_properties_from_resource};
/// let resolver = MemoryResolver::new("app").with("app.properties", "# settings\nname = demo\n");
/// let properties =
///     create_properties_from_resource(Some(&resolver), Some("app.properties")).unwrap();
/// assert_eq!(properties["name"], "demo");
/// ```
pub fn create_properties_from_resource(
    context: Option<&dyn ResourceResolver>,
    name: Option<&str>,
) -> Result<Properties, ResourceError> {
    let mut properties = Properties::new();
    read_properties_from_resource(&mut properties, context, name)?;
    Ok(properties)
}

/// Another name for [`create_properties_from_resource`].
pub fn load_properties_from_resource(
    context: Option<&dyn ResourceResolver>,
    name: Option<&str>,
) -> Result<Properties, ResourceError> {
    create_properties_from_resource(context, name)
}

/// Loads each of `names` into its own [`Properties`], in order. Returns `None` if `names` is
/// `None`, and stops at the first resource that fails to load.
pub fn load_properties_from_resources(
    context: Option<&dyn ResourceResolver>,
    names: Option<&[&str]>,
) -> Result<Option<Vec<Properties>>, ResourceError> {
    names
        .map(|names| {
            names
                .iter()
                .map(|&name| load_properties_from_resource(context, Some(name)))
                .collect::<Result<Vec<_>, _>>()
        })
        .transpose()
}
