use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

use tracing::debug;

use super::error::{PrefixLengthError, ResourceError};
use super::exit::delete_on_exit;
use super::resource::get_default_resource_as_stream;

const MIN_PREFIX_LEN: usize = 3;
const DEFAULT_SUFFIX: &str = ".tmp";

/// Copies the resource called `name` from the [`classpath()`](super::classpath()) into a new
/// temporary file, so that it can be handed to code which only accepts file paths. The file is
/// named `<prefix><random><suffix>` (`suffix` defaults to `.tmp`) and is deleted when the process
/// exits normally.
///
/// # Errors
/// - Any error from [`get_resource_as_stream`](super::get_resource_as_stream), including a missing
///   `name`.
/// - [`ResourceError::PrefixLength`] if `prefix` is shorter than three characters.
/// - [`ResourceError::Io`] if the file couldn't be created or written. A partly written file is
///   removed straight away.
pub fn resource_to_file(
    name: Option<&str>,
    prefix: &str,
    suffix: Option<&str>,
) -> Result<PathBuf, ResourceError> {
    let mut reader = BufReader::new(get_default_resource_as_stream(name)?);
    if prefix.chars().count() < MIN_PREFIX_LEN {
        return Err(PrefixLengthError { prefix: prefix.to_owned() }.into());
    }

    let file = tempfile::Builder::new()
        .prefix(prefix)
        .suffix(suffix.unwrap_or(DEFAULT_SUFFIX))
        .tempfile()?;

    {
        let mut writer = BufWriter::new(file.as_file());
        io::copy(&mut reader, &mut writer)?;
        writer.flush()?;
    }

    let (_, path) = file.keep().map_err(|err| err.error)?;
    debug!(path = %path.display(), "copied resource to temp file");
    delete_on_exit(&path);
    Ok(path)
}
