//! Change text resolution
//!
//! The single CLI argument is either a literal description of the changes
//! or a path to a `.diff` file whose contents describe them.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::InputError;

/// Suffix that marks the argument as a path to a diff file
pub const DIFF_SUFFIX: &str = ".diff";

/// Resolve the CLI argument into change text
///
/// # Arguments
///
/// * `argument` - Literal change description, or a path ending in `.diff`
///
/// # Returns
///
/// * `Result<String, InputError>` - The file contents for `.diff` paths,
///   otherwise the argument itself
///
/// # Errors
///
/// * `InputError::NotFound` - The `.diff` path is not an existing regular file
/// * `InputError::Read` - The file exists but could not be read as UTF-8 text
///
/// # Example
///
/// ```
/// use smartcommit::input::resolve_changes;
///
/// let changes = resolve_changes("Added login validation").unwrap();
/// assert_eq!(changes, "Added login validation");
/// ```
pub fn resolve_changes(argument: &str) -> Result<String, InputError> {
    if !argument.ends_with(DIFF_SUFFIX) {
        return Ok(argument.to_string());
    }

    let path = Path::new(argument);
    if !path.is_file() {
        return Err(InputError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = contents.len(), "read diff file");

    Ok(contents)
}
