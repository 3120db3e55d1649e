//! Output file naming and writing

use crate::error::{SchemaGenError, SchemaResult};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Suffix appended to the lower-cased type name
pub const OUTPUT_SUFFIX: &str = ".schema.json";

/// Output file name for a type: `User` -> `user.schema.json`
pub fn output_file_name(type_name: &str) -> String {
    format!("{}{OUTPUT_SUFFIX}", type_name.to_lowercase())
}

/// Write rendered schema text into `dir`, replacing any existing file.
///
/// The text goes to a temporary file in `dir` first and is renamed into
/// place, so the destination is either the old file or the complete new one.
/// Returns the path written.
pub fn write_schema(dir: &Path, type_name: &str, contents: &str) -> SchemaResult<PathBuf> {
    let path = dir.join(output_file_name(type_name));

    let mut file = tempfile::Builder::new()
        .prefix(".tagschema")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| SchemaGenError::io(dir, e))?;
    file.write_all(contents.as_bytes())
        .and_then(|()| file.as_file().sync_all())
        .map_err(|e| SchemaGenError::io(file.path(), e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(file.path(), std::fs::Permissions::from_mode(0o644))
            .map_err(|e| SchemaGenError::io(file.path(), e))?;
    }

    file.persist(&path)
        .map_err(|e| SchemaGenError::io(&path, e.error))?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote schema");
    Ok(path)
}

#[cfg(test)]
#[path = "writer/writer_tests.rs"]
mod writer_tests;
