//! Filesystem persistence for generated artifacts.

use std::fs;
use std::path::PathBuf;

use intellidb_core::generate::Artifact;

use crate::prelude::*;

/// Write the artifact to its final path, creating the target directory
/// (including intermediate segments) if needed.
///
/// The content goes to the final path in a single write; there is no
/// separate commit step. A directory created here stays in place even if
/// the write itself fails afterwards.
pub fn write(artifact: &Artifact) -> Result<PathBuf, Error> {
    fs::create_dir_all(&artifact.directory)?;

    let path = artifact.directory.join(&artifact.file_name);
    fs::write(&path, &artifact.content)?;

    Ok(path)
}
