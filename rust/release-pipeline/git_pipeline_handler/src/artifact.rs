use std::{
    io::Cursor,
    path::{Path, PathBuf},
};

use tempfile::TempDir;
use zip::ZipArchive;

use crate::error::PromotionError;

/// Prefix of the per invocation scratch directory
pub const SCRATCH_PREFIX: &str = "artifact-";
/// Path of the version marker, relative to the root of the artifact
pub const VERSION_FILE: &str = "VERSION";

/// An artifact unpacked into its own scratch directory.
/// The directory is removed when this is dropped.
#[derive(Debug)]
pub struct ExtractedArtifact {
    scratch: TempDir,
    root: PathBuf,
}

impl ExtractedArtifact {
    /// Root of the extracted tree
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn scratch_dir(&self) -> &Path {
        self.scratch.path()
    }

    /// Reads the version marker. A missing or unreadable file yields an empty version.
    #[tracing::instrument(skip(self), fields(root = ?self.root))]
    pub fn version(&self) -> String {
        match std::fs::read_to_string(self.root.join(VERSION_FILE)) {
            Ok(version) => {
                tracing::info!(version = %version, "resolved version");
                version
            }
            Err(e) => {
                tracing::warn!(error=?e, "could not resolve the version");
                String::new()
            }
        }
    }
}

/// Unpacks a zip archive into a fresh scratch directory under the system temp dir
#[tracing::instrument(skip(archive), fields(archive_len = archive.len()))]
pub fn extract(archive: &[u8]) -> Result<ExtractedArtifact, PromotionError> {
    extract_in(std::env::temp_dir(), archive)
}

/// Unpacks a zip archive into a fresh scratch directory under `parent`
pub fn extract_in(
    parent: impl AsRef<Path>,
    archive: &[u8],
) -> Result<ExtractedArtifact, PromotionError> {
    let scratch = tempfile::Builder::new()
        .prefix(SCRATCH_PREFIX)
        .tempdir_in(parent)
        .map_err(|e| {
            PromotionError::DecompressionError(format!("could not create scratch dir: {e}"))
        })?;
    let root = scratch.path().join("artifacts");

    tracing::debug!("extracting artifact to {:?}", root);

    let mut zip = ZipArchive::new(Cursor::new(archive))
        .map_err(|e| PromotionError::DecompressionError(e.to_string()))?;
    zip.extract(&root)
        .map_err(|e| PromotionError::DecompressionError(e.to_string()))?;

    Ok(ExtractedArtifact { scratch, root })
}
