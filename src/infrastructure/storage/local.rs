use std::io;
use std::path::PathBuf;

use tracing::info;

use crate::config::settings::AppConfig;

/// Local-filesystem storage over the two service directories: uploads go
/// into the upload area, encoded artifacts live in the output area. Both
/// are append-only from the request path's perspective; only the janitor
/// ever deletes from them.
#[derive(Clone)]
pub struct StorageService {
    upload_dir: PathBuf,
    output_dir: PathBuf,
}

impl StorageService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            upload_dir: config.upload_dir.clone(),
            output_dir: config.output_dir.clone(),
        }
    }

    /// Create both directories if they do not exist yet.
    pub fn ensure_dirs(&self) -> io::Result<()> {
        std::fs::create_dir_all(&self.upload_dir)?;
        std::fs::create_dir_all(&self.output_dir)?;
        info!(
            upload_dir = %self.upload_dir.display(),
            output_dir = %self.output_dir.display(),
            "Storage directories ready"
        );
        Ok(())
    }

    /// Persist one upload under its job-namespaced key. The key must
    /// already be sanitized; see [`crate::common::upload::sanitize_filename`].
    pub async fn store_upload(&self, key: &str, data: &[u8]) -> io::Result<PathBuf> {
        let path = self.upload_dir.join(key);
        tokio::fs::write(&path, data).await?;
        Ok(path)
    }

    /// Where the encoder writes the artifact with the given filename.
    pub fn output_path(&self, filename: &str) -> PathBuf {
        self.output_dir.join(filename)
    }

    /// Map a client-supplied artifact name to its storage path. Names
    /// carrying path separators or `..` never resolve, so a download
    /// request cannot escape the output area.
    pub fn resolve_artifact(&self, filename: &str) -> Option<PathBuf> {
        if filename.is_empty()
            || filename.contains('/')
            || filename.contains('\\')
            || filename.contains("..")
        {
            return None;
        }
        Some(self.output_dir.join(filename))
    }
}
