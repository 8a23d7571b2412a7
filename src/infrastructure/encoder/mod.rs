pub mod ffmpeg;

use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncodeError {
    /// The external tool ran but exited non-zero. Carries its stderr.
    #[error("encoder exited with status {status}")]
    ExitFailure { status: i32, stderr: String },

    /// The tool could not be launched at all (binary missing, OS failure).
    #[error("failed to run encoder: {0}")]
    Io(#[from] std::io::Error),

    /// The blocking encode task was cancelled or panicked.
    #[error("encoder task was aborted")]
    Aborted,
}

/// Narrow seam around the external encoding tool so the blocking
/// subprocess implementation can be swapped (e.g. for a queue-backed one,
/// or a stub in tests) without touching the request path.
pub trait Encoder: Send + Sync {
    /// Combine a static image and an audio track into a video at `output`,
    /// blocking until the tool finishes. Any pre-existing file at `output`
    /// is overwritten.
    fn encode(&self, image: &Path, audio: &Path, output: &Path) -> Result<(), EncodeError>;
}
