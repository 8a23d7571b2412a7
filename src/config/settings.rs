use std::path::PathBuf;

use serde::Deserialize;
use crate::config::env::{self, EnvKey};

/// Immutable process configuration, built once at startup and carried in
/// [`crate::state::AppState`].
#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    pub upload_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Hard cap on the request body, in bytes.
    pub max_upload_bytes: usize,
    pub ffmpeg_bin: String,
    /// Files older than this are removed by the janitor. Zero disables it.
    pub cleanup_retention_hours: u64,
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            server_host: env::get_or(EnvKey::ServerHost, "0.0.0.0"),
            server_port: env::get_parsed(EnvKey::ServerPort, 8080),
            upload_dir: PathBuf::from(env::get_or(EnvKey::UploadDir, "/tmp/uploads")),
            output_dir: PathBuf::from(env::get_or(EnvKey::OutputDir, "/tmp/outputs")),
            max_upload_bytes: env::get_parsed(EnvKey::MaxUploadMb, 50) * 1024 * 1024,
            ffmpeg_bin: env::get_or(EnvKey::FfmpegBin, "ffmpeg"),
            cleanup_retention_hours: env::get_parsed(EnvKey::CleanupRetentionHours, 24),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}
