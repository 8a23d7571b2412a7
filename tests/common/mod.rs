//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`] which builds an [`AppState`] over tempdir-backed
//! storage with a stub encoder, and can start the Axum app on a random port
//! for HTTP-level testing.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use tempfile::TempDir;

use stillframe::app::create_app;
use stillframe::config::settings::AppConfig;
use stillframe::infrastructure::encoder::{EncodeError, Encoder};
use stillframe::infrastructure::storage::local::StorageService;
use stillframe::state::AppState;

/// Content the stub encoder writes as its "video".
pub const STUB_VIDEO: &[u8] = b"stub mp4 payload";

/// Encoder that skips ffmpeg entirely and writes a fixed payload.
pub struct StubEncoder;

impl Encoder for StubEncoder {
    fn encode(
        &self,
        _image: &Path,
        _audio: &Path,
        output: &Path,
    ) -> Result<(), EncodeError> {
        std::fs::write(output, STUB_VIDEO)?;
        Ok(())
    }
}

/// Encoder that fails the way ffmpeg does on bad input: non-zero exit with
/// diagnostics on stderr, and nothing written to the output path.
pub struct FailingEncoder {
    pub stderr: String,
}

impl Encoder for FailingEncoder {
    fn encode(
        &self,
        _image: &Path,
        _audio: &Path,
        _output: &Path,
    ) -> Result<(), EncodeError> {
        Err(EncodeError::ExitFailure {
            status: 1,
            stderr: self.stderr.clone(),
        })
    }
}

pub struct TestHarness {
    pub state: AppState,
    pub upload_dir: TempDir,
    pub output_dir: TempDir,
}

impl TestHarness {
    /// Harness with the stub encoder and a roomy body limit.
    pub fn new() -> Self {
        Self::with_encoder(Arc::new(StubEncoder), 50 * 1024 * 1024)
    }

    pub fn with_encoder(encoder: Arc<dyn Encoder>, max_upload_bytes: usize) -> Self {
        let upload_dir = TempDir::new().expect("tempdir");
        let output_dir = TempDir::new().expect("tempdir");

        let config = AppConfig {
            server_host: "127.0.0.1".to_string(),
            server_port: 0,
            upload_dir: upload_dir.path().to_path_buf(),
            output_dir: output_dir.path().to_path_buf(),
            max_upload_bytes,
            ffmpeg_bin: "ffmpeg".to_string(),
            cleanup_retention_hours: 0,
        };

        let storage = StorageService::new(&config);
        storage.ensure_dirs().expect("storage dirs");

        Self {
            state: AppState::new(config, storage, encoder),
            upload_dir,
            output_dir,
        }
    }

    /// Start the app on a random port and return the harness together with
    /// the bound socket address.
    pub async fn with_server() -> (Self, SocketAddr) {
        Self::serve(Self::new()).await
    }

    pub async fn with_server_encoder(
        encoder: Arc<dyn Encoder>,
        max_upload_bytes: usize,
    ) -> (Self, SocketAddr) {
        Self::serve(Self::with_encoder(encoder, max_upload_bytes)).await
    }

    async fn serve(harness: Self) -> (Self, SocketAddr) {
        let app = create_app(harness.state.clone()).await;
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server");
        });
        (harness, addr)
    }

    pub fn upload_file_count(&self) -> usize {
        std::fs::read_dir(self.upload_dir.path()).unwrap().count()
    }

    pub fn output_file_count(&self) -> usize {
        std::fs::read_dir(self.output_dir.path()).unwrap().count()
    }
}

/// Multipart form with well-formed `image` and `audio` parts.
pub fn convert_form(image_name: &str, audio_name: &str) -> reqwest::multipart::Form {
    reqwest::multipart::Form::new()
        .part(
            "image",
            reqwest::multipart::Part::bytes(b"fake png".to_vec()).file_name(image_name.to_string()),
        )
        .part(
            "audio",
            reqwest::multipart::Part::bytes(b"fake mp3".to_vec()).file_name(audio_name.to_string()),
        )
}
