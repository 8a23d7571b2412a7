use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use tracing::{debug, error};

use super::{EncodeError, Encoder};
use crate::config::settings::AppConfig;

/// Invokes the `ffmpeg` binary with a fixed argument list: the image is
/// looped as the video source, the audio duration ends the encode.
pub struct FfmpegEncoder {
    binary: String,
}

impl FfmpegEncoder {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            binary: config.ffmpeg_bin.clone(),
        }
    }

    /// Encoding parameters are not configurable per request: H.264 +
    /// yuv420p for player compatibility, AAC at 192 kb/s, `-shortest` to
    /// stop at the audio's end, `-y` to overwrite the output.
    fn build_args(image: &Path, audio: &Path, output: &Path) -> Vec<OsString> {
        vec![
            "-loop".into(),
            "1".into(),
            "-i".into(),
            image.into(),
            "-i".into(),
            audio.into(),
            "-c:v".into(),
            "libx264".into(),
            "-pix_fmt".into(),
            "yuv420p".into(),
            "-c:a".into(),
            "aac".into(),
            "-b:a".into(),
            "192k".into(),
            "-shortest".into(),
            "-y".into(),
            output.into(),
        ]
    }
}

impl Encoder for FfmpegEncoder {
    fn encode(&self, image: &Path, audio: &Path, output: &Path) -> Result<(), EncodeError> {
        debug!(
            image = %image.display(),
            audio = %audio.display(),
            output = %output.display(),
            "Running ffmpeg"
        );

        let result = Command::new(&self.binary)
            .args(Self::build_args(image, audio, output))
            .output()?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr).into_owned();
            error!(status = ?result.status.code(), "ffmpeg failed: {}", stderr);
            return Err(EncodeError::ExitFailure {
                status: result.status.code().unwrap_or(-1),
                stderr,
            });
        }

        Ok(())
    }
}
