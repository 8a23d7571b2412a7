use std::env;
use std::str::FromStr;

pub enum EnvKey {
    ServerHost,
    ServerPort,
    UploadDir,
    OutputDir,
    MaxUploadMb,
    FfmpegBin,
    CleanupRetentionHours,
}

impl EnvKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::ServerHost => "APP_HOST",
            EnvKey::ServerPort => "APP_PORT",
            EnvKey::UploadDir => "UPLOAD_DIR",
            EnvKey::OutputDir => "OUTPUT_DIR",
            EnvKey::MaxUploadMb => "MAX_UPLOAD_MB",
            EnvKey::FfmpegBin => "FFMPEG_BIN",
            EnvKey::CleanupRetentionHours => "CLEANUP_RETENTION_HOURS",
        }
    }
}

pub fn get(key: EnvKey) -> Result<String, env::VarError> {
    env::var(key.as_str())
}

pub fn get_or(key: EnvKey, default: &str) -> String {
    env::var(key.as_str()).unwrap_or_else(|_| default.to_string())
}

pub fn get_parsed<T: FromStr>(key: EnvKey, default: T) -> T {
    match get(key) {
        Ok(val) => val.parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}
