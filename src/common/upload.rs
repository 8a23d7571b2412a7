use axum::body::Bytes;
use axum::extract::multipart::Field;

use crate::common::error::ApiError;

/// One fully buffered multipart file part. Buffering both parts before any
/// disk write keeps validation failures free of side effects; the request
/// body cap bounds the memory used.
pub struct UploadedPart {
    pub file_name: String,
    pub data: Bytes,
}

/// Read a file part into memory, rejecting parts where the client selected
/// no file (browsers send the part with an empty filename).
pub async fn read_part(field: Field<'_>) -> Result<UploadedPart, ApiError> {
    let file_name = field.file_name().unwrap_or_default().to_string();
    if file_name.is_empty() {
        return Err(ApiError::Validation("no file selected".to_string()));
    }

    let data = field.bytes().await.map_err(ApiError::from_multipart)?;

    Ok(UploadedPart { file_name, data })
}

/// Reduce a client-supplied filename to something safe to join onto the
/// upload directory: strip any path components (both separator styles),
/// replace everything outside `[A-Za-z0-9._-]`, and trim dots so the
/// result can never be `..` or hidden.
pub fn sanitize_filename(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let cleaned = cleaned.trim_matches('.');
    if cleaned.is_empty() {
        "file".to_string()
    } else {
        cleaned.to_string()
    }
}
