use axum::{
    body::Body,
    extract::{Path, State},
    http::header,
    response::Response,
};
use tokio_util::io::ReaderStream;

use crate::common::error::ApiError;
use crate::state::AppState;

/// Name presented to the end user, regardless of the internal filename.
const DOWNLOAD_NAME: &str = "video_generato.mp4";

/// Stream a previously generated artifact as an attachment.
///
/// Existence is checked directly against the output directory; there is no
/// index and no authorization beyond knowing the filename.
#[utoipa::path(
    get,
    path = "/download/{filename}",
    params(
        ("filename" = String, Path, description = "Artifact filename returned by /convert")
    ),
    responses(
        (status = 200, description = "Artifact stream", content_type = "video/mp4"),
        (status = 404, description = "No artifact with that name", body = crate::common::error::ErrorResponse)
    ),
    tag = "Download"
)]
pub async fn download(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, ApiError> {
    let path = state
        .storage
        .resolve_artifact(&filename)
        .ok_or_else(|| ApiError::NotFound("file not found".to_string()))?;

    let file = tokio::fs::File::open(&path)
        .await
        .map_err(|_| ApiError::NotFound("file not found".to_string()))?;

    let content_type = mime_guess::from_path(&path).first_or_octet_stream();
    let content_length = file.metadata().await.ok().map(|m| m.len());

    let mut builder = Response::builder()
        .header(header::CONTENT_TYPE, content_type.as_ref())
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{DOWNLOAD_NAME}\""),
        );
    if let Some(len) = content_length {
        builder = builder.header(header::CONTENT_LENGTH, len);
    }

    let stream = ReaderStream::new(file);
    builder
        .body(Body::from_stream(stream))
        .map_err(|e| ApiError::Storage(std::io::Error::other(e)))
}
