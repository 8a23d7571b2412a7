use axum::{
    Json,
    extract::{Multipart, State},
};

use super::dto::ConvertResponse;
use super::service::ConversionService;
use crate::common::error::ApiError;
use crate::common::upload::{self, UploadedPart};
use crate::state::AppState;

/// Convert an image and an audio track into a single MP4.
///
/// Expects multipart parts named `image` and `audio`; both are validated
/// before anything touches the disk.
#[utoipa::path(
    post,
    path = "/convert",
    request_body(content = String, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Conversion successful", body = ConvertResponse),
        (status = 400, description = "Missing or empty file part", body = crate::common::error::ErrorResponse),
        (status = 413, description = "Request body too large", body = crate::common::error::ErrorResponse),
        (status = 500, description = "Storage or encoder failure", body = crate::common::error::ErrorResponse)
    ),
    tag = "Conversion"
)]
pub async fn convert(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ConvertResponse>, ApiError> {
    let mut image: Option<UploadedPart> = None;
    let mut audio: Option<UploadedPart> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(ApiError::from_multipart)?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "image" => image = Some(upload::read_part(field).await?),
            "audio" => audio = Some(upload::read_part(field).await?),
            _ => {}
        }
    }

    let image = image.ok_or_else(|| ApiError::Validation("missing file part: image".to_string()))?;
    let audio = audio.ok_or_else(|| ApiError::Validation("missing file part: audio".to_string()))?;

    let response = ConversionService::convert(&state, image, audio).await?;
    Ok(Json(response))
}
