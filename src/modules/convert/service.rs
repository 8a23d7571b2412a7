use std::sync::Arc;

use tracing::info;

use super::dto::ConvertResponse;
use super::model::ConversionJob;
use crate::common::error::ApiError;
use crate::common::upload::UploadedPart;
use crate::infrastructure::encoder::EncodeError;
use crate::state::AppState;

pub struct ConversionService;

impl ConversionService {
    /// The full request-to-artifact pipeline: persist both inputs under
    /// the job id, run the encoder to completion, report the download URL.
    pub async fn convert(
        state: &AppState,
        image: UploadedPart,
        audio: UploadedPart,
    ) -> Result<ConvertResponse, ApiError> {
        let job = ConversionJob::new();
        info!(
            job_id = %job.id,
            image = %image.file_name,
            audio = %audio.file_name,
            "Starting conversion"
        );

        let image_path = state
            .storage
            .store_upload(&job.upload_key(&image.file_name), &image.data)
            .await?;
        let audio_path = state
            .storage
            .store_upload(&job.upload_key(&audio.file_name), &audio.data)
            .await?;

        let output_name = job.output_filename();
        let output_path = state.storage.output_path(&output_name);

        // The encode blocks for the full duration of the external process;
        // run it on the blocking pool so the runtime keeps serving.
        let encoder = Arc::clone(&state.encoder);
        tokio::task::spawn_blocking(move || encoder.encode(&image_path, &audio_path, &output_path))
            .await
            .map_err(|_| EncodeError::Aborted)??;

        info!(job_id = %job.id, output = %output_name, "Conversion finished");

        Ok(ConvertResponse {
            success: true,
            download_url: format!("/download/{output_name}"),
        })
    }
}
