use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ConvertResponse {
    pub success: bool,
    /// Relative URL the finished artifact can be fetched from.
    #[serde(rename = "downloadUrl")]
    pub download_url: String,
}
