use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::convert::handler::convert,
        crate::modules::download::handler::download,
    ),
    components(
        schemas(
            crate::modules::convert::dto::ConvertResponse,
            crate::common::error::ErrorResponse,
        )
    ),
    tags(
        (name = "Conversion", description = "Image + audio to MP4 conversion"),
        (name = "Download", description = "Generated artifact retrieval")
    )
)]
pub struct ApiDoc;
