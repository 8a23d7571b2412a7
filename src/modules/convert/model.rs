use uuid::Uuid;

use crate::common::upload::sanitize_filename;

/// One conversion request, identified by a v4 UUID that namespaces every
/// file belonging to it. The job lives only for the duration of the
/// request; the output file on disk is all that survives.
#[derive(Debug, Clone)]
pub struct ConversionJob {
    pub id: Uuid,
}

impl ConversionJob {
    pub fn new() -> Self {
        Self { id: Uuid::new_v4() }
    }

    /// Storage key for an input file: `<job-id>_<sanitized-name>`.
    pub fn upload_key(&self, original_name: &str) -> String {
        format!("{}_{}", self.id, sanitize_filename(original_name))
    }

    pub fn output_filename(&self) -> String {
        format!("output_{}.mp4", self.id)
    }
}

impl Default for ConversionJob {
    fn default() -> Self {
        Self::new()
    }
}
