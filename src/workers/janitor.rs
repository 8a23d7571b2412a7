use std::path::Path;
use std::time::Duration;

use tracing::{error, info};

use crate::state::AppState;

/// How often the janitor sweeps the storage directories.
const SWEEP_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Background cleanup of the upload and output areas. The request path
/// never deletes anything; this task reaps files purely by age, coupled to
/// the rest of the service only through the shared directories.
pub async fn start_janitor_worker(state: AppState) {
    let retention_hours = state.config.cleanup_retention_hours;
    if retention_hours == 0 {
        info!("🧹 Janitor disabled (CLEANUP_RETENTION_HOURS=0)");
        return;
    }
    let retention = Duration::from_secs(retention_hours * 60 * 60);

    info!("🧹 Starting Janitor Worker (retention: {}h)...", retention_hours);

    let mut ticker = tokio::time::interval(SWEEP_INTERVAL);
    loop {
        ticker.tick().await;

        for dir in [&state.config.upload_dir, &state.config.output_dir] {
            match sweep_dir(dir, retention).await {
                Ok(0) => {}
                Ok(removed) => info!("🧹 Removed {} stale file(s) from {}", removed, dir.display()),
                Err(e) => error!("Janitor sweep failed for {}: {}", dir.display(), e),
            }
        }
    }
}

/// Delete regular files in `dir` whose last modification is older than
/// `retention`. Subdirectories are left alone.
async fn sweep_dir(dir: &Path, retention: Duration) -> anyhow::Result<u32> {
    let mut removed = 0;
    let mut entries = tokio::fs::read_dir(dir).await?;

    while let Some(entry) = entries.next_entry().await? {
        let meta = entry.metadata().await?;
        if !meta.is_file() {
            continue;
        }

        let age = meta
            .modified()?
            .elapsed()
            .unwrap_or_default();
        if age > retention {
            tokio::fs::remove_file(entry.path()).await?;
            removed += 1;
        }
    }

    Ok(removed)
}
