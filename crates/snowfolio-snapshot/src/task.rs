use anyhow::Result;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::service::SnapshotService;

/// Three times daily: 01:00:30, 09:00:30 and 17:00:30.
pub const SNAPSHOT_SCHEDULE: &str = "30 0 1,9,17 * * *";

/// Snapshot wall-clock times are anchored to the US east coast.
pub const SNAPSHOT_TIMEZONE: chrono_tz::Tz = chrono_tz::America::New_York;

/// Register the snapshot job and start the scheduler.
///
/// The returned scheduler handle must be kept alive for the lifetime of the
/// process; shut it down on exit.
pub async fn schedule_snapshots(service: SnapshotService) -> Result<JobScheduler> {
    let scheduler = JobScheduler::new()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create job scheduler: {e}"))?;

    let job = Job::new_async_tz(SNAPSHOT_SCHEDULE, SNAPSHOT_TIMEZONE, move |_uuid, _lock| {
        let service = service.clone();
        Box::pin(async move {
            if let Err(e) = service.run_tick().await {
                tracing::error!(error = %e, "🔴 snapshot tick failed");
            }
        })
    })
    .map_err(|e| anyhow::anyhow!("Failed to create snapshot job: {e}"))?;

    scheduler
        .add(job)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to add snapshot job to scheduler: {e}"))?;
    scheduler
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to start scheduler: {e}"))?;

    tracing::info!(schedule = SNAPSHOT_SCHEDULE, "📸 Snapshot job scheduled");
    Ok(scheduler)
}
