pub mod service;
pub mod task;

pub use service::{SnapshotService, TickReport};
pub use task::{SNAPSHOT_SCHEDULE, schedule_snapshots};
