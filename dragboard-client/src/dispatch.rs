//! Fire-and-forget persistence of committed drags

use std::sync::Arc;

use dragboard_kanban::{BoardChange, PersistenceSink};
use tokio::runtime::Handle;
use tokio_util::task::TaskTracker;
use tracing::{debug, warn};

use crate::api::BoardApi;
use crate::error::{ApiError, Result};
use crate::types::{ColumnUpdate, TaskUpdate};

/// Sends each [`BoardChange`] as its own PUT on the tokio runtime.
///
/// Requests are neither queued nor retried, so two changes may land in any
/// order. Failures are logged and dropped; the in-memory board keeps the
/// dragged layout either way.
pub struct PersistenceDispatcher {
    api: Arc<dyn BoardApi>,
    handle: Handle,
    tracker: TaskTracker,
}

impl std::fmt::Debug for PersistenceDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistenceDispatcher")
            .field("in_flight", &self.tracker.len())
            .finish_non_exhaustive()
    }
}

impl PersistenceDispatcher {
    /// Create a dispatcher spawning onto the current runtime.
    pub fn new(api: Arc<dyn BoardApi>) -> Result<Self> {
        let handle = Handle::try_current().map_err(|e| ApiError::Runtime(e.to_string()))?;
        Ok(Self::with_handle(api, handle))
    }

    pub fn with_handle(api: Arc<dyn BoardApi>, handle: Handle) -> Self {
        Self {
            api,
            handle,
            tracker: TaskTracker::new(),
        }
    }

    /// Wait for every request spawned so far. New submissions are still
    /// accepted while waiting.
    pub async fn wait_idle(&self) {
        self.tracker.close();
        self.tracker.wait().await;
        self.tracker.reopen();
    }
}

impl PersistenceSink for PersistenceDispatcher {
    fn submit(&self, change: BoardChange) {
        let api = Arc::clone(&self.api);
        self.tracker.spawn_on(persist(api, change), &self.handle);
    }
}

async fn persist(api: Arc<dyn BoardApi>, change: BoardChange) {
    match change {
        BoardChange::Column(column) => {
            match api.update_column(column.id, &ColumnUpdate::from(&column)).await {
                Ok(_) => debug!(position = column.position, "Persisted column {}", column.id),
                Err(e) => warn!("Failed to persist column {}: {}", column.id, e),
            }
        }
        BoardChange::Task(task) => {
            match api.update_task(task.id, &TaskUpdate::from(&task)).await {
                Ok(_) => debug!(
                    column = %task.column,
                    position = task.position,
                    "Persisted task {}",
                    task.id
                ),
                Err(e) => warn!("Failed to persist task {}: {}", task.id, e),
            }
        }
    }
}
