//! Simulated backend fetches.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::DemoConfig;
use crate::error::FetchError;
use crate::ui::ListRow;

/// Result of one fetch, reported back to the controller's owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    pub attempt: u32,
    pub result: Result<Vec<ListRow>, FetchError>,
}

/// Rows a successful fetch for `attempt` returns.
pub fn rows_for(attempt: u32) -> Vec<ListRow> {
    (1..=3 + attempt % 3)
        .map(|i| ListRow::new(format!("{}-{}", attempt, i), format!("Item {}.{}", attempt, i)))
        .collect()
}

/// Wait for the configured latency, then succeed or fail as configured.
pub async fn simulate_fetch(attempt: u32, config: &DemoConfig) -> FetchOutcome {
    tracing::debug!(attempt, latency_ms = config.fetch_latency.as_millis() as u64, "fetch started");
    tokio::time::sleep(config.fetch_latency).await;

    let result = if config.should_fail(attempt) {
        Err(FetchError::SimulatedFailure { attempt })
    } else {
        Ok(rows_for(attempt))
    };
    tracing::debug!(attempt, ok = result.is_ok(), "fetch finished");

    FetchOutcome { attempt, result }
}

/// Fetch tasks spawned on the tokio runtime, each tagged with its attempt.
///
/// Outcomes go to the channel given to [`spawn`](Self::spawn). An aborted
/// task sends nothing.
#[derive(Debug, Default)]
pub struct FetchTasks {
    handles: Vec<(u32, JoinHandle<()>)>,
}

impl FetchTasks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start fetch `attempt` and send its outcome to `tx` when it finishes.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(&mut self, attempt: u32, config: DemoConfig, tx: mpsc::UnboundedSender<FetchOutcome>) {
        self.handles.retain(|(_, handle)| !handle.is_finished());

        let handle = tokio::spawn(async move {
            let outcome = simulate_fetch(attempt, &config).await;
            // The receiver only goes away once the event loop has exited.
            let _ = tx.send(outcome);
        });
        self.handles.push((attempt, handle));
    }

    /// Number of fetches still running.
    pub fn in_flight(&self) -> usize {
        self.handles
            .iter()
            .filter(|(_, handle)| !handle.is_finished())
            .count()
    }

    /// Abort every running fetch. Returns how many were still running.
    pub fn abort_all(&mut self) -> usize {
        let mut aborted = 0;
        for (attempt, handle) in self.handles.drain(..) {
            if !handle.is_finished() {
                handle.abort();
                tracing::debug!(attempt, "fetch aborted");
                aborted += 1;
            }
        }
        aborted
    }
}
