//! Background worker for click counting and analytics.
//!
//! Handlers and services submit [`ClickTask`]s through a [`ClickDispatcher`];
//! [`run_click_worker`] drains the channel and runs each task against the
//! repositories with bounded concurrency. Failures are logged and dropped.

use std::sync::Arc;

use tokio::sync::{Semaphore, mpsc, oneshot};
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::domain::click_event::{ClickEvent, ClickTask};
use crate::domain::repositories::{ClickRepository, UrlRepository};

/// Cloneable handle for submitting click tasks.
///
/// Submission never waits: when the queue is full or the worker is gone the
/// task is dropped with a warning.
#[derive(Debug, Clone)]
pub struct ClickDispatcher {
    sender: mpsc::Sender<ClickTask>,
}

impl ClickDispatcher {
    pub fn new(sender: mpsc::Sender<ClickTask>) -> Self {
        Self { sender }
    }

    /// Creates a dispatcher together with the receiver to pass to
    /// [`run_click_worker`].
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<ClickTask>) {
        let (sender, receiver) = mpsc::channel(capacity);
        (Self::new(sender), receiver)
    }

    /// Schedules `clicks = clicks + 1` for a resolved code.
    pub fn increment(&self, short_code: &str) {
        self.submit(ClickTask::Increment {
            short_code: short_code.to_string(),
        });
    }

    /// Schedules an analytics row for a redirect.
    pub fn record(&self, event: ClickEvent) {
        self.submit(ClickTask::Record(event));
    }

    /// Waits until every task submitted before this call has completed.
    ///
    /// Returns immediately if the worker is not running.
    pub async fn flush(&self) {
        let (done_tx, done_rx) = oneshot::channel();

        if self.sender.send(ClickTask::Flush(done_tx)).await.is_err() {
            return;
        }

        let _ = done_rx.await;
    }

    /// Returns true once the worker has shut down.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }

    fn submit(&self, task: ClickTask) {
        if let Err(e) = self.sender.try_send(task) {
            warn!(error = %e, "dropping click task");
        }
    }
}

/// Runs the click worker until every [`ClickDispatcher`] is dropped.
///
/// At most `concurrency` tasks touch the database at once. Tasks still in
/// flight when the channel closes are awaited before returning.
pub async fn run_click_worker<U, C>(
    mut rx: mpsc::Receiver<ClickTask>,
    url_repository: Arc<U>,
    click_repository: Arc<C>,
    concurrency: usize,
) where
    U: UrlRepository + ?Sized + 'static,
    C: ClickRepository + ?Sized + 'static,
{
    let permits = Arc::new(Semaphore::new(concurrency.max(1)));
    let mut in_flight = JoinSet::new();

    while let Some(task) = rx.recv().await {
        while in_flight.try_join_next().is_some() {}

        let work = match task {
            ClickTask::Flush(done) => {
                while in_flight.join_next().await.is_some() {}
                let _ = done.send(());
                continue;
            }
            ClickTask::Increment { short_code } => Work::Increment(short_code),
            ClickTask::Record(event) => Work::Record(event),
        };

        let Ok(permit) = permits.clone().acquire_owned().await else {
            break;
        };
        let url_repository = url_repository.clone();
        let click_repository = click_repository.clone();

        in_flight.spawn(async move {
            execute(work, url_repository.as_ref(), click_repository.as_ref()).await;
            drop(permit);
        });
    }

    while in_flight.join_next().await.is_some() {}
    debug!("click worker stopped");
}

/// A task that touches the database. `Flush` never gets this far.
enum Work {
    Increment(String),
    Record(ClickEvent),
}

async fn execute<U, C>(work: Work, url_repository: &U, click_repository: &C)
where
    U: UrlRepository + ?Sized,
    C: ClickRepository + ?Sized,
{
    match work {
        Work::Increment(short_code) => {
            if let Err(e) = url_repository.increment_clicks(&short_code).await {
                warn!(error = %e, short_code, "failed to increment click counter");
            }
        }
        Work::Record(event) => {
            let short_code = event.short_code.clone();
            if let Err(e) = click_repository.record(event.into()).await {
                warn!(error = %e, short_code, "failed to record click");
            }
        }
    }
}
