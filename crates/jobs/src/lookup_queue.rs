use crate::worker::{self, LookupJob};
use dnsbl_tracker_application::ports::LookupQueuePort;
use dnsbl_tracker_application::use_cases::CheckAddressUseCase;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// How long `stop` waits for the worker before giving up.
pub const STOP_TIMEOUT: Duration = Duration::from_secs(5);

/// Bounded FIFO of pending blocklist lookups with a single background worker.
///
/// - `submit` never waits: a full buffer rejects the address immediately
/// - the worker processes one job at a time in admission order
/// - `stop` lets the in-flight job finish and drops the rest
///
/// Must be created inside a tokio runtime, since the worker is spawned on
/// construction.
pub struct LookupQueue {
    sender: mpsc::Sender<LookupJob>,
    shutdown: CancellationToken,
    worker: Mutex<Option<JoinHandle<()>>>,
    stop_timeout: Duration,
}

impl LookupQueue {
    pub fn new(capacity: usize, processor: Arc<CheckAddressUseCase>) -> Self {
        let capacity = if capacity == 0 {
            warn!("Lookup queue capacity of 0 requested, using 1");
            1
        } else {
            capacity
        };

        let (sender, receiver) = mpsc::channel(capacity);
        let shutdown = CancellationToken::new();
        let handle = tokio::spawn(worker::run(receiver, processor, shutdown.clone()));

        info!(capacity, "Lookup queue started");

        Self {
            sender,
            shutdown,
            worker: Mutex::new(Some(handle)),
            stop_timeout: STOP_TIMEOUT,
        }
    }

    pub fn with_stop_timeout(mut self, timeout: Duration) -> Self {
        self.stop_timeout = timeout;
        self
    }

    pub fn submit(&self, address: &str) -> bool {
        let job = LookupJob {
            address: address.to_string(),
        };

        match self.sender.try_send(job) {
            Ok(()) => {
                info!(ip = %address, "Queued lookup job");
                true
            }
            Err(mpsc::error::TrySendError::Full(_)) => {
                warn!(ip = %address, "Lookup queue busy, unable to queue job");
                false
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                error!(ip = %address, "Lookup queue stopped, unable to queue job");
                false
            }
        }
    }

    /// Signal the worker to exit after its current job and wait for it.
    ///
    /// Returns false if the worker is still running when the stop timeout
    /// elapses. Meant to be called once during shutdown; later calls return
    /// true immediately.
    pub async fn stop(&self) -> bool {
        info!("Stopping lookup queue");
        self.shutdown.cancel();

        let Some(mut handle) = self.lock_worker().take() else {
            return true;
        };

        info!("Waiting for lookup queue to stop");
        match tokio::time::timeout(self.stop_timeout, &mut handle).await {
            Ok(Ok(())) => {
                info!("Lookup queue stopped");
                true
            }
            Ok(Err(e)) => {
                error!(error = %e, "Lookup worker terminated abnormally");
                false
            }
            Err(_) => {
                warn!(
                    timeout_ms = self.stop_timeout.as_millis() as u64,
                    "Timed out waiting for lookup queue to stop"
                );
                *self.lock_worker() = Some(handle);
                false
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.lock_worker()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn capacity(&self) -> usize {
        self.sender.max_capacity()
    }

    pub fn pending(&self) -> usize {
        self.sender.max_capacity() - self.sender.capacity()
    }

    fn lock_worker(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.worker
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl LookupQueuePort for LookupQueue {
    fn submit(&self, address: &str) -> bool {
        LookupQueue::submit(self, address)
    }

    fn is_running(&self) -> bool {
        LookupQueue::is_running(self)
    }

    fn capacity(&self) -> usize {
        LookupQueue::capacity(self)
    }

    fn pending(&self) -> usize {
        LookupQueue::pending(self)
    }
}
