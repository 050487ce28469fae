use dnsbl_tracker_application::use_cases::CheckAddressUseCase;
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

pub(crate) struct LookupJob {
    pub address: String,
}

/// Drains the queue one job at a time until the token is cancelled or every
/// sender is gone.
///
/// The token is polled first on every iteration, so once a stop is observed
/// no further job is started. Jobs still buffered at that point are dropped.
pub(crate) async fn run(
    mut receiver: mpsc::Receiver<LookupJob>,
    processor: Arc<CheckAddressUseCase>,
    shutdown: CancellationToken,
) {
    info!("Lookup worker started");

    loop {
        tokio::select! {
            biased;
            _ = shutdown.cancelled() => {
                info!("Lookup worker: stop requested");
                break;
            }
            maybe_job = receiver.recv() => {
                match maybe_job {
                    Some(job) => process(&processor, job).await,
                    None => {
                        info!("Lookup worker: queue closed");
                        break;
                    }
                }
            }
        }
    }

    receiver.close();
    let mut abandoned = 0usize;
    while receiver.try_recv().is_ok() {
        abandoned += 1;
    }
    if abandoned > 0 {
        warn!(abandoned, "Dropping queued lookup jobs on shutdown");
    }

    info!("Lookup worker stopped");
}

async fn process(processor: &CheckAddressUseCase, job: LookupJob) {
    debug!(ip = %job.address, "Lookup job started");

    let outcome = AssertUnwindSafe(processor.execute(&job.address))
        .catch_unwind()
        .await;

    match outcome {
        Ok(Ok(record)) => info!(
            ip = %job.address,
            response_code = %record.response_code,
            "Lookup job completed"
        ),
        Ok(Err(e)) => error!(ip = %job.address, error = %e, "Lookup job failed"),
        Err(_) => error!(ip = %job.address, "Lookup job panicked"),
    }
}
