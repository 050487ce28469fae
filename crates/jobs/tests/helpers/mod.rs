mod mock_repositories;

pub use mock_repositories::*;

use std::future::Future;
use tokio::time::{sleep, timeout, Duration};

/// Polls `check` until it returns true or two seconds pass.
pub async fn wait_until<F, Fut>(mut check: F) -> bool
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    timeout(Duration::from_secs(2), async {
        loop {
            if check().await {
                return;
            }
            sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .is_ok()
}
