use crate::ports::LookupQueuePort;
use dnsbl_tracker_domain::{parse_ipv4, DomainError};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnqueueOutcome {
    pub accepted: Vec<String>,
    pub rejected: Vec<String>,
}

impl EnqueueOutcome {
    pub fn all_accepted(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Use case: validate a batch of addresses and hand each one to the queue.
pub struct EnqueueAddressesUseCase {
    queue: Arc<dyn LookupQueuePort>,
}

impl EnqueueAddressesUseCase {
    pub fn new(queue: Arc<dyn LookupQueuePort>) -> Self {
        Self { queue }
    }

    /// Every address is validated before any is submitted, so an invalid
    /// entry leaves the queue untouched.
    pub fn execute(&self, addresses: &[String]) -> Result<EnqueueOutcome, DomainError> {
        let normalized = addresses
            .iter()
            .map(|raw| parse_ipv4(raw).map(|ip| ip.to_string()))
            .collect::<Result<Vec<_>, _>>()?;

        let mut outcome = EnqueueOutcome::default();
        for address in normalized {
            if self.queue.submit(&address) {
                outcome.accepted.push(address);
            } else {
                outcome.rejected.push(address);
            }
        }

        if outcome.all_accepted() {
            info!(accepted = outcome.accepted.len(), "Addresses queued for lookup");
        } else {
            warn!(
                accepted = outcome.accepted.len(),
                rejected = outcome.rejected.len(),
                "Lookup queue full, some addresses rejected"
            );
        }

        Ok(outcome)
    }
}
