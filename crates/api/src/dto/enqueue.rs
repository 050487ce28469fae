use dnsbl_tracker_application::use_cases::EnqueueOutcome;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug)]
pub struct EnqueueRequest {
    pub ips: Vec<String>,
}

#[derive(Serialize, Debug)]
pub struct EnqueueResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub accepted: Vec<String>,
    pub rejected: Vec<String>,
}

impl From<EnqueueOutcome> for EnqueueResponse {
    fn from(outcome: EnqueueOutcome) -> Self {
        let error = (!outcome.all_accepted()).then(|| "queue full, retry".to_string());
        Self {
            error,
            accepted: outcome.accepted,
            rejected: outcome.rejected,
        }
    }
}
