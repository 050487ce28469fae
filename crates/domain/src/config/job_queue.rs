use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JobQueueConfig {
    /// Number of lookups that may wait in the buffer before submissions are
    /// rejected.
    #[serde(default = "default_queue_length")]
    pub queue_length: usize,
}

impl Default for JobQueueConfig {
    fn default() -> Self {
        Self {
            queue_length: default_queue_length(),
        }
    }
}

fn default_queue_length() -> usize {
    100
}
