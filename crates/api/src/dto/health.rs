use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub queue_capacity: usize,
    pub queue_pending: usize,
}
