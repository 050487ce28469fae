use dnsbl_tracker_application::ports::LookupQueuePort;
use dnsbl_tracker_application::use_cases::{EnqueueAddressesUseCase, GetIpDetailsUseCase};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub enqueue: Arc<EnqueueAddressesUseCase>,
    pub get_ip_details: Arc<GetIpDetailsUseCase>,
    pub queue: Arc<dyn LookupQueuePort>,
}
