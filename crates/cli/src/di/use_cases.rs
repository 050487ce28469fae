use super::Repositories;
use dnsbl_tracker_application::ports::BlocklistLookup;
use dnsbl_tracker_application::use_cases::{
    CheckAddressUseCase, EnqueueAddressesUseCase, GetIpDetailsUseCase,
};
use dnsbl_tracker_domain::Config;
use dnsbl_tracker_jobs::LookupQueue;
use std::sync::Arc;

pub struct UseCases {
    pub enqueue: Arc<EnqueueAddressesUseCase>,
    pub get_ip_details: Arc<GetIpDetailsUseCase>,
    pub queue: Arc<LookupQueue>,
}

impl UseCases {
    /// Spawns the lookup worker, so this must run inside the runtime.
    pub fn new(config: &Config, repos: &Repositories, lookup: Arc<dyn BlocklistLookup>) -> Self {
        let check_address = Arc::new(CheckAddressUseCase::new(
            lookup,
            repos.blocklist_record.clone(),
        ));
        let queue = Arc::new(LookupQueue::new(
            config.job_queue.queue_length,
            check_address,
        ));

        Self {
            enqueue: Arc::new(EnqueueAddressesUseCase::new(queue.clone())),
            get_ip_details: Arc::new(GetIpDetailsUseCase::new(repos.blocklist_record.clone())),
            queue,
        }
    }
}
