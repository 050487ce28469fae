mod blocklist_lookup;
mod blocklist_record_repository;
mod lookup_queue;

pub use blocklist_lookup::BlocklistLookup;
pub use blocklist_record_repository::BlocklistRecordRepository;
pub use lookup_queue::LookupQueuePort;
