pub mod blocklist_record_repository;
mod blocklist_record_row_mapper;

pub use blocklist_record_repository::SqliteBlocklistRecordRepository;
