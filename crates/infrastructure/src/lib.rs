pub mod database;
pub mod dnsbl;
pub mod repositories;
