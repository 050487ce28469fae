pub mod enqueue;
pub mod health;
pub mod ip_details;

pub use enqueue::enqueue;
pub use health::{health_check, readiness_check};
pub use ip_details::get_ip_details;
