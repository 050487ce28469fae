pub mod enqueue;
pub mod health;
pub mod ip_details;

pub use enqueue::{EnqueueRequest, EnqueueResponse};
pub use health::ReadyResponse;
pub use ip_details::IpDetailsResponse;
