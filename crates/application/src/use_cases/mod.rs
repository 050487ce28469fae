pub mod check_address;
pub mod enqueue_addresses;
pub mod get_ip_details;

pub use check_address::CheckAddressUseCase;
pub use enqueue_addresses::{EnqueueAddressesUseCase, EnqueueOutcome};
pub use get_ip_details::GetIpDetailsUseCase;
