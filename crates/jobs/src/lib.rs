pub mod lookup_queue;
mod worker;

pub use lookup_queue::{LookupQueue, STOP_TIMEOUT};
