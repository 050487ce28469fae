pub mod shutdown;
pub mod web;

pub use shutdown::create_shutdown_token;
pub use web::start_web_server;
