mod lookup;
mod repositories;
mod use_cases;

pub use lookup::build_lookup;
pub use repositories::Repositories;
pub use use_cases::UseCases;
