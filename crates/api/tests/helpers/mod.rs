mod test_app;

pub use stub_lookup::StubLookup;
pub use test_app::*;
