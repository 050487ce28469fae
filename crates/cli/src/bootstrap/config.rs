use dnsbl_tracker_domain::{CliOverrides, Config};

/// Load and validate configuration. Runs before logging is set up, so
/// problems are reported through the returned error only.
pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}
