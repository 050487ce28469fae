use anyhow::Context;
use dnsbl_tracker_domain::Config;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` takes precedence over the configured level. With
/// `[logging] file` set, output is appended to that file instead of stdout.
pub fn init_logging(config: &Config) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    let registry = tracing_subscriber::registry().with(env_filter);

    match &config.logging.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path))?;

            registry
                .with(
                    fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_target(true)
                        .with_ansi(false),
                )
                .init();
        }
        None => registry.with(fmt::layer().with_target(true)).init(),
    }

    Ok(())
}
