//! Observability (structured logging)
//!
//! Log events go to stderr so they never interleave with generated output or
//! the numbered table menu on stdout.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::{LogFormat, LoggingSettings};

/// Initialize logging
///
/// `RUST_LOG` takes precedence over the configured filter. Calling this more
/// than once is harmless; only the first subscriber is installed.
///
/// # Example
///
/// ```rust,no_run
/// use aidkit::config::LoggingSettings;
/// use aidkit::observability;
///
/// observability::init(&LoggingSettings::default());
/// tracing::info!("generator started");
/// ```
pub fn init(settings: &LoggingSettings) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = match settings.format {
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .pretty()
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Compact => tracing_subscriber::fmt::layer()
            .compact()
            .with_target(false)
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed(),
    };

    if tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("Global subscriber already installed");
    }
}
