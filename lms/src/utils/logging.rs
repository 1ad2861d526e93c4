use tracing_subscriber::EnvFilter;
use crate::core::domain::LogFormat;

const DEFAULT_FILTER: &str = "lending_desk=info,desk=info";

// installs the global subscriber, RUST_LOG overrides the default filter
pub fn setup_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    match format {
        LogFormat::Plain => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                // disable printing the name of the module in every log line.
                .with_target(false)
                .with_ansi(false)
                .json()
                .init();
        }
    }
}
