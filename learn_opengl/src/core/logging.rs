//! Logger setup for the samples.
//!
//! The library only talks to the `log` facade. Binaries call [init_logging]
//! at the top of `main` to get `env_logger` output on stderr.
use std::sync::Once;

/// Filter used when neither the config nor `RUST_LOG` choose one.
/// Winit reports every pumped event below `warn`, which floods a 60 fps loop.
pub const DEFAULT_FILTER: &str = "info,winit=warn";

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` directives, such as "debug" or "learn_opengl=trace"
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    pub fn with_filter(mut self, filter: &str) -> Self {
        self.env_filter = Some(filter.to_owned());
        self
    }

    /// Pick the filter directives: the config wins over `RUST_LOG`
    pub fn resolve_filter(&self, rust_log: Option<String>) -> String {
        self.env_filter
            .clone()
            .or(rust_log)
            .unwrap_or_else(|| DEFAULT_FILTER.to_owned())
    }
}

static INIT: Once = Once::new();

/// Install `env_logger` as the global logger. Only the first call does anything.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = config.resolve_filter(std::env::var("RUST_LOG").ok());

        let mut builder = env_logger::Builder::new();
        builder
            .parse_filters(&filter)
            .write_style(config.write_style)
            .format_timestamp_millis();

        if builder.try_init().is_err() {
            log::debug!("A global logger was already set, keeping it");
            return;
        }

        log::debug!("Logging initialized with filter '{filter}'");
    });
}
