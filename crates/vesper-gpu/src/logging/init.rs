use std::sync::Once;

/// Logger configuration.
///
/// `filter` uses the `env_logger` directive syntax, e.g. "info" or
/// "vesper_gpu=debug,wgpu_core=warn". When unset, `RUST_LOG` is consulted
/// and the fallback level is info.
#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    pub filter: Option<String>,
}

impl LogConfig {
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self {
            filter: Some(filter.into()),
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger.
///
/// Idempotent; only the first call has an effect. Call it at the top of
/// `main`, before any device initialization.
pub fn init_logging(config: LogConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_does_not_panic() {
        // env_logger::Builder::init panics if a logger is already set; the
        // Once guard must swallow the second call.
        init_logging(LogConfig::with_filter("warn"));
        init_logging(LogConfig::default());
    }
}
