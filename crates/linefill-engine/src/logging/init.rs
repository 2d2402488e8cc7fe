use std::sync::Once;

/// Logger configuration.
///
/// Filters use the `env_logger` syntax (e.g. "warn,linefill_engine=debug").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Always wins, even over `RUST_LOG`.
    pub filter: Option<String>,
    /// Used when neither `filter` nor a non-empty `RUST_LOG` is set.
    pub fallback_filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::with_fallback("info")
    }
}

impl LoggingConfig {
    pub fn with_fallback(fallback_filter: impl Into<String>) -> Self {
        Self { filter: None, fallback_filter: fallback_filter.into() }
    }

    /// The filter the logger will be built with, given the value of `RUST_LOG`.
    pub fn effective_filter<'a>(&'a self, rust_log: Option<&'a str>) -> &'a str {
        self.filter
            .as_deref()
            .or(rust_log.filter(|f| !f.trim().is_empty()))
            .unwrap_or(self.fallback_filter.as_str())
    }
}

static INIT: Once = Once::new();

/// Installs the `env_logger` backend on stderr, once.
///
/// Later calls are ignored, as is a logger someone else already installed.
/// `RUST_LOG_STYLE` (auto/always/never) controls coloring.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let rust_log = std::env::var("RUST_LOG").ok();
        let filter = config.effective_filter(rust_log.as_deref());

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(filter).format_timestamp(None);
        if let Ok(style) = std::env::var("RUST_LOG_STYLE") {
            builder.parse_write_style(&style);
        }

        if builder.try_init().is_ok() {
            log::debug!("logging initialized with filter {filter:?}");
        }
    });
}
