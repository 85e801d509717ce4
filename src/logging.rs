//! Logger setup: `console_log` in the browser, `env_logger` on the host.

use std::str::FromStr;
use std::sync::Once;

use log::LevelFilter;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "gl_demos=debug,warn"). The browser console logger has no per-module
/// filtering, so it runs at `level`: the most verbose level the filter names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub level: LevelFilter,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { env_filter: None, level: LevelFilter::Info }
    }
}

impl LoggingConfig {
    /// Builds a config from an `env_logger` filter string such as the value of
    /// `RUST_LOG` or a canvas' `data-log-level`.
    pub fn from_filter(filter: Option<&str>) -> Self {
        let Some(filter) = filter.map(str::trim).filter(|f| !f.is_empty()) else {
            return Self::default();
        };
        let level = filter
            .split(',')
            .filter_map(directive_level)
            .max()
            .unwrap_or(LevelFilter::Info);
        Self { env_filter: Some(filter.to_string()), level }
    }
}

/// Level enabled by one `env_logger` directive: `level`, `module=level`, or a
/// bare `module` (everything from that module).
fn directive_level(directive: &str) -> Option<LevelFilter> {
    let directive = directive.split('/').next()?.trim();
    if directive.is_empty() {
        return None;
    }
    match directive.split_once('=') {
        Some((_, level)) => LevelFilter::from_str(level.trim()).ok(),
        None => Some(LevelFilter::from_str(directive).unwrap_or(LevelFilter::Trace)),
    }
}

static INIT: Once = Once::new();

/// Installs the global logger once; later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        install(config);
        log::debug!("logging initialized");
    });
}

#[cfg(target_arch = "wasm32")]
fn install(config: LoggingConfig) {
    console_error_panic_hook::set_once();
    if let Some(level) = config.level.to_level() {
        if console_log::init_with_level(level).is_err() {
            web_sys::console::warn_1(&"a logger was already installed".into());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn install(config: LoggingConfig) {
    let mut builder = env_logger::Builder::new();
    match &config.env_filter {
        Some(filter) => {
            builder.parse_filters(filter);
        }
        None => {
            builder.filter_level(config.level);
        }
    }
    if let Err(err) = builder.try_init() {
        eprintln!("logger not installed: {err}");
    }
}
