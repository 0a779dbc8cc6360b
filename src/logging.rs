//! Installs the `env_logger` backend for the bridge's diagnostic lines.

use std::sync::Once;

use env_logger::{Builder, Target, WriteStyle};

use crate::config::{LogConfig, LogStyle};

/// Installs a stderr logger configured from `config`.
///
/// Returns `false` when the host process already owns the global logger; in
/// that case the bridge's records simply flow into the existing one.
pub fn init(config: &LogConfig) -> bool {
    let style = match config.style {
        LogStyle::Auto => WriteStyle::Auto,
        LogStyle::Always => WriteStyle::Always,
        LogStyle::Never => WriteStyle::Never,
    };

    Builder::new()
        .parse_filters(&config.filter)
        .write_style(style)
        .target(Target::Stderr)
        .try_init()
        .is_ok()
}

/// [`init`] with [`LogConfig::from_env`].
pub fn init_from_env() -> bool {
    init(&LogConfig::from_env())
}

/// Runs [`init_from_env`] once per process.
///
/// Called on the signing path so a host that invokes the callback directly,
/// without registering an engine, still gets the diagnostic lines.
pub fn ensure_init() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        init_from_env();
    });
}
