//! Engine identity and logging configuration.

use std::ffi::CStr;

/// Default ENGINE id. Must match the id passed to `openssl engine -t <id>`.
pub const DEFAULT_ENGINE_ID: &CStr = c"rsa-sign-bridge";
pub const DEFAULT_ENGINE_NAME: &CStr = c"RSA sign bridge engine (Rust)";

pub const LOG_FILTER_ENV: &str = "RSA_SIGN_BRIDGE_LOG";
pub const LOG_STYLE_ENV: &str = "RSA_SIGN_BRIDGE_LOG_STYLE";

/// Identity handed to OpenSSL.
///
/// OpenSSL stores the id and name pointers without copying them, so both must
/// be `'static`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub id: &'static CStr,
    pub name: &'static CStr,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            id: DEFAULT_ENGINE_ID,
            name: DEFAULT_ENGINE_NAME,
        }
    }
}

impl EngineConfig {
    /// The id as a Rust string, for log lines and error messages.
    pub fn id_str(&self) -> String {
        self.id.to_string_lossy().into_owned()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogStyle {
    Auto,
    Always,
    Never,
}

impl LogStyle {
    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(LogStyle::Auto),
            "always" => Some(LogStyle::Always),
            "never" => Some(LogStyle::Never),
            _ => None,
        }
    }
}

/// Logging settings, normally taken from the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `env_logger` filter directives, e.g. `info` or `rsa_sign_bridge=trace`.
    pub filter: String,
    pub style: LogStyle,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            filter: "info".to_string(),
            style: LogStyle::Auto,
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup. Unset, empty or
    /// unparsable values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = LogConfig::default();

        let filter = lookup(LOG_FILTER_ENV)
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty())
            .unwrap_or(defaults.filter);

        let style = lookup(LOG_STYLE_ENV)
            .and_then(|s| LogStyle::parse(&s))
            .unwrap_or(defaults.style);

        LogConfig { filter, style }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = LogConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, LogConfig::default());
        assert_eq!(config.filter, "info");
        assert_eq!(config.style, LogStyle::Auto);
    }

    #[test]
    fn test_reads_filter_and_style() {
        let config = LogConfig::from_lookup(lookup_from(&[
            (LOG_FILTER_ENV, " rsa_sign_bridge=trace "),
            (LOG_STYLE_ENV, "Never"),
        ]));
        assert_eq!(config.filter, "rsa_sign_bridge=trace");
        assert_eq!(config.style, LogStyle::Never);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = LogConfig::from_lookup(lookup_from(&[
            (LOG_FILTER_ENV, "   "),
            (LOG_STYLE_ENV, "sometimes"),
        ]));
        assert_eq!(config, LogConfig::default());
    }

    #[test]
    fn test_default_engine_identity() {
        let config = EngineConfig::default();
        assert_eq!(config.id_str(), "rsa-sign-bridge");
        assert_eq!(config.name, DEFAULT_ENGINE_NAME);
    }
}
