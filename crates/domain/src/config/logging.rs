use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Human readable console output instead of JSON lines.
    #[serde(default)]
    pub pretty: bool,

    /// Unparsable `PRETTY_LOG` value, kept so it can be reported once logging is up.
    #[serde(skip)]
    pub rejected_pretty: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            pretty: false,
            rejected_pretty: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
