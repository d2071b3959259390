use serde::{Deserialize, Serialize};
use std::path::Path;

use super::auth::AuthConfig;
use super::errors::ConfigError;
use super::job_scheduler::JobSchedulerConfig;
use super::logging::LoggingConfig;
use super::probe::ProbeConfig;
use super::server::ServerConfig;
use super::site::SiteConfig;

pub const DEFAULT_CONFIG_FILE: &str = "radix-canary.toml";

pub const ENV_LISTENING_PORT: &str = "LISTENING_PORT";
pub const ENV_JOB_SCHEDULER_PORT: &str = "JOB_SCHEDULER_PORT";
pub const ENV_PASSWORD: &str = "NETWORKPOLICY_CANARY_PASSWORD";
pub const ENV_CLUSTER_NAME: &str = "RADIX_CLUSTERNAME";
pub const ENV_DNS_ZONE: &str = "RADIX_DNS_ZONE";
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
pub const ENV_PRETTY_LOG: &str = "PRETTY_LOG";

/// Main configuration structure for Radix Canary
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listening port and bind address
    #[serde(default)]
    pub server: ServerConfig,

    /// Candidate lists and outbound timeout shared by every probe
    #[serde(default)]
    pub probe: ProbeConfig,

    /// Job scheduler endpoint used by the reachability probe and batch relay
    #[serde(default)]
    pub job_scheduler: JobSchedulerConfig,

    /// Production deployment targeted by the self-reachability probe
    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file, environment and command line
    ///
    /// Priority order (later wins):
    /// 1. Explicitly provided path, else radix-canary.toml in current directory, else defaults
    /// 2. Environment variables
    /// 3. Command-line overrides
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(DEFAULT_CONFIG_FILE).exists() {
            Self::from_file(DEFAULT_CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply the deployment environment on top of the file configuration.
    ///
    /// An unparsable `JOB_SCHEDULER_PORT` resolves to port 0 and an unparsable
    /// `PRETTY_LOG` to structured output; both only degrade the affected probe or
    /// log format. A bad `LISTENING_PORT` is rejected.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = |key: &str| lookup(key).filter(|value| !value.is_empty());

        if let Some(port) = env(ENV_LISTENING_PORT) {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidEnv(ENV_LISTENING_PORT.to_string(), port))?;
        }
        if let Some(port) = env(ENV_JOB_SCHEDULER_PORT) {
            self.job_scheduler.port = port.trim().parse().unwrap_or(0);
        }
        if let Some(secret) = env(ENV_PASSWORD) {
            self.auth.secret = Some(secret);
        }
        if let Some(cluster) = env(ENV_CLUSTER_NAME) {
            self.site.cluster_name = Some(cluster);
        }
        if let Some(zone) = env(ENV_DNS_ZONE) {
            self.site.dns_zone = Some(zone);
        }
        if let Some(level) = env(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }
        if let Some(pretty) = env(ENV_PRETTY_LOG) {
            match parse_bool(&pretty) {
                Some(value) => {
                    self.logging.pretty = value;
                    self.logging.rejected_pretty = None;
                }
                None => {
                    self.logging.pretty = false;
                    self.logging.rejected_pretty = Some(pretty);
                }
            }
        }
        Ok(())
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(pretty) = overrides.pretty_log {
            self.logging.pretty = pretty;
            self.logging.rejected_pretty = None;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "Listening port cannot be 0".to_string(),
            ));
        }

        if self.probe.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Probe timeout must be at least one second".to_string(),
            ));
        }

        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "t" | "true" => Some(true),
        "0" | "f" | "false" => Some(false),
        _ => None,
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
    pub pretty_log: Option<bool>,
}
