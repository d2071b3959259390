use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const CLOUDFLARE_DNS_1: &str = "1.1.1.1";
pub const CLOUDFLARE_DNS_2: &str = "1.0.0.1";
pub const GOOGLE_DNS_1: &str = "8.8.8.8";
pub const GOOGLE_DNS_2: &str = "8.8.4.4";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProbeConfig {
    /// Domains tried in order by the DNS and external website probes.
    #[serde(default = "default_domains")]
    pub domains: Vec<String>,

    /// Public DNS servers tried for every domain by the public DNS probe.
    #[serde(default = "default_dns_servers")]
    pub dns_servers: Vec<String>,

    #[serde(default = "default_dns_port")]
    pub dns_port: u16,

    /// Upper bound for every outbound DNS lookup and HTTP request.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ProbeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            domains: default_domains(),
            dns_servers: default_dns_servers(),
            dns_port: default_dns_port(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_domains() -> Vec<String> {
    ["google.com", "microsoft.com", "netflix.com", "slack.com", "apple.com"]
        .iter()
        .map(|d| d.to_string())
        .collect()
}

fn default_dns_servers() -> Vec<String> {
    [CLOUDFLARE_DNS_1, CLOUDFLARE_DNS_2, GOOGLE_DNS_1, GOOGLE_DNS_2]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_dns_port() -> u16 {
    53
}

fn default_timeout_secs() -> u64 {
    10
}
