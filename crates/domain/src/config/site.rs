use serde::{Deserialize, Serialize};

/// Identifies the externally routable address of the canary's production deployment.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    #[serde(default = "default_app_host")]
    pub app_host: String,

    #[serde(default)]
    pub cluster_name: Option<String>,

    #[serde(default)]
    pub dns_zone: Option<String>,
}

impl SiteConfig {
    /// Missing identifiers are left empty; the resulting URL is still usable as a probe target.
    pub fn canary_url(&self) -> String {
        format!(
            "https://{}.{}.{}",
            self.app_host,
            self.cluster_name.as_deref().unwrap_or_default(),
            self.dns_zone.as_deref().unwrap_or_default()
        )
    }

    /// Names of the environment settings that were not provided.
    pub fn missing_settings(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.dns_zone.is_none() {
            missing.push("RADIX_DNS_ZONE");
        }
        if self.cluster_name.is_none() {
            missing.push("RADIX_CLUSTERNAME");
        }
        missing
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            app_host: default_app_host(),
            cluster_name: None,
            dns_zone: None,
        }
    }
}

fn default_app_host() -> String {
    "www-radix-canary-golang-prod".to_string()
}
