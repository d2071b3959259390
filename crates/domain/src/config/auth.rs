use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Shared secret expected after `Bearer ` on `/startjobbatch`.
    #[serde(default)]
    pub secret: Option<String>,
}
