use subtle::ConstantTimeEq;

pub const BEARER_PREFIX: &str = "Bearer ";

/// Checks `Authorization` header values against the configured shared secret.
#[derive(Debug, Clone, Default)]
pub struct BearerTokenGate {
    secret: Option<String>,
}

impl BearerTokenGate {
    pub fn new(secret: Option<String>) -> Self {
        Self {
            secret: secret.filter(|s| !s.is_empty()),
        }
    }

    /// Accepts only `Bearer <token>` where the token is non-empty and equals the secret.
    /// Without a configured secret every request is rejected.
    pub fn authorize(&self, header: Option<&str>) -> bool {
        let Some(expected) = self.secret.as_deref() else {
            return false;
        };

        match header.and_then(extract_token) {
            Some(token) => token.as_bytes().ct_eq(expected.as_bytes()).into(),
            None => false,
        }
    }
}

fn extract_token(header: &str) -> Option<&str> {
    header
        .strip_prefix(BEARER_PREFIX)
        .filter(|token| !token.is_empty())
}
