use radix_canary_domain::{CliOverrides, Config};

/// Runs before logging exists, so the outcome is reported on stderr.
pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    match Config::load(path, overrides) {
        Ok(config) => {
            if let Some(path) = path {
                eprintln!("Configuration loaded from {}", path);
            }
            Ok(config)
        }
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            Err(e.into())
        }
    }
}
