use std::env;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8082";
pub const DEFAULT_READ_PREFIX: &str = "/api/v1";
pub const DEFAULT_ADMIN_PREFIX: &str = "/api/admin";

/// Where the FitLife backend lives. The server exposes reads under one
/// prefix and writes under another (with the member list/create pair
/// swapped the opposite way), so both prefixes are kept configurable
/// instead of hardcoding either as canonical.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub read_prefix: String,
    pub admin_prefix: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            read_prefix: DEFAULT_READ_PREFIX.to_string(),
            admin_prefix: DEFAULT_ADMIN_PREFIX.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env::var("FITLIFE_API_URL").unwrap_or(defaults.base_url),
            read_prefix: env::var("FITLIFE_API_READ_PREFIX").unwrap_or(defaults.read_prefix),
            admin_prefix: env::var("FITLIFE_API_ADMIN_PREFIX").unwrap_or(defaults.admin_prefix),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8082");
        assert_eq!(config.read_prefix, "/api/v1");
        assert_eq!(config.admin_prefix, "/api/admin");
    }
}
