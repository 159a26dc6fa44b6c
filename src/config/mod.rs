use std::env;
use std::net::SocketAddr;

pub mod cors;
pub mod security;

pub use cors::create_cors_layer;
pub use security::apply_security_headers;

/// Runtime settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub database_url: String,
    pub database_max_connections: u32,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            bind_addr: env::var("BIND_ADDR")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3001))),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost/evebuzz".to_string()),
            database_max_connections: parse_env("DATABASE_MAX_CONNECTIONS", 5),
        }
    }
}

/// Parses an environment variable, falling back to `default` when the
/// variable is missing or unparseable.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_environment() {
        env::remove_var("BIND_ADDR");
        env::remove_var("DATABASE_MAX_CONNECTIONS");

        let config = Config::from_env();
        assert_eq!(config.bind_addr.port(), 3001);
        assert_eq!(config.database_max_connections, 5);
    }

    #[test]
    fn parse_env_ignores_garbage() {
        env::set_var("TEST_PARSE_ENV_GARBAGE", "not-a-number");
        let value: u32 = parse_env("TEST_PARSE_ENV_GARBAGE", 7);
        assert_eq!(value, 7);
        env::remove_var("TEST_PARSE_ENV_GARBAGE");
    }
}
