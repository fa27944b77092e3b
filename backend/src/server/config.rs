//! Server configuration read from the environment.

use std::env;
use std::net::SocketAddr;

/// Default bind address when `BIND_ADDR` is unset.
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Default connection pool size when `DATABASE_POOL_SIZE` is unset.
const DEFAULT_POOL_SIZE: u32 = 10;

/// Application configuration assembled from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Socket address the HTTP server binds to (`BIND_ADDR`).
    pub bind_addr: SocketAddr,
    /// PostgreSQL connection string (`DATABASE_URL`).
    pub database_url: String,
    /// Maximum pooled connections (`DATABASE_POOL_SIZE`).
    pub pool_size: u32,
}

impl AppConfig {
    /// Read configuration from the process environment.
    ///
    /// `DATABASE_URL` is required; `BIND_ADDR` and `DATABASE_POOL_SIZE`
    /// fall back to defaults.
    pub fn from_env() -> std::io::Result<Self> {
        let bind_addr = parse_bind_addr(env::var("BIND_ADDR").ok())?;
        let database_url = env::var("DATABASE_URL")
            .map_err(|_| std::io::Error::other("DATABASE_URL must be set"))?;
        let pool_size = parse_pool_size(env::var("DATABASE_POOL_SIZE").ok())?;

        Ok(Self {
            bind_addr,
            database_url,
            pool_size,
        })
    }
}

fn parse_bind_addr(raw: Option<String>) -> std::io::Result<SocketAddr> {
    raw.unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned())
        .parse()
        .map_err(|err| std::io::Error::other(format!("invalid BIND_ADDR: {err}")))
}

fn parse_pool_size(raw: Option<String>) -> std::io::Result<u32> {
    match raw {
        None => Ok(DEFAULT_POOL_SIZE),
        Some(value) => value
            .parse()
            .map_err(|err| std::io::Error::other(format!("invalid DATABASE_POOL_SIZE: {err}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn bind_addr_defaults_when_unset() {
        let addr = parse_bind_addr(None).expect("default parses");
        assert_eq!(addr.port(), 8080);
    }

    #[rstest]
    fn bind_addr_rejects_garbage() {
        assert!(parse_bind_addr(Some("not-an-address".to_owned())).is_err());
    }

    #[rstest]
    #[case(None, DEFAULT_POOL_SIZE)]
    #[case(Some("4"), 4)]
    fn pool_size_parses_with_default(#[case] raw: Option<&str>, #[case] expected: u32) {
        let parsed = parse_pool_size(raw.map(str::to_owned)).expect("valid size");
        assert_eq!(parsed, expected);
    }
}
