//! Runtime settings, read from the environment once at startup.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::{Error, Result};

pub const BIND_ENV: &str = "TRIADIC_BIND";
pub const LOG_ENV: &str = "TRIADIC_LOG";
pub const STATIC_DIR_ENV: &str = "TRIADIC_STATIC_DIR";

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
/// Request spans from the trace layer are emitted under the `tower_http` target.
pub const DEFAULT_LOG_FILTER: &str = "triadic=info,tower_http=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// Directory served under `/static` when set.
    pub static_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            static_dir: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from any variable source; unset or blank values fall
    /// back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_blank = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let raw_bind = non_blank(BIND_ENV).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_bind.trim().parse().map_err(|err| Error::Config {
            message: format!("{BIND_ENV}='{raw_bind}' is not a socket address: {err}"),
        })?;

        Ok(Self {
            bind_addr,
            static_dir: non_blank(STATIC_DIR_ENV).map(PathBuf::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
    }

    #[test]
    fn reads_bind_and_static_dir() {
        let config = Config::from_lookup(|name| match name {
            BIND_ENV => Some("0.0.0.0:8080".to_string()),
            STATIC_DIR_ENV => Some("public".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.static_dir, Some(PathBuf::from("public")));
    }

    #[test]
    fn rejects_unparseable_bind_address() {
        let err = Config::from_lookup(|name| (name == BIND_ENV).then(|| "localhost".to_string()))
            .unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains(BIND_ENV));
    }
}
