//! Serve static assets (stylesheets, images) from the directory named by
//! `TRIADIC_STATIC_DIR`. Nothing is mounted when it is unset or missing.

use std::path::PathBuf;

use tower_http::services::ServeDir;
use tracing::warn;

use crate::config::Config;

pub const STATIC_PREFIX: &str = "/static";

pub fn static_service(config: &Config) -> Option<ServeDir> {
    let dir = static_dir(config)?;
    Some(ServeDir::new(dir))
}

fn static_dir(config: &Config) -> Option<PathBuf> {
    let dir = config.static_dir.as_ref()?;
    match dir.canonicalize() {
        Ok(path) if path.is_dir() => Some(path),
        _ => {
            warn!(path = %dir.display(), "static directory not found, not serving {STATIC_PREFIX}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_or_missing_directory_is_not_served() {
        assert!(static_dir(&Config::default()).is_none());

        let config = Config {
            static_dir: Some(PathBuf::from("definitely/not/here")),
            ..Config::default()
        };
        assert!(static_dir(&config).is_none());
    }

    #[test]
    fn existing_directory_is_served() {
        let config = Config {
            static_dir: Some(std::env::temp_dir()),
            ..Config::default()
        };
        assert!(static_dir(&config).is_some());
    }
}
