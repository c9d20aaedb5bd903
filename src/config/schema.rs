//! Configuration schema for revision-plate.
//!
//! Maps to the optional YAML configuration file.

use serde::Deserialize;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::revision::DEFAULT_REVISION_FILE;

/// Port used when no bind address is configured.
pub const DEFAULT_PORT: u16 = 8080;

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Revision file to serve. Empty means [`DEFAULT_REVISION_FILE`].
    pub revision_file: PathBuf,

    /// Address to listen on.
    pub bind: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            revision_file: PathBuf::from(DEFAULT_REVISION_FILE),
            bind: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
        }
    }
}

impl ServerConfig {
    /// Apply command-line or environment overrides on top of this config.
    pub fn with_overrides(
        mut self,
        revision_file: Option<PathBuf>,
        bind: Option<SocketAddr>,
    ) -> Self {
        if let Some(file) = revision_file {
            self.revision_file = file;
        }
        if let Some(addr) = bind {
            self.bind = addr;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.revision_file, PathBuf::from("REVISION"));
        assert_eq!(config.bind, "127.0.0.1:8080".parse().unwrap());
    }

    #[test]
    fn overrides_replace_set_fields_only() {
        let config = ServerConfig::default().with_overrides(Some("site-sha".into()), None);
        assert_eq!(config.revision_file, PathBuf::from("site-sha"));
        assert_eq!(config.bind, ServerConfig::default().bind);

        let addr: SocketAddr = "0.0.0.0:9000".parse().unwrap();
        let config = ServerConfig::default().with_overrides(None, Some(addr));
        assert_eq!(config.revision_file, PathBuf::from("REVISION"));
        assert_eq!(config.bind, addr);
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config: ServerConfig = serde_yaml::from_str("bind: 0.0.0.0:9000").unwrap();
        assert_eq!(config.revision_file, PathBuf::from("REVISION"));
        assert_eq!(config.bind, "0.0.0.0:9000".parse().unwrap());
    }
}
