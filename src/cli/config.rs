//! Configuration discovery and loading
//!
//! This module handles the configuration discovery hierarchy:
//! 1. Current directory: ./polyrun.toml
//! 2. User config: ~/.polyrun/config.toml
//! 3. System config: /etc/polyrun/config.toml
//! 4. Built-in defaults
//!
//! Only the container-runtime collaborator is configurable. The resolver
//! core (extension table, image namespace, build root) is fixed and takes
//! nothing from here.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env as std_env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Settings for the container runtime connection and run behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Explicit daemon socket, e.g. `unix:///run/user/1000/podman/podman.sock`.
    /// When unset the client tries Docker local defaults, then Podman sockets.
    pub socket: Option<String>,
    /// Connection timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Pull the image on every run, as if `--update` were always given.
    pub always_pull: bool,
    /// Remove the container after the run finishes.
    pub remove_container: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            socket: None,
            connect_timeout_secs: 120,
            always_pull: false,
            remove_container: true,
        }
    }
}

impl RuntimeConfig {
    /// Load from a TOML file.
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}

/// Configuration discovery system
pub struct ConfigDiscovery;

impl ConfigDiscovery {
    /// Discover and load configuration using the hierarchy
    pub fn discover_config() -> anyhow::Result<RuntimeConfig> {
        if let Some(config_path) = Self::find_config_file() {
            info!("Loading configuration from: {:?}", config_path);
            return RuntimeConfig::from_toml_file(config_path);
        }

        debug!("No configuration file found, using defaults");
        Ok(RuntimeConfig::default())
    }

    /// Find configuration file using discovery hierarchy
    pub fn find_config_file() -> Option<PathBuf> {
        for candidate in Self::config_candidates() {
            debug!("Checking for config file: {:?}", candidate);
            if candidate.is_file() {
                debug!("Found config file: {:?}", candidate);
                return Some(candidate);
            }
        }

        None
    }

    /// List of configuration file candidates in priority order
    fn config_candidates() -> Vec<PathBuf> {
        let mut candidates = Vec::new();

        // 1. Current directory: ./polyrun.toml
        if let Ok(current_dir) = std_env::current_dir() {
            candidates.push(current_dir.join("polyrun.toml"));
        }

        // 2. User config: ~/.polyrun/config.toml
        if let Some(home_dir) = Self::home_dir() {
            candidates.push(home_dir.join(".polyrun").join("config.toml"));
        }

        // 3. System config: /etc/polyrun/config.toml (Unix-like systems)
        #[cfg(unix)]
        candidates.push(PathBuf::from("/etc/polyrun/config.toml"));

        candidates
    }

    fn home_dir() -> Option<PathBuf> {
        std_env::var("HOME")
            .ok()
            .or_else(|| std_env::var("USERPROFILE").ok())
            .map(PathBuf::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_are_sane() {
        let config = RuntimeConfig::default();
        assert!(config.socket.is_none());
        assert!(!config.always_pull);
        assert!(config.remove_container);
        assert_eq!(config.connect_timeout_secs, 120);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("polyrun.toml");
        fs::write(&config_path, "always_pull = true\n").unwrap();

        let config = RuntimeConfig::from_toml_file(&config_path).unwrap();
        assert!(config.always_pull);
        assert_eq!(config.connect_timeout_secs, 120);
        assert!(config.remove_container);
    }

    #[test]
    fn full_file_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("polyrun.toml");
        fs::write(
            &config_path,
            "socket = \"unix:///run/podman/podman.sock\"\n\
             connect_timeout_secs = 30\n\
             always_pull = true\n\
             remove_container = false\n",
        )
        .unwrap();

        let config = RuntimeConfig::from_toml_file(&config_path).unwrap();
        assert_eq!(
            config.socket.as_deref(),
            Some("unix:///run/podman/podman.sock")
        );
        assert_eq!(config.connect_timeout_secs, 30);
        assert!(config.always_pull);
        assert!(!config.remove_container);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("polyrun.toml");
        fs::write(&config_path, "socket = [not toml").unwrap();
        assert!(RuntimeConfig::from_toml_file(&config_path).is_err());
    }

    #[test]
    fn candidates_start_with_current_directory() {
        let candidates = ConfigDiscovery::config_candidates();
        assert!(!candidates.is_empty());
        assert_eq!(candidates[0].file_name().unwrap(), "polyrun.toml");
    }
}
