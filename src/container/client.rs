//! Docker/Podman client wrapper.
//!
//! Provides a simplified interface to the bollard Docker API with automatic
//! connection handling, fallback strategies, and health checking.

use crate::cli::RuntimeConfig;
use crate::container::{ContainerError, Result};
use bollard::Docker;
use std::sync::Arc;
use tracing::{debug, info};

/// Docker/Podman API client wrapper.
///
/// Manages connection to Docker or Podman daemon with automatic fallback
/// and health checking.
#[derive(Clone)]
pub struct ContainerClient {
    docker: Arc<Docker>,
}

impl ContainerClient {
    /// Create a new container client with default configuration.
    ///
    /// Attempts to connect to Docker first, then falls back to Podman if available.
    ///
    /// # Errors
    ///
    /// Returns error if neither Docker nor Podman are available or connection fails.
    pub async fn new() -> Result<Self> {
        Self::with_config(&RuntimeConfig::default()).await
    }

    /// Create a new container client with the given runtime configuration.
    ///
    /// # Errors
    ///
    /// Returns error if connection to container runtime fails. When no
    /// daemon responds, the error distinguishes a runtime that is not
    /// installed at all from one that is installed but not running.
    pub async fn with_config(config: &RuntimeConfig) -> Result<Self> {
        let docker = Self::connect(config)?;

        let client = Self {
            docker: Arc::new(docker),
        };

        // Verify the daemon actually responds, not just that a socket exists.
        if client.ping().await.is_err() {
            return Err(Self::unavailable_error());
        }

        Ok(client)
    }

    /// Connect to Docker or Podman daemon.
    ///
    /// Tries multiple connection strategies in order:
    /// 1. Configured socket from `RuntimeConfig`, if set
    /// 2. Local defaults (Unix socket, `DOCKER_HOST`, or Windows named pipe)
    /// 3. Rootless then system Podman sockets
    fn connect(config: &RuntimeConfig) -> Result<Docker> {
        let timeout = config.connect_timeout_secs;

        if let Some(socket) = &config.socket {
            debug!("Connecting to configured socket: {}", socket);
            return Docker::connect_with_socket(socket, timeout, bollard::API_DEFAULT_VERSION)
                .map_err(ContainerError::ApiError);
        }

        debug!("Attempting to connect to container runtime...");

        match Docker::connect_with_local_defaults() {
            Ok(docker) => {
                info!("Connected to container runtime via local defaults");
                return Ok(docker);
            }
            Err(e) => {
                debug!("Local defaults failed: {}", e);
            }
        }

        // Try Unix sockets for Podman
        #[cfg(unix)]
        {
            if let Ok(runtime_dir) = std::env::var("XDG_RUNTIME_DIR") {
                let podman_socket = format!("unix://{}/podman/podman.sock", runtime_dir);
                debug!("Trying rootless Podman socket: {}", podman_socket);

                match Docker::connect_with_socket(
                    &podman_socket,
                    timeout,
                    bollard::API_DEFAULT_VERSION,
                ) {
                    Ok(docker) => {
                        info!("Connected to Podman via rootless socket");
                        return Ok(docker);
                    }
                    Err(e) => {
                        debug!("Podman rootless socket failed: {}", e);
                    }
                }
            }

            let system_socket = "unix:///run/podman/podman.sock";
            debug!("Trying system Podman socket: {}", system_socket);

            match Docker::connect_with_socket(system_socket, timeout, bollard::API_DEFAULT_VERSION)
            {
                Ok(docker) => {
                    info!("Connected to Podman via system socket");
                    return Ok(docker);
                }
                Err(e) => {
                    debug!("Podman system socket failed: {}", e);
                }
            }
        }

        Err(Self::unavailable_error())
    }

    /// Build the "runtime unavailable" error, checking PATH so the message
    /// tells a missing installation apart from a stopped daemon.
    fn unavailable_error() -> ContainerError {
        if !runtime_binary_on_path() {
            return ContainerError::RuntimeUnavailable(
                "neither docker nor podman found on PATH; is a container runtime installed?"
                    .to_string(),
            );
        }
        ContainerError::RuntimeUnavailable(
            "a container runtime is installed but its daemon is not responding; is it running?"
                .to_string(),
        )
    }

    /// Ping the container runtime to verify connectivity.
    ///
    /// # Errors
    ///
    /// Returns error if ping fails.
    pub async fn ping(&self) -> Result<()> {
        self.docker.ping().await.map_err(|e| {
            ContainerError::Other(format!("Failed to ping container runtime: {}", e))
        })?;
        debug!("Container runtime ping successful");
        Ok(())
    }

    /// Get the underlying Docker client.
    ///
    /// This provides direct access to the bollard Docker API for advanced operations.
    pub fn docker(&self) -> &Docker {
        &self.docker
    }
}

/// Whether a docker or podman binary is discoverable on PATH.
fn runtime_binary_on_path() -> bool {
    which::which("docker").is_ok() || which::which("podman").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires Docker/Podman
    async fn connects_and_pings() {
        let client = ContainerClient::new().await.unwrap();
        client.ping().await.unwrap();
    }

    #[test]
    fn unavailable_error_names_the_problem() {
        let err = ContainerClient::unavailable_error();
        assert!(matches!(err, ContainerError::RuntimeUnavailable(_)));
    }
}
