//! One-shot container execution of an invocation plan.

use crate::cli::RuntimeConfig;
use crate::container::{ContainerClient, ContainerError, Result, image};
use crate::invocation::InvocationPlan;
use bollard::container::{
    Config as BollardConfig, LogOutput, LogsOptions, RemoveContainerOptions,
    StartContainerOptions, WaitContainerOptions,
};
use bollard::service::HostConfig;
use futures::stream::StreamExt;
use std::io::Write;
use tracing::{debug, info, warn};

/// Runs a resolved invocation plan as an anonymous, ephemeral container.
///
/// The runner pulls the image when the plan requests it (or when it is
/// missing locally), binds the plan's mounts, hands the entrypoint
/// argument vector to the image, streams the container's output to the
/// terminal, and reports the container's exit code.
pub struct ContainerRunner {
    client: ContainerClient,
    config: RuntimeConfig,
}

impl ContainerRunner {
    /// Connect to the container runtime with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if no runtime is available.
    pub async fn connect(config: RuntimeConfig) -> Result<Self> {
        let client = ContainerClient::with_config(&config).await?;
        Ok(Self { client, config })
    }

    /// Create a runner around an existing client.
    pub fn with_client(client: ContainerClient, config: RuntimeConfig) -> Self {
        Self { client, config }
    }

    /// Execute the plan and return the container's exit code.
    ///
    /// # Errors
    ///
    /// Returns error if the pull, creation, start, or wait fails. A
    /// non-zero exit status of the containerized program is NOT an error;
    /// it is returned as the exit code.
    pub async fn run(&self, plan: &InvocationPlan) -> Result<i64> {
        let docker = self.client.docker();

        if plan.pull_first || self.config.always_pull {
            image::pull_image(docker, &plan.image_reference).await?;
        } else {
            // `docker run` pulls implicitly; the API does not, so fetch
            // missing images here to keep the CLI behaviour.
            image::ensure_image(docker, &plan.image_reference).await?;
        }

        let binds: Vec<String> = plan.mounts.iter().map(|m| m.to_bind()).collect();
        debug!("Container binds: {:?}", binds);
        debug!("Entrypoint args: {:?}", plan.entrypoint_args);

        let config = BollardConfig {
            image: Some(plan.image_reference.clone()),
            cmd: Some(plan.entrypoint_args.clone()),
            host_config: Some(HostConfig {
                binds: Some(binds),
                ..Default::default()
            }),
            ..Default::default()
        };

        // Anonymous container: let the daemon pick the name.
        let container_id = docker
            .create_container(
                None::<bollard::query_parameters::CreateContainerOptions>,
                config,
            )
            .await?
            .id;
        info!("Created container {}", container_id);

        docker
            .start_container(&container_id, None::<StartContainerOptions<String>>)
            .await?;
        debug!("Started container {}", container_id);

        self.stream_logs(&container_id).await?;
        let exit_code = self.wait_for_exit(&container_id).await?;
        info!("Container {} exited with code {}", container_id, exit_code);

        if self.config.remove_container {
            if let Err(e) = docker
                .remove_container(
                    &container_id,
                    Some(RemoveContainerOptions {
                        force: true,
                        v: true,
                        ..Default::default()
                    }),
                )
                .await
            {
                warn!("Failed to remove container {}: {}", container_id, e);
            }
        }

        Ok(exit_code)
    }

    /// Follow the container's output until it exits, forwarding stdout and
    /// stderr to the corresponding host streams.
    async fn stream_logs(&self, container_id: &str) -> Result<()> {
        let mut stream = self.client.docker().logs(
            container_id,
            Some(LogsOptions::<String> {
                follow: true,
                stdout: true,
                stderr: true,
                ..Default::default()
            }),
        );

        while let Some(result) = stream.next().await {
            match result? {
                LogOutput::StdOut { message } | LogOutput::Console { message } => {
                    let mut out = std::io::stdout();
                    out.write_all(&message)?;
                    out.flush()?;
                }
                LogOutput::StdErr { message } => {
                    let mut err = std::io::stderr();
                    err.write_all(&message)?;
                    err.flush()?;
                }
                LogOutput::StdIn { .. } => {}
            }
        }

        Ok(())
    }

    /// Wait for the container to finish and return its exit code.
    async fn wait_for_exit(&self, container_id: &str) -> Result<i64> {
        let mut stream = self
            .client
            .docker()
            .wait_container(container_id, None::<WaitContainerOptions<String>>);

        match stream.next().await {
            Some(Ok(response)) => Ok(response.status_code),
            // bollard surfaces a non-zero exit status as an error variant;
            // for the CLI that is still a successful run.
            Some(Err(bollard::errors::Error::DockerContainerWaitError { code, .. })) => Ok(code),
            Some(Err(e)) => Err(ContainerError::ApiError(e)),
            None => Err(ContainerError::Other(format!(
                "wait on container {} returned no status",
                container_id
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invocation::{InvocationPlan, MountDescriptor};
    use std::path::PathBuf;

    fn echo_plan() -> InvocationPlan {
        InvocationPlan {
            image_reference: "alpine:latest".to_string(),
            mounts: vec![MountDescriptor {
                host_path: PathBuf::from("/tmp"),
                container_path: "/tmp/polyrun/build/tmp:ro".to_string(),
            }],
            entrypoint_args: vec!["true".to_string()],
            pull_first: false,
        }
    }

    #[tokio::test]
    #[ignore] // Requires Docker/Podman
    async fn runs_plan_and_reports_exit_code() {
        let runner = ContainerRunner::connect(RuntimeConfig::default())
            .await
            .unwrap();
        let code = runner.run(&echo_plan()).await.unwrap();
        assert_eq!(code, 0);
    }
}
