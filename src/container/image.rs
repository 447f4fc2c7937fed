//! Container image presence and pulling.

use crate::container::{ContainerError, Result};
use bollard::Docker;
use futures::stream::StreamExt;
use tracing::{debug, info};

/// Check if an image exists locally.
///
/// # Errors
///
/// Returns error if image inspection fails for any reason other than the
/// image being absent.
pub async fn image_exists(docker: &Docker, image: &str) -> Result<bool> {
    match docker.inspect_image(image).await {
        Ok(_) => Ok(true),
        Err(bollard::errors::Error::DockerResponseServerError {
            status_code: 404, ..
        }) => Ok(false),
        Err(e) => Err(ContainerError::ApiError(e)),
    }
}

/// Pull an image from a registry.
///
/// # Errors
///
/// Returns error if image pull fails.
pub async fn pull_image(docker: &Docker, image: &str) -> Result<()> {
    info!("Pulling image: {}", image);

    let mut stream = docker.create_image(
        Some(bollard::image::CreateImageOptions {
            from_image: image,
            ..Default::default()
        }),
        None,
        None,
    );

    while let Some(result) = stream.next().await {
        match result {
            Ok(progress) => {
                if let Some(status) = progress.status {
                    debug!("Pull status: {}", status);
                }
                if let Some(error) = progress.error {
                    return Err(ContainerError::PullError(error));
                }
            }
            Err(e) => {
                return Err(ContainerError::ApiError(e));
            }
        }
    }

    info!("Successfully pulled image: {}", image);
    Ok(())
}

/// Pull an image only when it is not present locally.
///
/// # Errors
///
/// Returns error if the presence check or the pull fails.
pub async fn ensure_image(docker: &Docker, image: &str) -> Result<()> {
    if image_exists(docker, image).await? {
        debug!("Image {} already exists locally", image);
        return Ok(());
    }
    pull_image(docker, image).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::ContainerClient;

    #[tokio::test]
    #[ignore] // Requires Docker/Podman and network access
    async fn ensure_pulls_missing_image() {
        let client = ContainerClient::new().await.unwrap();
        ensure_image(client.docker(), "alpine:latest").await.unwrap();
        assert!(image_exists(client.docker(), "alpine:latest").await.unwrap());
    }
}
