//! Container runtime collaborator.
//!
//! Executes a resolved [`InvocationPlan`](crate::invocation::InvocationPlan)
//! against Docker or Podman via the bollard API. The resolver core never
//! touches the runtime; this module consumes the plan it produced.
//!
//! ## Architecture
//!
//! - [`client`]: daemon connection with fallback strategies and a PATH
//!   preflight that tells "runtime not installed" apart from "daemon not
//!   responding"
//! - [`image`]: local image presence check and registry pull
//! - [`runner`]: one-shot anonymous container run: create, start, stream
//!   logs, wait for the exit code, remove

mod client;
mod image;
mod runner;

pub use client::ContainerClient;
pub use runner::ContainerRunner;

/// Container runtime errors.
#[derive(Debug, thiserror::Error)]
pub enum ContainerError {
    /// Docker/Podman API error
    #[error("Container API error: {0}")]
    ApiError(#[from] bollard::errors::Error),

    /// No usable container runtime
    #[error("Container runtime unavailable: {0}")]
    RuntimeUnavailable(String),

    /// Image pull failure
    #[error("Image pull failed: {0}")]
    PullError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// General error
    #[error("Container error: {0}")]
    Other(String),
}

/// Result type for container operations.
pub type Result<T> = std::result::Result<T, ContainerError>;
