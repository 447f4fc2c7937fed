//! Source-to-container invocation resolution.
//!
//! This is the core of polyrun: pure functions that turn a parsed option
//! set into a complete container invocation. The pipeline runs strictly
//! forward:
//!
//! - [`extension`]: derive the language extension token from a filename
//! - [`image`]: map the token to a container image identifier
//! - [`pathspec`]: split a source/include specifier into basename and
//!   mount permission
//! - [`plan`]: assemble the final [`InvocationPlan`] (image reference,
//!   mount descriptors, entrypoint argument vector, pull flag)
//!
//! Every operation here is a synchronous, terminating data transformation
//! with no I/O beyond path normalization. Any failure aborts plan
//! construction; a partial plan is never produced.

mod extension;
mod image;
mod pathspec;
mod plan;

pub use extension::source_extension;
pub use image::{IMAGE_NAMESPACE, image_for_extension, image_reference};
pub use pathspec::{MountPermission, PathSpec};
pub use plan::{BUILD_ROOT, InvocationPlan, MountDescriptor, build_plan};

/// Errors raised while resolving an invocation plan.
#[derive(Debug, thiserror::Error)]
pub enum InvocationError {
    /// No source files were given at all.
    #[error("no source files given")]
    NoSources,

    /// The source filename carries no extension-bearing dot.
    #[error("source filename has no extension: {0}")]
    InvalidFilename(String),

    /// The extension token maps to no known container image.
    #[error("no container image known for extension '{0}'")]
    UnmappedExtension(String),

    /// The target directory could not be made absolute.
    #[error("failed to resolve working directory {path}")]
    WorkingDir {
        /// The directory that failed to resolve.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type for invocation resolution.
pub type Result<T> = std::result::Result<T, InvocationError>;
