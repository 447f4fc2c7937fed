//! # polyrun
//!
//! Run a single source file (plus optional auxiliary files) inside an
//! ephemeral, language-specific container, without needing to know which
//! container image corresponds to the file's language.
//!
//! ## Architecture Overview
//!
//! - **[`invocation`]**: the resolver core. Pure functions that infer a
//!   language from a filename, map it to a container image, parse path
//!   specifiers with optional `:ro`/`:rw` permission suffixes, and
//!   assemble the final invocation plan (mounts plus entrypoint
//!   arguments).
//! - **[`options`]**: the option-kind to ordered-values mapping the CLI
//!   hands to the resolver.
//! - **[`cli`]**: clap argument parsing and runtime configuration
//!   discovery.
//! - **[`container`]**: the runtime collaborator (feature `containers`)
//!   that executes a resolved plan against Docker or Podman via bollard.
//!
//! ## Quick Start
//!
//! ```rust
//! use polyrun::invocation::build_plan;
//! use polyrun::options::{OptionKind, OptionSet};
//!
//! let mut options = OptionSet::new();
//! options.push(OptionKind::Source, "main.py");
//! options.push(OptionKind::Arg, "--flag");
//!
//! let plan = build_plan(&options)?;
//! assert_eq!(plan.image_reference, "polyrun/python");
//! assert_eq!(plan.entrypoint_args, ["main.py", "-a", "--flag"]);
//! # Ok::<(), polyrun::invocation::InvocationError>(())
//! ```

/// Source-to-container invocation resolution.
///
/// The pure core: extension extraction, image lookup, path specifier
/// parsing, and invocation plan assembly.
pub mod invocation;

/// Parsed command-line option model consumed by the resolver.
pub mod options;

/// Argument parsing and configuration discovery.
pub mod cli;

/// Container runtime collaborator built on bollard.
#[cfg(feature = "containers")]
pub mod container;

// Re-export the resolver surface
pub use invocation::{InvocationError, InvocationPlan, MountDescriptor, build_plan};

// Re-export the option model
pub use options::{OptionKind, OptionSet};
