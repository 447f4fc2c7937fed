//! Invocation plan assembly.

use super::{
    InvocationError, PathSpec, Result, image_for_extension, image_reference, source_extension,
};
use crate::options::{OptionKind, OptionSet};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Fixed container-side directory the sources and includes are mounted
/// under; the image entrypoints build and run from here.
pub const BUILD_ROOT: &str = "/tmp/polyrun/build";

/// Flag the image entrypoint expects before each build-time argument.
const BUILD_ARG_FLAG: &str = "-b";

/// Flag the image entrypoint expects before each run-time argument.
const RUN_ARG_FLAG: &str = "-a";

/// One host-to-container bind mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountDescriptor {
    /// Absolute path of the file or directory on the host.
    pub host_path: PathBuf,
    /// Target path inside the container, rooted at [`BUILD_ROOT`]. Carries
    /// the raw specifier, so a `:ro`/`:rw` suffix lands in the bind-option
    /// position of the rendered bind string.
    pub container_path: String,
}

impl MountDescriptor {
    /// Render as a `host:container[:mode]` bind string.
    pub fn to_bind(&self) -> String {
        format!("{}:{}", self.host_path.display(), self.container_path)
    }
}

/// The complete, resolved description of one container run.
///
/// Consumed exactly once by the container runtime collaborator; this core
/// never launches anything itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationPlan {
    /// Full image reference, `polyrun/<image>`.
    pub image_reference: String,
    /// Bind mounts, sources first then includes, each in input order.
    pub mounts: Vec<MountDescriptor>,
    /// Arguments handed to the image entrypoint: source basenames, then
    /// `-b`-flagged build args, then `-a`-flagged run args.
    pub entrypoint_args: Vec<String>,
    /// Whether the image should be pulled before the run.
    pub pull_first: bool,
}

/// Build an [`InvocationPlan`] from the parsed options.
///
/// The image is resolved from the first source entry's extension. The
/// working directory is the `TargetDir` value if given, else the process
/// current directory, made absolute without touching the filesystem
/// further.
///
/// # Errors
///
/// Returns [`InvocationError::NoSources`] when the source list is empty,
/// [`InvocationError::InvalidFilename`] or
/// [`InvocationError::UnmappedExtension`] when the first source does not
/// resolve to an image, and [`InvocationError::WorkingDir`] when the
/// target directory cannot be made absolute. On any error no plan is
/// produced.
pub fn build_plan(options: &OptionSet) -> Result<InvocationPlan> {
    let sources = options.values(OptionKind::Source);
    let first_source = sources.first().ok_or(InvocationError::NoSources)?;

    let extension = source_extension(first_source)?;
    let image = image_for_extension(extension)
        .ok_or_else(|| InvocationError::UnmappedExtension(extension.to_string()))?;

    let work_dir = resolve_work_dir(options.first(OptionKind::TargetDir))?;
    debug!("resolved working directory: {}", work_dir.display());

    let includes = options.values(OptionKind::Include);
    let mut mounts = Vec::with_capacity(sources.len() + includes.len());
    for entry in sources.iter().chain(includes) {
        let spec = PathSpec::parse(entry);
        mounts.push(MountDescriptor {
            host_path: work_dir.join(spec.basename()),
            container_path: format!("{BUILD_ROOT}/{}", spec.raw()),
        });
    }

    let mut entrypoint_args: Vec<String> = sources
        .iter()
        .map(|source| PathSpec::parse(source).basename().to_string())
        .collect();
    entrypoint_args.extend(flag_each(options.values(OptionKind::BuildArg), BUILD_ARG_FLAG));
    entrypoint_args.extend(flag_each(options.values(OptionKind::Arg), RUN_ARG_FLAG));

    Ok(InvocationPlan {
        image_reference: image_reference(image),
        mounts,
        entrypoint_args,
        pull_first: options.is_set(OptionKind::UpdateFlag),
    })
}

/// Absolutize the target directory, defaulting to the process CWD. No
/// symlink resolution and no existence check, matching `filepath.Abs`
/// semantics.
fn resolve_work_dir(target: Option<&str>) -> Result<PathBuf> {
    let path = target.unwrap_or(".");
    std::path::absolute(Path::new(path)).map_err(|source| InvocationError::WorkingDir {
        path: path.to_string(),
        source,
    })
}

/// Interleave `flag` before every value, preserving order.
fn flag_each(values: &[String], flag: &str) -> Vec<String> {
    values
        .iter()
        .flat_map(|value| [flag.to_string(), value.clone()])
        .collect()
}
