//! Command line argument parsing
//!
//! polyrun takes one or more positional source files plus repeatable
//! include/build-arg/run-arg flags. clap owns help and version display;
//! everything else is converted into the core's [`OptionSet`] with the
//! input order of repeated flags preserved.

use crate::options::{OptionKind, OptionSet};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "polyrun")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Run single source files inside ephemeral language-specific containers")]
#[command(long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Args {
    /// Source files to run; the first file's extension selects the image
    #[arg(required = true, value_name = "SOURCE")]
    pub sources: Vec<String>,

    /// Extra file or directory to mount, optionally suffixed :ro or :rw
    #[arg(short = 'i', long = "include", value_name = "PATH[:ro|:rw]")]
    pub includes: Vec<String>,

    /// Argument passed to the build step inside the container
    #[arg(
        short = 'b',
        long = "build-arg",
        value_name = "ARG",
        allow_hyphen_values = true
    )]
    pub build_args: Vec<String>,

    /// Argument passed to the program when it runs
    #[arg(short = 'a', long = "arg", value_name = "ARG", allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Directory the sources are read from (defaults to the current directory)
    #[arg(short = 'C', long = "directory", value_name = "DIR")]
    pub target_dir: Option<String>,

    /// Pull the image before running
    #[arg(short = 'u', long = "update")]
    pub update: bool,
}

impl Args {
    /// Convert the parsed arguments into the core's option set.
    pub fn into_option_set(self) -> OptionSet {
        let mut options = OptionSet::new();
        for source in self.sources {
            options.push(OptionKind::Source, source);
        }
        for include in self.includes {
            options.push(OptionKind::Include, include);
        }
        for build_arg in self.build_args {
            options.push(OptionKind::BuildArg, build_arg);
        }
        for arg in self.args {
            options.push(OptionKind::Arg, arg);
        }
        if let Some(dir) = self.target_dir {
            options.push(OptionKind::TargetDir, dir);
        }
        if self.update {
            options.set_flag(OptionKind::UpdateFlag);
        }
        options
    }
}
