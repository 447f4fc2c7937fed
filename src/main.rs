//! polyrun binary entry point.
//!
//! Resolves the command line into an invocation plan and hands it to the
//! container runtime. Any resolution or runtime failure aborts with a
//! non-zero status before a container is launched; a completed run exits
//! with the containerized program's own exit code.

use clap::Parser;
use polyrun::cli::Args;
use polyrun::invocation::build_plan;
use tracing::debug;

#[tokio::main]
async fn main() {
    // Initialize logging; RUST_LOG overrides the default filter.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "polyrun=warn".into()),
        )
        .init();

    let args = Args::parse();
    let options = args.into_option_set();

    let plan = match build_plan(&options) {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("polyrun: {}", e);
            std::process::exit(1);
        }
    };
    debug!("Resolved invocation plan: {:?}", plan);

    std::process::exit(execute(plan).await);
}

/// Run the plan in a container and map the outcome to a process exit code.
#[cfg(feature = "containers")]
async fn execute(plan: polyrun::invocation::InvocationPlan) -> i32 {
    use polyrun::cli::ConfigDiscovery;
    use polyrun::container::ContainerRunner;
    use tracing::info;

    let config = match ConfigDiscovery::discover_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("polyrun: invalid configuration: {:#}", e);
            return 1;
        }
    };

    let runner = match ContainerRunner::connect(config).await {
        Ok(runner) => runner,
        Err(e) => {
            eprintln!("polyrun: {}", e);
            return 1;
        }
    };

    match runner.run(&plan).await {
        Ok(code) => {
            info!("Container exited with code {}", code);
            i32::try_from(code).unwrap_or(1)
        }
        Err(e) => {
            eprintln!("polyrun: {}", e);
            1
        }
    }
}

/// Without the `containers` feature the binary only prints what it would
/// have launched.
#[cfg(not(feature = "containers"))]
async fn execute(plan: polyrun::invocation::InvocationPlan) -> i32 {
    println!("image: {}", plan.image_reference);
    for mount in &plan.mounts {
        println!("mount: {}", mount.to_bind());
    }
    println!("args: {}", plan.entrypoint_args.join(" "));
    if plan.pull_first {
        println!("pull: before run");
    }
    0
}
