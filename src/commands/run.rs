//! Default command: resolve the environment and hand off to the launcher.

use envlaunch::launcher::{self, LaunchPlan};
use envlaunch::{log_status, validation, LaunchConfig, Result};

use crate::LauncherOpts;

/// Resolve, then transfer control. On Unix this only returns on failure; the
/// returned exit code is the supervised child's on other targets.
pub fn run(opts: &LauncherOpts) -> Result<i32> {
    let launcher_bin = validation::require_non_empty(
        &opts.launcher_bin,
        "launcherBin",
        "Launcher binary cannot be empty",
    )?;

    let config = LaunchConfig::from_env()?;
    let plan = LaunchPlan::new(&config, launcher_bin, opts.port);

    log_status!(
        "launch",
        "Serving {} via {} --port {}",
        config.model_id,
        plan.program,
        opts.port
    );

    launcher::hand_off(&plan)
}
