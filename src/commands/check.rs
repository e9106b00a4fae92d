//! Resolve the environment and print the launch plan without launching.

use envlaunch::launcher::LaunchPlan;
use envlaunch::{validation, LaunchConfig, Result};
use serde::Serialize;

use crate::LauncherOpts;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckOutput {
    pub config: LaunchConfig,
    pub plan: LaunchPlan,
}

pub fn run(opts: &LauncherOpts) -> Result<(CheckOutput, i32)> {
    let launcher_bin = validation::require_non_empty(
        &opts.launcher_bin,
        "launcherBin",
        "Launcher binary cannot be empty",
    )?;

    let config = LaunchConfig::from_env()?;
    let plan = LaunchPlan::new(&config, launcher_bin, opts.port);

    Ok((CheckOutput { config, plan }, 0))
}
