//! Handoff to the downstream launcher process.
//!
//! The adapter's terminal action: on Unix the process image is replaced via
//! exec, so control never returns on success. Non-Unix targets fall back to
//! a supervised spawn that inherits stdio and mirrors the child's exit code.

use std::process::{Command, Stdio};

use serde::Serialize;

use crate::adapter::LaunchConfig;
use crate::error::{Error, Result};

/// The external serving binary. Opaque to this tool beyond name and port.
pub const DEFAULT_LAUNCHER_BIN: &str = "text-generation-launcher";
/// Port the hosting platform expects the launcher to bind.
pub const DEFAULT_PORT: u16 = 8080;

/// Fully resolved handoff: program, argv, and the extra environment pairs
/// the child receives on top of the inherited environment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchPlan {
    pub program: String,
    pub args: Vec<String>,
    pub env: Vec<(String, String)>,
}

impl LaunchPlan {
    pub fn new(config: &LaunchConfig, program: impl Into<String>, port: u16) -> Self {
        Self {
            program: program.into(),
            args: vec!["--port".to_string(), port.to_string()],
            env: config.launcher_env(),
        }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd.envs(self.env.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        cmd
    }
}

/// Replace the current process image with the launcher.
///
/// Returns only if the exec itself failed.
#[cfg(unix)]
pub fn exec(plan: &LaunchPlan) -> Error {
    use std::os::unix::process::CommandExt;

    let err = plan.command().exec();
    Error::launcher_exec_failed(&plan.program, err.to_string())
}

/// Spawn the launcher with inherited stdio and wait for it.
///
/// Returns the child's exit code (-1 when terminated by signal).
pub fn spawn_supervised(plan: &LaunchPlan) -> Result<i32> {
    let status = plan
        .command()
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| Error::launcher_spawn_failed(&plan.program, e.to_string()))?;

    Ok(status.code().unwrap_or(-1))
}

/// Hand control to the launcher.
///
/// On Unix this execs and never returns on success; elsewhere it supervises
/// the child and returns its exit code.
pub fn hand_off(plan: &LaunchPlan) -> Result<i32> {
    #[cfg(unix)]
    {
        Err(exec(plan))
    }

    #[cfg(not(unix))]
    {
        spawn_supervised(plan)
    }
}
