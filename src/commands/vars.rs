//! List the supported variable translations.

use envlaunch::env_map::{self, EnvMapping};
use envlaunch::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VarsOutput {
    pub mappings: Vec<EnvMapping>,
}

pub fn run() -> Result<(VarsOutput, i32)> {
    Ok((
        VarsOutput {
            mappings: env_map::MAPPINGS.to_vec(),
        },
        0,
    ))
}
