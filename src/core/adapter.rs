//! Resolution of the inherited environment into an immutable launch
//! configuration.
//!
//! The process environment is read once into a snapshot; everything after
//! that operates on the `LaunchConfig` value. The launcher's environment is
//! derived from the struct, never from ambient process state.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::env_map;
use crate::error::{Error, Result};
use crate::validation;

/// Immutable serving configuration, built once from the environment.
///
/// Optional fields stay `None` when the corresponding external variable is
/// unset or blank; no defaults are substituted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchConfig {
    pub model_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_shard: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantize: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trust_remote_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peft: Option<String>,
}

impl LaunchConfig {
    /// Snapshot the process environment and resolve it.
    pub fn from_env() -> Result<Self> {
        let snapshot: BTreeMap<String, String> = std::env::vars().collect();
        Self::from_snapshot(&snapshot)
    }

    /// Resolve a configuration from an explicit environment snapshot.
    ///
    /// Fails with `config.missing_key` when the required model id is unset or
    /// blank. Optional values are copied verbatim; blank values count as
    /// unset.
    pub fn from_snapshot(env: &BTreeMap<String, String>) -> Result<Self> {
        let model_id = optional(env, env_map::HF_MODEL_ID).ok_or_else(|| {
            Error::config_missing_key(env_map::HF_MODEL_ID, Some(env_map::MODEL_ID.to_string()))
                .with_hint("Set HF_MODEL_ID to a model id or a local model path")
        })?;

        Ok(Self {
            model_id: model_id.trim().to_string(),
            base_model_id: optional(env, env_map::HF_BASE_MODEL_ID),
            revision: optional(env, env_map::HF_MODEL_REVISION),
            num_shard: optional(env, env_map::SM_NUM_GPUS),
            quantize: optional(env, env_map::HF_MODEL_QUANTIZE),
            trust_remote_code: optional(env, env_map::HF_MODEL_TRUST_REMOTE_CODE),
            peft: optional(env, env_map::HF_MODEL_PEFT),
        })
    }

    /// Environment pairs for the launcher process, internal names only.
    ///
    /// Unset optionals are omitted entirely so the launcher sees them as
    /// undefined rather than empty.
    pub fn launcher_env(&self) -> Vec<(String, String)> {
        let mut env = vec![(env_map::MODEL_ID.to_string(), self.model_id.clone())];

        push_optional(&mut env, env_map::BASE_MODEL_ID, &self.base_model_id);
        push_optional(&mut env, env_map::REVISION, &self.revision);
        push_optional(&mut env, env_map::NUM_SHARD, &self.num_shard);
        push_optional(&mut env, env_map::QUANTIZE, &self.quantize);
        push_optional(&mut env, env_map::TRUST_REMOTE_CODE, &self.trust_remote_code);
        push_optional(&mut env, env_map::PEFT, &self.peft);

        env
    }
}

fn optional(env: &BTreeMap<String, String>, key: &str) -> Option<String> {
    validation::non_empty(env.get(key).map(String::as_str)).map(str::to_string)
}

fn push_optional(env: &mut Vec<(String, String)>, key: &str, value: &Option<String>) {
    if let Some(value) = value {
        env.push((key.to_string(), value.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn snapshot(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn missing_model_id_is_fatal() {
        let err = LaunchConfig::from_snapshot(&snapshot(&[])).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigMissingKey);
        assert_eq!(err.details["key"], "HF_MODEL_ID");
    }

    #[test]
    fn empty_model_id_is_fatal() {
        let env = snapshot(&[("HF_MODEL_ID", "")]);
        let err = LaunchConfig::from_snapshot(&env).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigMissingKey);
    }

    #[test]
    fn model_id_is_translated() {
        let env = snapshot(&[("HF_MODEL_ID", "foo")]);
        let config = LaunchConfig::from_snapshot(&env).unwrap();
        assert_eq!(config.model_id, "foo");
        assert_eq!(
            config.launcher_env(),
            vec![("MODEL_ID".to_string(), "foo".to_string())]
        );
    }

    #[test]
    fn unset_optionals_stay_unset() {
        let env = snapshot(&[("HF_MODEL_ID", "gpt2")]);
        let config = LaunchConfig::from_snapshot(&env).unwrap();
        let launcher_env = config.launcher_env();
        assert_eq!(launcher_env.len(), 1);
        for key in [
            "BASE_MODEL_ID",
            "REVISION",
            "NUM_SHARD",
            "QUANTIZE",
            "TRUST_REMOTE_CODE",
            "PEFT",
        ] {
            assert!(launcher_env.iter().all(|(k, _)| k != key));
        }
    }

    #[test]
    fn gpu_count_becomes_shard_count() {
        let env = snapshot(&[("HF_MODEL_ID", "gpt2"), ("SM_NUM_GPUS", "4")]);
        let config = LaunchConfig::from_snapshot(&env).unwrap();
        assert!(config
            .launcher_env()
            .contains(&("NUM_SHARD".to_string(), "4".to_string())));
    }

    #[test]
    fn all_optionals_are_copied_verbatim() {
        let env = snapshot(&[
            ("HF_MODEL_ID", "bigscience/bloom"),
            ("HF_BASE_MODEL_ID", "bigscience/bloom-base"),
            ("HF_MODEL_REVISION", "main"),
            ("SM_NUM_GPUS", "8"),
            ("HF_MODEL_QUANTIZE", "bitsandbytes"),
            ("HF_MODEL_TRUST_REMOTE_CODE", "true"),
            ("HF_MODEL_PEFT", "lora-weights"),
        ]);
        let config = LaunchConfig::from_snapshot(&env).unwrap();
        let launcher_env = config.launcher_env();

        assert_eq!(launcher_env.len(), 7);
        for (key, value) in [
            ("MODEL_ID", "bigscience/bloom"),
            ("BASE_MODEL_ID", "bigscience/bloom-base"),
            ("REVISION", "main"),
            ("NUM_SHARD", "8"),
            ("QUANTIZE", "bitsandbytes"),
            ("TRUST_REMOTE_CODE", "true"),
            ("PEFT", "lora-weights"),
        ] {
            assert!(launcher_env.contains(&(key.to_string(), value.to_string())));
        }
    }

    #[test]
    fn blank_optional_counts_as_unset() {
        let env = snapshot(&[("HF_MODEL_ID", "gpt2"), ("HF_MODEL_REVISION", "  ")]);
        let config = LaunchConfig::from_snapshot(&env).unwrap();
        assert!(config.revision.is_none());
    }

    #[test]
    fn unrelated_variables_are_ignored() {
        let env = snapshot(&[("HF_MODEL_ID", "gpt2"), ("PATH", "/usr/bin")]);
        let config = LaunchConfig::from_snapshot(&env).unwrap();
        assert_eq!(config.launcher_env().len(), 1);
    }
}
