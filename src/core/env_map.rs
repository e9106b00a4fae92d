//! Environment variable names consumed and produced by the adapter.
//!
//! External names follow the managed-hosting convention (`HF_*` / `SM_*`);
//! internal names are what `text-generation-launcher` reads. The `MAPPINGS`
//! table is the single source of truth: the adapter, the `vars` command, and
//! the tests all iterate it.

use serde::Serialize;

/// Model id or local path to serve. The one required variable.
pub const HF_MODEL_ID: &str = "HF_MODEL_ID";
/// Base model id when serving an adapter checkpoint.
pub const HF_BASE_MODEL_ID: &str = "HF_BASE_MODEL_ID";
/// Hub revision (branch, tag, or commit) to serve.
pub const HF_MODEL_REVISION: &str = "HF_MODEL_REVISION";
/// GPU count supplied by the hosting platform; becomes the shard count.
pub const SM_NUM_GPUS: &str = "SM_NUM_GPUS";
/// Quantization scheme passed through to the launcher.
pub const HF_MODEL_QUANTIZE: &str = "HF_MODEL_QUANTIZE";
/// Whether remote code from the hub may be executed.
pub const HF_MODEL_TRUST_REMOTE_CODE: &str = "HF_MODEL_TRUST_REMOTE_CODE";
/// PEFT adapter selection passed through to the launcher.
pub const HF_MODEL_PEFT: &str = "HF_MODEL_PEFT";

pub const MODEL_ID: &str = "MODEL_ID";
pub const BASE_MODEL_ID: &str = "BASE_MODEL_ID";
pub const REVISION: &str = "REVISION";
pub const NUM_SHARD: &str = "NUM_SHARD";
pub const QUANTIZE: &str = "QUANTIZE";
pub const TRUST_REMOTE_CODE: &str = "TRUST_REMOTE_CODE";
pub const PEFT: &str = "PEFT";

/// One external-to-internal variable translation.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvMapping {
    pub external: &'static str,
    pub internal: &'static str,
    pub required: bool,
}

/// Every variable pair the adapter translates, required first.
pub const MAPPINGS: &[EnvMapping] = &[
    EnvMapping {
        external: HF_MODEL_ID,
        internal: MODEL_ID,
        required: true,
    },
    EnvMapping {
        external: HF_BASE_MODEL_ID,
        internal: BASE_MODEL_ID,
        required: false,
    },
    EnvMapping {
        external: HF_MODEL_REVISION,
        internal: REVISION,
        required: false,
    },
    EnvMapping {
        external: SM_NUM_GPUS,
        internal: NUM_SHARD,
        required: false,
    },
    EnvMapping {
        external: HF_MODEL_QUANTIZE,
        internal: QUANTIZE,
        required: false,
    },
    EnvMapping {
        external: HF_MODEL_TRUST_REMOTE_CODE,
        internal: TRUST_REMOTE_CODE,
        required: false,
    },
    EnvMapping {
        external: HF_MODEL_PEFT,
        internal: PEFT,
        required: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_required_mapping() {
        let required: Vec<_> = MAPPINGS.iter().filter(|m| m.required).collect();
        assert_eq!(required.len(), 1);
        assert_eq!(required[0].external, HF_MODEL_ID);
        assert_eq!(required[0].internal, MODEL_ID);
    }

    #[test]
    fn mappings_have_unique_names() {
        for (i, a) in MAPPINGS.iter().enumerate() {
            for b in &MAPPINGS[i + 1..] {
                assert_ne!(a.external, b.external);
                assert_ne!(a.internal, b.internal);
            }
        }
    }

    #[test]
    fn peft_reads_the_external_name() {
        let peft = MAPPINGS.iter().find(|m| m.internal == PEFT).unwrap();
        assert_eq!(peft.external, HF_MODEL_PEFT);
    }
}
