use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigMissingKey,

    ValidationInvalidArgument,

    LauncherExecFailed,
    LauncherSpawnFailed,

    InternalIoError,
    InternalJsonError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ConfigMissingKey => "config.missing_key",

            ErrorCode::ValidationInvalidArgument => "validation.invalid_argument",

            ErrorCode::LauncherExecFailed => "launcher.exec_failed",
            ErrorCode::LauncherSpawnFailed => "launcher.spawn_failed",

            ErrorCode::InternalIoError => "internal.io_error",
            ErrorCode::InternalJsonError => "internal.json_error",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigMissingKeyDetails {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maps_to: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidArgumentDetails {
    pub field: String,
    pub problem: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LauncherFailedDetails {
    pub program: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalIoErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
        }
    }

    pub fn config_missing_key(key: impl Into<String>, maps_to: Option<String>) -> Self {
        let key = key.into();
        let details = serde_json::to_value(ConfigMissingKeyDetails {
            key: key.clone(),
            maps_to,
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(
            ErrorCode::ConfigMissingKey,
            format!("{} must be set", key),
            details,
        )
    }

    pub fn validation_invalid_argument(
        field: impl Into<String>,
        problem: impl Into<String>,
    ) -> Self {
        let details = serde_json::to_value(InvalidArgumentDetails {
            field: field.into(),
            problem: problem.into(),
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(
            ErrorCode::ValidationInvalidArgument,
            "Invalid argument",
            details,
        )
    }

    pub fn launcher_exec_failed(program: impl Into<String>, error: impl Into<String>) -> Self {
        let program = program.into();
        let details = serde_json::to_value(LauncherFailedDetails {
            program: program.clone(),
            error: error.into(),
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(
            ErrorCode::LauncherExecFailed,
            format!("Failed to exec launcher '{}'", program),
            details,
        )
        .with_hint("Check that the launcher binary is installed and on PATH")
    }

    pub fn launcher_spawn_failed(program: impl Into<String>, error: impl Into<String>) -> Self {
        let program = program.into();
        let details = serde_json::to_value(LauncherFailedDetails {
            program: program.clone(),
            error: error.into(),
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(
            ErrorCode::LauncherSpawnFailed,
            format!("Failed to spawn launcher '{}'", program),
            details,
        )
        .with_hint("Check that the launcher binary is installed and on PATH")
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        let details = serde_json::to_value(InternalIoErrorDetails {
            error: error.into(),
            context,
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(ErrorCode::InternalIoError, "IO error", details)
    }

    pub fn internal_json(error: impl Into<String>, context: Option<String>) -> Self {
        let error: String = error.into();
        let details = serde_json::json!({
            "error": error,
            "context": context,
        });

        Self::new(ErrorCode::InternalJsonError, "JSON error", details)
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }
}

/// Map an error code to the process exit status.
///
/// A missing or empty required variable is the contractually visible failure
/// of this tool and exits 1; every other pre-handoff failure shares that
/// status since callers only branch on zero vs non-zero.
pub fn exit_code_for_error(code: ErrorCode) -> i32 {
    match code {
        ErrorCode::ConfigMissingKey
        | ErrorCode::ValidationInvalidArgument
        | ErrorCode::LauncherExecFailed
        | ErrorCode::LauncherSpawnFailed
        | ErrorCode::InternalIoError
        | ErrorCode::InternalJsonError => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_names_the_variable() {
        let err = Error::config_missing_key("HF_MODEL_ID", Some("MODEL_ID".to_string()));
        assert_eq!(err.code, ErrorCode::ConfigMissingKey);
        assert_eq!(err.message, "HF_MODEL_ID must be set");
        assert_eq!(err.details["key"], "HF_MODEL_ID");
        assert_eq!(err.details["mapsTo"], "MODEL_ID");
    }

    #[test]
    fn error_codes_are_dotted() {
        assert_eq!(ErrorCode::ConfigMissingKey.as_str(), "config.missing_key");
        assert_eq!(
            ErrorCode::LauncherExecFailed.as_str(),
            "launcher.exec_failed"
        );
    }

    #[test]
    fn all_errors_exit_nonzero() {
        assert_eq!(exit_code_for_error(ErrorCode::ConfigMissingKey), 1);
        assert_eq!(exit_code_for_error(ErrorCode::LauncherSpawnFailed), 1);
    }

    #[test]
    fn with_hint_appends() {
        let err = Error::config_missing_key("HF_MODEL_ID", None)
            .with_hint("Set HF_MODEL_ID to a model id or local path");
        assert_eq!(err.hints.len(), 1);
    }
}
