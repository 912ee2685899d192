//! Runtime settings read from `AUTOQUOTE_*` environment variables.

use std::path::PathBuf;

use crate::domain::UnknownCategoryPolicy;
use crate::AutoquoteError;

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogMode {
    /// File when stdout is a terminal, stdout otherwise
    #[default]
    Auto,
    File,
    Stdout,
}

impl LogMode {
    /// Writing logs to the terminal corrupts the TUI, so interactive runs
    /// log to a file unless told otherwise.
    #[must_use]
    pub fn use_file(self, interactive: bool) -> bool {
        match self {
            Self::File => true,
            Self::Stdout => false,
            Self::Auto => interactive,
        }
    }
}

impl std::str::FromStr for LogMode {
    type Err = AutoquoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" | "" => Ok(Self::Auto),
            "file" => Ok(Self::File),
            "stdout" => Ok(Self::Stdout),
            other => Err(AutoquoteError::Config(format!(
                "Invalid AUTOQUOTE_LOG_MODE {other:?} (expected auto, file or stdout)"
            ))),
        }
    }
}

/// Application settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Model directory or `model.json` path
    pub model_path: PathBuf,
    /// Refuse to load a model without `manifest.json`
    pub require_manifest: bool,
    /// Handling of selections the model has no slot for
    pub unknown_category: UnknownCategoryPolicy,
    pub log_mode: LogMode,
    pub log_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("models"),
            require_manifest: false,
            unknown_category: UnknownCategoryPolicy::Reject,
            log_mode: LogMode::Auto,
            log_file: PathBuf::from("autoquote.log"),
        }
    }
}

impl Settings {
    /// Read settings from the process environment.
    ///
    /// # Errors
    /// Returns `AutoquoteError::Config` if a variable has an invalid value.
    pub fn from_env() -> Result<Self, AutoquoteError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup.
    ///
    /// # Errors
    /// Returns `AutoquoteError::Config` if a variable has an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AutoquoteError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(path) = lookup("AUTOQUOTE_MODEL_PATH").filter(|v| !v.trim().is_empty()) {
            settings.model_path = PathBuf::from(path.trim());
        }
        if let Some(v) = lookup("AUTOQUOTE_REQUIRE_MANIFEST") {
            settings.require_manifest = parse_bool(&v);
        }
        if let Some(v) = lookup("AUTOQUOTE_UNKNOWN_CATEGORY") {
            settings.unknown_category = v.parse().map_err(|_| {
                AutoquoteError::Config(format!(
                    "Invalid AUTOQUOTE_UNKNOWN_CATEGORY {v:?} (expected reject or zero-fill)"
                ))
            })?;
        }
        if let Some(v) = lookup("AUTOQUOTE_LOG_MODE") {
            settings.log_mode = v.parse()?;
        }
        if let Some(path) = lookup("AUTOQUOTE_LOG_FILE").filter(|v| !v.trim().is_empty()) {
            settings.log_file = PathBuf::from(path.trim());
        }

        Ok(settings)
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(value.trim(), "1" | "true" | "TRUE" | "yes" | "YES")
}
