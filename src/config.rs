//! Folder layout, template names and generator settings.
//!
//! ```toml
//! input_folder = "files/banks"
//! output_folder = "files/processed"
//! selenium_template_folder = "files/selenium"
//! master_template_filename = "MinhasEconomiasMaster.side"
//! output_script_filename = "MinhasEconomiasNew.side"
//! placeholder_token = "<REPLACE_CONTENT_HERE>"
//!
//! [script]
//! country_name = "Canada"
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{ReplayError, ReplayResult};

pub const DEFAULT_CONFIG_FILE: &str = "statement-replay.toml";

/// Locators and literals typed into the finance app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptSettings {
    pub open_dialog_button: String,
    pub date_field: String,
    pub description_field: String,
    pub expense_button: String,
    pub income_button: String,
    pub country_field: String,
    pub amount_field: String,
    pub success_indicator: String,
    pub country_hint: String,
    pub country_name: String,
    pub enter_key: String,
    pub settle_pause_ms: u64,
    pub success_visible_timeout_ms: u64,
    pub success_hidden_timeout_ms: u64,
}

impl Default for ScriptSettings {
    fn default() -> Self {
        Self {
            open_dialog_button: "css=#ext-comp-1193 .x-btn-mc".to_string(),
            date_field: "id=ext-comp-1814".to_string(),
            description_field: "id=ext-comp-1816".to_string(),
            expense_button: "id=ext-comp-1884".to_string(),
            income_button: "id=ext-comp-1886".to_string(),
            country_field: "id=ext-comp-1821".to_string(),
            amount_field: "id=ext-comp-1825".to_string(),
            success_indicator: "xpath=//*[contains(text(), 'adicionada com sucesso')]".to_string(),
            country_hint: "Can".to_string(),
            country_name: "Canada".to_string(),
            enter_key: "${KEY_ENTER}".to_string(),
            settle_pause_ms: 1000,
            success_visible_timeout_ms: 30_000,
            success_hidden_timeout_ms: 80_000,
        }
    }
}

/// Config file as written by the user; every key optional until validated.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    input_folder: Option<PathBuf>,
    output_folder: Option<PathBuf>,
    selenium_template_folder: Option<PathBuf>,
    master_template_filename: Option<String>,
    output_script_filename: Option<String>,
    placeholder_token: Option<String>,
    #[serde(default)]
    script: ScriptSettings,
}

/// Validated, read-only configuration shared by every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankConfiguration {
    pub input_folder: PathBuf,
    pub output_folder: PathBuf,
    pub selenium_template_folder: PathBuf,
    pub master_template_filename: String,
    pub output_script_filename: String,
    pub placeholder_token: String,
    pub script: ScriptSettings,
}

fn required_path(
    value: Option<PathBuf>,
    key: &'static str,
    missing: &mut Vec<&'static str>,
) -> PathBuf {
    match value {
        Some(path) if !path.as_os_str().is_empty() => path,
        _ => {
            missing.push(key);
            PathBuf::new()
        }
    }
}

fn required_string(
    value: Option<String>,
    key: &'static str,
    missing: &mut Vec<&'static str>,
) -> String {
    match value {
        Some(s) if !s.trim().is_empty() => s,
        _ => {
            missing.push(key);
            String::new()
        }
    }
}

impl TryFrom<RawConfig> for BankConfiguration {
    type Error = ReplayError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let mut missing = Vec::new();

        let config = Self {
            input_folder: required_path(raw.input_folder, "input_folder", &mut missing),
            output_folder: required_path(raw.output_folder, "output_folder", &mut missing),
            selenium_template_folder: required_path(
                raw.selenium_template_folder,
                "selenium_template_folder",
                &mut missing,
            ),
            master_template_filename: required_string(
                raw.master_template_filename,
                "master_template_filename",
                &mut missing,
            ),
            output_script_filename: required_string(
                raw.output_script_filename,
                "output_script_filename",
                &mut missing,
            ),
            placeholder_token: required_string(
                raw.placeholder_token,
                "placeholder_token",
                &mut missing,
            ),
            script: raw.script,
        };

        if !missing.is_empty() {
            return Err(ReplayError::Config(format!(
                "missing configuration key(s): {}",
                missing.join(", ")
            )));
        }

        Ok(config)
    }
}

impl BankConfiguration {
    /// Default `files/{banks,processed,selenium}` layout under `base_dir`.
    pub fn with_base_dir(base_dir: impl AsRef<Path>) -> Self {
        let base = base_dir.as_ref();
        Self {
            input_folder: base.join("files").join("banks"),
            output_folder: base.join("files").join("processed"),
            selenium_template_folder: base.join("files").join("selenium"),
            master_template_filename: "MinhasEconomiasMaster.side".to_string(),
            output_script_filename: "MinhasEconomiasNew.side".to_string(),
            placeholder_token: "<REPLACE_CONTENT_HERE>".to_string(),
            script: ScriptSettings::default(),
        }
    }

    /// Parses TOML; relative folders are kept relative to `base_dir`.
    pub fn from_toml_str(content: &str, base_dir: impl AsRef<Path>) -> ReplayResult<Self> {
        let raw: RawConfig =
            toml::from_str(content).map_err(|e| ReplayError::Config(e.to_string()))?;
        let mut config = Self::try_from(raw)?;

        let base = base_dir.as_ref();
        for folder in [
            &mut config.input_folder,
            &mut config.output_folder,
            &mut config.selenium_template_folder,
        ] {
            if folder.is_relative() {
                *folder = base.join(&*folder);
            }
        }

        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> ReplayResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ReplayError::io(path, e))?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        debug!("Loaded configuration from {}", path.display());
        Self::from_toml_str(&content, base)
    }

    /// Creates `output_folder` if it does not exist yet.
    pub fn prepare(&self) -> ReplayResult<()> {
        fs::create_dir_all(&self.output_folder).map_err(|e| ReplayError::io(&self.output_folder, e))
    }

    pub fn master_template_path(&self) -> PathBuf {
        self.selenium_template_folder.join(&self.master_template_filename)
    }

    pub fn output_script_path(&self) -> PathBuf {
        self.selenium_template_folder.join(&self.output_script_filename)
    }
}
