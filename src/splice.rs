use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{info, warn};

use crate::{
    commands::Command,
    errors::{ReplayError, ReplayResult},
};

const SEPARATOR: &str = ",\n";

/// Files produced by one splice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpliceOutput {
    pub intermediate_path: PathBuf,
    pub script_path: PathBuf,
}

/// One JSON object per command, joined by `,\n`, no trailing separator.
pub fn serialize_commands(commands: &[Command]) -> ReplayResult<String> {
    let objects = commands
        .iter()
        .map(serde_json::to_string)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(objects.join(SEPARATOR))
}

/// Replaces the first occurrence of `placeholder`; `None` when it is absent.
pub fn splice_text(template: &str, placeholder: &str, block: &str) -> Option<String> {
    if placeholder.is_empty() || !template.contains(placeholder) {
        return None;
    }
    Some(template.replacen(placeholder, block, 1))
}

/// Writes the command block and the script built from the master template.
#[derive(Debug, Clone)]
pub struct TemplateSplicer<'a> {
    pub master_template: &'a Path,
    pub placeholder: &'a str,
}

impl<'a> TemplateSplicer<'a> {
    pub fn new(master_template: &'a Path, placeholder: &'a str) -> Self {
        Self {
            master_template,
            placeholder,
        }
    }

    /// The intermediate file is written first and stays on disk even when
    /// the template turns out to be unusable.
    pub fn splice(
        &self,
        commands: &[Command],
        intermediate_path: &Path,
        script_path: &Path,
    ) -> ReplayResult<SpliceOutput> {
        let block = serialize_commands(commands)?;
        fs::write(intermediate_path, &block).map_err(|e| ReplayError::io(intermediate_path, e))?;
        info!(
            "Wrote {} commands to {}",
            commands.len(),
            intermediate_path.display()
        );

        let template = fs::read_to_string(self.master_template)
            .map_err(|e| ReplayError::io(self.master_template, e))?;

        let occurrences = match self.placeholder {
            "" => 0,
            token => template.matches(token).count(),
        };
        if occurrences > 1 {
            warn!(
                "Placeholder {:?} appears {} times in {}; only the first is replaced",
                self.placeholder,
                occurrences,
                self.master_template.display()
            );
        }

        let script = splice_text(&template, self.placeholder, &block).ok_or_else(|| {
            ReplayError::Template {
                placeholder: self.placeholder.to_string(),
                path: self.master_template.to_path_buf(),
            }
        })?;

        fs::write(script_path, script).map_err(|e| ReplayError::io(script_path, e))?;
        info!("Selenium script written to {}", script_path.display());

        Ok(SpliceOutput {
            intermediate_path: intermediate_path.to_path_buf(),
            script_path: script_path.to_path_buf(),
        })
    }
}
