//! Data validation utilities.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use battle_core::data::RulesetData;

use crate::error::{Result, ToolError};

/// RON files directly inside `dir`, sorted by path.
fn ron_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "ron") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Parse and validate one ruleset file, returning its problems.
fn check_ruleset(path: &Path, seen_ids: &mut HashSet<String>) -> Result<Vec<String>> {
    let label = path.display().to_string();
    let source = std::fs::read_to_string(path)?;

    let ruleset = match RulesetData::from_ron_str(&source, &label) {
        Ok(ruleset) => ruleset,
        Err(e) => return Ok(vec![e.to_string()]),
    };

    let mut problems: Vec<String> = ruleset
        .validate()
        .into_iter()
        .map(|problem| format!("{label}: {problem}"))
        .collect();

    if !seen_ids.insert(ruleset.id.clone()) {
        problems.push(format!("{label}: duplicate ruleset id '{}'", ruleset.id));
    }

    Ok(problems)
}

/// Validate all RON ruleset files in a directory.
///
/// Returns the number of files checked.
///
/// # Errors
///
/// Returns an error if the directory cannot be read or any ruleset fails
/// to parse or validate. Each problem is logged before returning.
pub fn validate_data_directory(path: &Path) -> Result<usize> {
    if !path.is_dir() {
        return Err(ToolError::NotFound(path.display().to_string()));
    }

    let files = ron_files(path)?;
    let mut seen_ids = HashSet::new();
    let mut problems = Vec::new();

    for file in &files {
        tracing::debug!("Checking {}", file.display());
        problems.extend(check_ruleset(file, &mut seen_ids)?);
    }

    if problems.is_empty() {
        tracing::info!("{} ruleset file(s) valid", files.len());
        Ok(files.len())
    } else {
        for problem in &problems {
            tracing::error!("{problem}");
        }
        Err(ToolError::ValidationFailed(problems.len()))
    }
}
