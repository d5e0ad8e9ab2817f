//! Last-session persistence - a swappable key-value blob for the most
//! recently used calculator input

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::pricing::PricingInput;

fn default_session_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "precifica")
        .map(|dirs| dirs.data_dir().join("last-session.json"))
}

/// Save the input as the last session, to `path` when given or to the
/// platform data directory. Best effort; callers log failures instead of
/// failing the command.
pub fn save(input: &PricingInput, path: Option<&Path>) -> anyhow::Result<()> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => default_session_path().context("could not determine the data directory")?,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, serde_json::to_string_pretty(input)?)?;
    log::debug!("saved session to {}", path.display());
    Ok(())
}

/// Load the last session, if one was saved
pub fn load(path: Option<&Path>) -> anyhow::Result<Option<PricingInput>> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match default_session_path() {
            Some(path) => path,
            None => return Ok(None),
        },
    };
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(&path)
        .with_context(|| format!("failed to read session file {}", path.display()))?;
    let input = serde_json::from_str(&contents)
        .with_context(|| format!("session file {} is not valid", path.display()))?;
    Ok(Some(input))
}
