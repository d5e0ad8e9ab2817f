//! Preset store - a JSON-file-backed map of saved presets

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use uuid::Uuid;

use crate::preset::{Preset, PresetUpdate};
use crate::pricing::PricingInput;

/// Store failures, split into the three kinds callers must be able to
/// tell apart: bad input, missing identifier, and internal failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("preset not found: {0}")]
    NotFound(Uuid),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

impl StoreError {
    /// Process exit code used at the CLI boundary
    pub fn exit_code(&self) -> i32 {
        match self {
            StoreError::InvalidInput(_) => 2,
            StoreError::NotFound(_) => 3,
            StoreError::Io(_) | StoreError::Serde(_) => 1,
        }
    }
}

/// Default store location in the platform data directory
pub fn default_store_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "precifica")
        .map(|dirs| dirs.data_dir().join("presets.json"))
}

pub struct PresetStore {
    path: PathBuf,
    presets: Mutex<HashMap<Uuid, Preset>>,
}

impl PresetStore {
    /// Open a store, loading any presets already saved at `path`
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let presets = if path.exists() {
            let contents = fs::read_to_string(path)?;
            let saved: Vec<Preset> = serde_json::from_str(&contents)?;
            log::debug!("loaded {} presets from {}", saved.len(), path.display());
            saved.into_iter().map(|preset| (preset.id, preset)).collect()
        } else {
            HashMap::new()
        };
        Ok(PresetStore {
            path: path.to_path_buf(),
            presets: Mutex::new(presets),
        })
    }

    /// Save an input as a new preset. The name must not be empty.
    pub fn create(&self, input: PricingInput) -> Result<Preset, StoreError> {
        if input.name.trim().is_empty() {
            return Err(StoreError::InvalidInput(
                "preset name must not be empty".to_string(),
            ));
        }
        let preset = Preset {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            input,
        };
        self.lock().insert(preset.id, preset.clone());
        self.persist()?;
        log::debug!("created preset {} ({})", preset.id, preset.input.name);
        Ok(preset)
    }

    pub fn get(&self, id: Uuid) -> Result<Preset, StoreError> {
        self.lock().get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    /// All presets, newest first
    pub fn list(&self) -> Vec<Preset> {
        let mut presets: Vec<Preset> = self.lock().values().cloned().collect();
        presets.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        presets
    }

    /// Replace the fields set on `update`, keeping everything else
    pub fn update(&self, id: Uuid, update: &PresetUpdate) -> Result<Preset, StoreError> {
        if let Some(name) = &update.name {
            if name.trim().is_empty() {
                return Err(StoreError::InvalidInput(
                    "preset name must not be empty".to_string(),
                ));
            }
        }
        let updated = {
            let mut presets = self.lock();
            let preset = presets.get_mut(&id).ok_or(StoreError::NotFound(id))?;
            update.apply_to(&mut preset.input);
            preset.clone()
        };
        self.persist()?;
        log::debug!("updated preset {}", id);
        Ok(updated)
    }

    /// Remove a preset. A missing identifier is an error, never a no-op.
    pub fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.lock().remove(&id).ok_or(StoreError::NotFound(id))?;
        self.persist()?;
        log::debug!("deleted preset {}", id);
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, Preset>> {
        self.presets.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let presets = self.list();
        fs::write(&self.path, serde_json::to_string_pretty(&presets)?)?;
        Ok(())
    }
}
