// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sysboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sysboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::model::Preferences;

use super::{read_json, write_json, StoreError, WriteDurability};

pub const PREFERENCES_FILENAME: &str = "sysboard-preferences.json";

/// Where the canvas keeps the settings that outlive a reload.
pub trait PreferenceSink {
    /// `Ok(None)` when nothing was stored yet.
    fn load(&self) -> Result<Option<Preferences>, StoreError>;

    fn save(&self, preferences: &Preferences) -> Result<(), StoreError>;
}

/// Preferences stored as a single JSON file.
#[derive(Debug, Clone)]
pub struct PreferencesFile {
    path: PathBuf,
    durability: WriteDurability,
}

impl PreferencesFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), durability: WriteDurability::default() }
    }

    /// `<dir>/sysboard-preferences.json`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(PREFERENCES_FILENAME))
    }

    pub fn with_durability(mut self, durability: WriteDurability) -> Self {
        self.durability = durability;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceSink for PreferencesFile {
    fn load(&self) -> Result<Option<Preferences>, StoreError> {
        read_json(&self.path)
    }

    fn save(&self, preferences: &Preferences) -> Result<(), StoreError> {
        write_json(&self.path, preferences, self.durability)
    }
}

/// Process-local sink. Clones share the same slot, so a second store opened from a clone sees
/// what the first one saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    slot: Arc<Mutex<Option<Preferences>>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stored(&self) -> Option<Preferences> {
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).clone()
    }
}

impl PreferenceSink for MemoryPreferences {
    fn load(&self) -> Result<Option<Preferences>, StoreError> {
        Ok(self.stored())
    }

    fn save(&self, preferences: &Preferences) -> Result<(), StoreError> {
        *self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner()) =
            Some(preferences.clone());
        Ok(())
    }
}
