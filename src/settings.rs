//! Policy settings
//!
//! Which ability to watch and which data fields and item drive its damage.
//! Defaults match the scenario generator; hosts can override from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{BASE_DAMAGE_FIELD, UPGRADE_ITEM, UPGRADED_DAMAGE_FIELD};
use crate::error::LoadError;
use crate::policy::AbilitySlot;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Slot of the area ability to cast
    pub ability_slot: AbilitySlot,
    /// Data field read (by ability level) without the upgrade item
    pub base_damage_field: String,
    /// Data field read (by hero level) with the upgrade item
    pub upgraded_damage_field: String,
    /// Item class name that selects the upgraded field
    pub upgrade_item: String,
    /// Ignore targets beyond this planar range (`None` = unlimited)
    pub max_range: Option<f32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ability_slot: AbilitySlot::Ultimate,
            base_damage_field: BASE_DAMAGE_FIELD.to_string(),
            upgraded_damage_field: UPGRADED_DAMAGE_FIELD.to_string(),
            upgrade_item: UPGRADE_ITEM.to_string(),
            max_range: None,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, LoadError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
