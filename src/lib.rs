//! Kill Secure - a per-tick lethal-cast helper
//!
//! Core modules:
//! - `geometry`: Pure planar/spatial vector math and segment projection
//! - `policy`: Per-tick lethality check and cast decision
//! - `scenario`: In-memory host world for driving the policy
//! - `settings`: Tunable ability/item names

pub mod error;
pub mod geometry;
pub mod policy;
pub mod scenario;
pub mod settings;

pub use error::{LoadError, PolicyError};
pub use policy::{LethalCastPolicy, TickOutcome};
pub use scenario::{CastCommand, Scenario};
pub use settings::Settings;

/// Configuration constants
pub mod consts {
    /// Host simulation rate (30 Hz)
    pub const SIM_DT: f32 = 1.0 / 30.0;

    /// Ability data field holding per-ability-level damage
    pub const BASE_DAMAGE_FIELD: &str = "damage";
    /// Ability data field used instead while the upgrade item is held
    pub const UPGRADED_DAMAGE_FIELD: &str = "damage_scepter";
    /// Item that switches damage to the upgraded field
    pub const UPGRADE_ITEM: &str = "item_ultimate_scepter";

    /// Magic resistance multiplier most heroes start with (25% resistance)
    pub const BASE_MAGIC_RESIST_MULTIPLIER: f32 = 0.75;
    /// Highest hero level
    pub const MAX_HERO_LEVEL: u32 = 25;
}
