//! Lethal-cast decision policy
//!
//! Stateless glue between the host snapshot and the geometry toolkit:
//! - Snapshots are read-only; nothing here mutates host state
//! - The only side effect is a command pushed through [`AbilityCaster`]
//! - Not-ready and no-target are outcomes, missing data is an error

pub mod damage;
pub mod entity;
pub mod target;
pub mod tick;
pub mod world;

pub use damage::lethal_damage;
pub use entity::{
    Ability, AbilityData, AbilitySlot, AbilityState, EntityId, EntitySnapshot, Item, Team,
};
pub use target::{cast, cast_on, is_valid_target};
pub use tick::{LethalCastPolicy, TickOutcome};
pub use world::{AbilityCaster, WorldView};
