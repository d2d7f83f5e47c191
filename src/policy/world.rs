//! Host-facing traits
//!
//! The game client owns entity state and the cast pipeline. The policy reads
//! through [`WorldView`] and writes only through [`AbilityCaster`], so a
//! snapshot can stay borrowed while commands are issued.

use super::entity::{AbilitySlot, EntityId, EntitySnapshot};

/// Read-only view of the current tick
pub trait WorldView {
    /// The entity this helper controls
    fn actor(&self) -> &EntitySnapshot;

    /// Every hero currently known to the client, in stable order
    fn heroes(&self) -> &[EntitySnapshot];
}

/// Fire-and-forget cast commands
pub trait AbilityCaster {
    fn use_ability(&mut self, slot: AbilitySlot);

    fn use_ability_on(&mut self, slot: AbilitySlot, target: EntityId);
}
