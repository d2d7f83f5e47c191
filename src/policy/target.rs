//! Target validity and guarded cast helpers

use super::entity::{Ability, EntitySnapshot};
use super::world::AbilityCaster;
use crate::geometry::planar_distance_squared;

/// Whether `target` can be considered by the actor
///
/// Rejects missing, invalid, dead, invisible and unspawned entities, allies
/// when `must_be_enemy` is set, and anything beyond `max_range`. Range is
/// measured on the plane from the actor's network position to the target's
/// rendered position and includes the boundary. `None` or a non-finite range
/// means unlimited.
pub fn is_valid_target(
    actor: &EntitySnapshot,
    target: Option<&EntitySnapshot>,
    max_range: Option<f32>,
    must_be_enemy: bool,
) -> bool {
    let Some(target) = target else {
        return false;
    };

    if !target.is_targetable() {
        return false;
    }

    if must_be_enemy && target.team == actor.team {
        return false;
    }

    match max_range {
        Some(range) if range.is_finite() => {
            planar_distance_squared(actor.network_position, target.position) <= range * range
        }
        _ => true,
    }
}

/// Issue an untargeted cast if the ability is ready
///
/// Returns whether a command was sent.
pub fn cast<C: AbilityCaster + ?Sized>(ability: &Ability, caster: &mut C) -> bool {
    if !ability.is_ready() {
        return false;
    }
    caster.use_ability(ability.slot);
    true
}

/// Issue a targeted cast if the ability is ready and `target` is a valid enemy
/// within the ability's cast range
pub fn cast_on<C: AbilityCaster + ?Sized>(
    actor: &EntitySnapshot,
    ability: &Ability,
    target: &EntitySnapshot,
    caster: &mut C,
) -> bool {
    if !ability.is_ready()
        || !is_valid_target(actor, Some(target), Some(ability.cast_range), true)
    {
        return false;
    }
    caster.use_ability_on(ability.slot, target.id);
    true
}
