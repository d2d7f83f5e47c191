//! Projected ability damage after magic resistance

use super::entity::{Ability, EntitySnapshot};
use crate::error::PolicyError;
use crate::settings::Settings;

/// Damage `ability` would deal to `target` if cast now
///
/// # Formula
///
/// ```text
/// with upgrade item:  raw = upgraded_field[actor.level - 1]
/// without:            raw = base_field[ability.level - 1]
/// damage = raw * target.magic_damage_resist
/// ```
///
/// The upgraded field is indexed by the actor's hero level, the base field by
/// the ability's rank. Both levels are 1-based on the entity.
///
/// # Errors
///
/// A missing field or a level with no value is a [`PolicyError`]; it is never
/// read as zero damage.
pub fn lethal_damage(
    actor: &EntitySnapshot,
    ability: &Ability,
    target: &EntitySnapshot,
    settings: &Settings,
) -> Result<f32, PolicyError> {
    let (field, level) = if actor.has_item(&settings.upgrade_item) {
        (settings.upgraded_damage_field.as_str(), actor.level)
    } else {
        (settings.base_damage_field.as_str(), ability.level)
    };

    let data = ability
        .data(field)
        .ok_or_else(|| PolicyError::MissingAbilityData {
            ability: ability.name.clone(),
            field: field.to_string(),
        })?;

    let raw = level
        .checked_sub(1)
        .and_then(|index| data.value(index as usize))
        .ok_or_else(|| PolicyError::LevelOutOfRange {
            ability: ability.name.clone(),
            field: field.to_string(),
            level,
        })?;

    Ok(raw * target.magic_damage_resist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::entity::{AbilityData, AbilitySlot, EntityId, Item, Team};
    use glam::Vec3;

    fn wrath(level: u32) -> Ability {
        let mut ability = Ability::new(AbilitySlot::Ultimate, "wrath");
        ability.level = level;
        ability.data.push(AbilityData::new("damage", vec![225.0, 350.0, 475.0]));
        ability
            .data
            .push(AbilityData::new("damage_scepter", vec![300.0, 310.0, 320.0, 330.0, 340.0]));
        ability
    }

    fn actor(level: u32) -> EntitySnapshot {
        let mut actor = EntitySnapshot::new(EntityId(1), "actor", Team(2), Vec3::ONE);
        actor.level = level;
        actor
    }

    fn target(resist: f32) -> EntitySnapshot {
        let mut target = EntitySnapshot::new(EntityId(2), "target", Team(3), Vec3::ONE);
        target.magic_damage_resist = resist;
        target
    }

    #[test]
    fn test_base_field_uses_ability_level_minus_one() {
        let settings = Settings::default();
        let damage = lethal_damage(&actor(4), &wrath(2), &target(1.0), &settings).unwrap();
        assert_eq!(damage, 350.0);
        let damage = lethal_damage(&actor(4), &wrath(1), &target(1.0), &settings).unwrap();
        assert_eq!(damage, 225.0);
    }

    #[test]
    fn test_upgraded_field_uses_actor_level_minus_one() {
        let settings = Settings::default();
        let mut actor = actor(4);
        actor.inventory.push(Item::new(settings.upgrade_item.clone()));
        // Ability rank 2 is ignored with the upgrade; hero level 4 -> index 3
        let damage = lethal_damage(&actor, &wrath(2), &target(1.0), &settings).unwrap();
        assert_eq!(damage, 330.0);
    }

    #[test]
    fn test_magic_resistance_scales_damage() {
        let settings = Settings::default();
        let damage = lethal_damage(&actor(1), &wrath(3), &target(0.75), &settings).unwrap();
        assert!((damage - 356.25).abs() < 1e-3);
        let damage = lethal_damage(&actor(1), &wrath(3), &target(0.0), &settings).unwrap();
        assert_eq!(damage, 0.0);
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let settings = Settings::default();
        let mut ability = wrath(1);
        ability.data.retain(|d| d.name != "damage");
        let err = lethal_damage(&actor(1), &ability, &target(1.0), &settings).unwrap_err();
        assert_eq!(
            err,
            PolicyError::MissingAbilityData {
                ability: "wrath".to_string(),
                field: "damage".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_upgraded_field_is_an_error() {
        let settings = Settings::default();
        let mut actor = actor(2);
        actor.inventory.push(Item::new(settings.upgrade_item.clone()));
        let mut ability = wrath(1);
        ability.data.retain(|d| d.name != "damage_scepter");
        let err = lethal_damage(&actor, &ability, &target(1.0), &settings).unwrap_err();
        assert!(matches!(
            err,
            PolicyError::MissingAbilityData { ref field, .. } if field == "damage_scepter"
        ));
    }

    #[test]
    fn test_level_without_value_is_an_error() {
        let settings = Settings::default();
        let err = lethal_damage(&actor(1), &wrath(4), &target(1.0), &settings).unwrap_err();
        assert!(matches!(err, PolicyError::LevelOutOfRange { level: 4, .. }));

        let err = lethal_damage(&actor(1), &wrath(0), &target(1.0), &settings).unwrap_err();
        assert!(matches!(err, PolicyError::LevelOutOfRange { level: 0, .. }));
    }
}
