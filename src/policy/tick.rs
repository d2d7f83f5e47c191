//! Per-tick lethal-cast decision
//!
//! Called once per host frame. Reads the snapshot, issues at most one cast.

use super::damage::lethal_damage;
use super::entity::EntityId;
use super::target::{cast, is_valid_target};
use super::world::{AbilityCaster, WorldView};
use crate::error::PolicyError;
use crate::settings::Settings;

/// What a tick decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Ability on cooldown, out of mana or unlearned
    NotReady,
    /// Ready, but nobody would die
    NoLethalTarget,
    /// Cast issued; `target` is the first hero found lethal
    Cast { target: EntityId },
}

/// Casts the configured area ability whenever it would kill a visible enemy
#[derive(Debug, Clone, Default)]
pub struct LethalCastPolicy {
    settings: Settings,
}

impl LethalCastPolicy {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Evaluate one tick
    ///
    /// Heroes are scanned in the order the host returns them. The first valid
    /// enemy whose projected damage exceeds its health triggers one untargeted
    /// cast; the ability is then on cooldown, so the scan stops there.
    ///
    /// # Errors
    ///
    /// Missing ability or damage data. The host should log and skip the tick.
    pub fn on_tick<W, C>(&self, world: &W, caster: &mut C) -> Result<TickOutcome, PolicyError>
    where
        W: WorldView + ?Sized,
        C: AbilityCaster + ?Sized,
    {
        let actor = world.actor();
        let slot = self.settings.ability_slot;
        let ability = actor
            .ability(slot)
            .ok_or(PolicyError::MissingAbility { slot })?;

        if !ability.is_ready() {
            return Ok(TickOutcome::NotReady);
        }

        for hero in world.heroes() {
            if !is_valid_target(actor, Some(hero), self.settings.max_range, true) {
                continue;
            }

            let damage = lethal_damage(actor, ability, hero, &self.settings)?;
            if damage > hero.health {
                log::info!(
                    "{} would deal {:.0} to {} ({:.0} hp), casting",
                    ability.name,
                    damage,
                    hero.name,
                    hero.health
                );
                if cast(ability, caster) {
                    return Ok(TickOutcome::Cast { target: hero.id });
                }
            }
        }

        log::trace!("No lethal target among {} heroes", world.heroes().len());
        Ok(TickOutcome::NoLethalTarget)
    }
}
