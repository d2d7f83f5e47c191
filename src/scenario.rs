//! In-memory host world
//!
//! Stands in for the game client: owns entity snapshots, applies cast
//! commands and advances cooldowns and health over time. Generation is seeded
//! so a run can be replayed.

use std::path::Path;

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{BASE_DAMAGE_FIELD, MAX_HERO_LEVEL, UPGRADE_ITEM, UPGRADED_DAMAGE_FIELD};
use crate::error::{LoadError, PolicyError};
use crate::policy::{
    Ability, AbilityCaster, AbilityData, AbilitySlot, AbilityState, EntityId, EntitySnapshot,
    Item, Team, WorldView, is_valid_target, lethal_damage,
};
use crate::settings::Settings;

/// Half-width of the square map generated heroes are placed in
pub const MAP_HALF_EXTENT: f32 = 7000.0;

const ACTOR_TEAM: Team = Team(2);
const ENEMY_TEAM: Team = Team(3);
const ENEMY_COUNT: u32 = 5;
const ALLY_COUNT: u32 = 4;

/// A command captured from the policy, applied later by [`Scenario::apply`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CastCommand {
    Untargeted { slot: AbilitySlot },
    Targeted { slot: AbilitySlot, target: EntityId },
}

impl AbilityCaster for Vec<CastCommand> {
    fn use_ability(&mut self, slot: AbilitySlot) {
        self.push(CastCommand::Untargeted { slot });
    }

    fn use_ability_on(&mut self, slot: AbilitySlot, target: EntityId) {
        self.push(CastCommand::Targeted { slot, target });
    }
}

/// Complete host state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Seed the scenario was generated from
    pub seed: u64,
    /// Simulation tick counter
    #[serde(default)]
    pub time_ticks: u64,
    pub actor: EntitySnapshot,
    /// Every hero except the actor (sorted by id)
    pub heroes: Vec<EntitySnapshot>,
}

impl WorldView for Scenario {
    fn actor(&self) -> &EntitySnapshot {
        &self.actor
    }

    fn heroes(&self) -> &[EntitySnapshot] {
        &self.heroes
    }
}

impl Scenario {
    pub fn new(seed: u64, actor: EntitySnapshot, heroes: Vec<EntitySnapshot>) -> Self {
        let mut scenario = Self {
            seed,
            time_ticks: 0,
            actor,
            heroes,
        };
        scenario.normalize_order();
        scenario
    }

    /// Generate a match-like scenario from a seed
    ///
    /// One actor holding the area ultimate, a few allies, and enemies at
    /// assorted health that are bleeding out slowly.
    pub fn generate(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);

        let position = random_position(&mut rng);
        let mut actor = EntitySnapshot::new(EntityId(1), "actor", ACTOR_TEAM, position);
        actor.level = rng.random_range(6..=MAX_HERO_LEVEL);
        actor.abilities.push(area_ultimate(actor.level));
        if rng.random_bool(0.4) {
            actor.inventory.push(Item::new(UPGRADE_ITEM));
        }

        let mut heroes = Vec::new();
        let mut next_id = 2;
        for (team, count) in [(ACTOR_TEAM, ALLY_COUNT), (ENEMY_TEAM, ENEMY_COUNT)] {
            for _ in 0..count {
                let id = EntityId(next_id);
                next_id += 1;
                let position = random_position(&mut rng);
                let mut hero = EntitySnapshot::new(id, format!("hero_{}", id.0), team, position);
                hero.level = rng.random_range(1..=MAX_HERO_LEVEL);
                hero.max_health = rng.random_range(500.0..2500.0);
                hero.health = hero.max_health * rng.random_range(0.15..1.0);
                hero.health_regen = rng.random_range(-80.0..5.0);
                hero.is_visible = rng.random_bool(0.8);
                heroes.push(hero);
            }
        }

        log::debug!(
            "Generated scenario seed={} actor level={} heroes={}",
            seed,
            actor.level,
            heroes.len()
        );
        Self::new(seed, actor, heroes)
    }

    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let mut scenario: Self = serde_json::from_str(json)?;
        scenario.normalize_order();
        Ok(scenario)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        let scenario = Self::from_json(&json)?;
        log::info!("Loaded scenario from {} (seed {})", path.display(), scenario.seed);
        Ok(scenario)
    }

    pub fn to_json(&self) -> Result<String, LoadError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Keep heroes sorted by id for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.heroes.sort_by_key(|h| h.id);
    }

    pub fn hero(&self, id: EntityId) -> Option<&EntitySnapshot> {
        self.heroes.iter().find(|h| h.id == id)
    }

    /// Enemies still alive
    pub fn living_enemies(&self) -> usize {
        self.heroes
            .iter()
            .filter(|h| h.team != self.actor.team && h.is_alive)
            .count()
    }

    /// Advance time by `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        self.time_ticks += 1;

        for ability in &mut self.actor.abilities {
            if ability.state == AbilityState::OnCooldown {
                ability.cooldown_remaining -= dt;
                if ability.cooldown_remaining <= 0.0 {
                    ability.cooldown_remaining = 0.0;
                    ability.state = AbilityState::Ready;
                    log::debug!("{} is ready", ability.name);
                }
            }
        }

        for hero in self.heroes.iter_mut().filter(|h| h.is_alive) {
            hero.health = (hero.health + hero.health_regen * dt).min(hero.max_health);
            if hero.health <= 0.0 {
                hero.health = 0.0;
                hero.is_alive = false;
                log::debug!("{} died before the cast", hero.name);
            }
        }
    }

    /// Execute a cast command against the current state
    ///
    /// Mirrors the client: commands for an ability that is not ready are
    /// dropped, untargeted casts hit every valid enemy. A targeted cast whose
    /// target is missing, not a valid enemy, or beyond cast range is dropped
    /// without starting the cooldown. Returns the heroes killed.
    pub fn apply(
        &mut self,
        command: CastCommand,
        settings: &Settings,
    ) -> Result<Vec<EntityId>, PolicyError> {
        let (slot, target) = match command {
            CastCommand::Untargeted { slot } => (slot, None),
            CastCommand::Targeted { slot, target } => (slot, Some(target)),
        };

        let ability = self
            .actor
            .ability(slot)
            .ok_or(PolicyError::MissingAbility { slot })?
            .clone();
        if !ability.is_ready() {
            log::debug!("Dropping {:?}: {} not ready", command, ability.name);
            return Ok(Vec::new());
        }

        let mut hits = Vec::new();
        match target {
            Some(id) => {
                let Some(hero) = self.hero(id).filter(|hero| {
                    is_valid_target(&self.actor, Some(*hero), Some(ability.cast_range), true)
                }) else {
                    log::debug!("Dropping {:?}: target not valid for {}", command, ability.name);
                    return Ok(Vec::new());
                };
                hits.push((hero.id, lethal_damage(&self.actor, &ability, hero, settings)?));
            }
            None => {
                for hero in &self.heroes {
                    if is_valid_target(&self.actor, Some(hero), None, true) {
                        let damage = lethal_damage(&self.actor, &ability, hero, settings)?;
                        hits.push((hero.id, damage));
                    }
                }
            }
        }

        if let Some(cast) = self.actor.ability_mut(slot) {
            cast.state = AbilityState::OnCooldown;
            cast.cooldown_remaining = cast.cooldown;
        }

        let mut killed = Vec::new();
        for (id, damage) in hits {
            let Some(hero) = self.heroes.iter_mut().find(|h| h.id == id) else {
                continue;
            };
            hero.health -= damage;
            if hero.health <= 0.0 {
                hero.health = 0.0;
                hero.is_alive = false;
                killed.push(id);
            }
        }
        Ok(killed)
    }
}

fn random_position(rng: &mut Pcg32) -> Vec3 {
    Vec3::new(
        rng.random_range(-MAP_HALF_EXTENT..MAP_HALF_EXTENT),
        rng.random_range(-MAP_HALF_EXTENT..MAP_HALF_EXTENT),
        rng.random_range(0.0..256.0),
    )
}

/// Global-range area ultimate with base and upgraded damage tables
fn area_ultimate(actor_level: u32) -> Ability {
    let mut ability = Ability::new(AbilitySlot::Ultimate, "thundergods_wrath");
    // Ranks unlock at hero levels 6, 12 and 18
    ability.level = (actor_level / 6).min(3);
    ability.cooldown = 90.0;
    // Global; kept finite so it survives JSON
    ability.cast_range = f32::MAX;
    ability
        .data
        .push(AbilityData::new(BASE_DAMAGE_FIELD, vec![225.0, 350.0, 475.0]));
    let upgraded = (0..MAX_HERO_LEVEL).map(|lvl| 400.0 + 10.0 * lvl as f32).collect();
    ability.data.push(AbilityData::new(UPGRADED_DAMAGE_FIELD, upgraded));
    ability
}
