//! Read-only entity snapshots supplied by the host each tick

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::consts::BASE_MAGIC_RESIST_MULTIPLIER;
use crate::geometry::{
    planar_distance, planar_distance_squared, spatial_distance, spatial_distance_squared, to_2d,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Team(pub u8);

/// Ability slot on the actor's spellbook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilitySlot {
    First,
    Second,
    Third,
    Ultimate,
}

/// Cast readiness as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilityState {
    Ready,
    OnCooldown,
    NoMana,
}

/// Named per-level values (damage, radius, ...) attached to an ability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityData {
    pub name: String,
    pub values: Vec<f32>,
}

impl AbilityData {
    pub fn new(name: impl Into<String>, values: Vec<f32>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Value at a 0-based level index
    ///
    /// A field with a single value applies at every level.
    pub fn value(&self, index: usize) -> Option<f32> {
        match self.values.as_slice() {
            [single] => Some(*single),
            values => values.get(index).copied(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    pub slot: AbilitySlot,
    pub name: String,
    pub state: AbilityState,
    /// Rank; 0 means not learned
    pub level: u32,
    pub cast_range: f32,
    /// Full cooldown in seconds
    pub cooldown: f32,
    /// Seconds until ready again (host-maintained)
    #[serde(default)]
    pub cooldown_remaining: f32,
    #[serde(default)]
    pub data: Vec<AbilityData>,
}

impl Ability {
    pub fn new(slot: AbilitySlot, name: impl Into<String>) -> Self {
        Self {
            slot,
            name: name.into(),
            state: AbilityState::Ready,
            level: 1,
            cast_range: 0.0,
            cooldown: 0.0,
            cooldown_remaining: 0.0,
            data: Vec::new(),
        }
    }

    /// Off cooldown and learned
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.state == AbilityState::Ready && self.level > 0
    }

    pub fn data(&self, name: &str) -> Option<&AbilityData> {
        self.data.iter().find(|d| d.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Class name, e.g. "item_blink"
    pub name: String,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// One entity as seen this tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    pub id: EntityId,
    pub name: String,
    /// Rendered position
    pub position: Vec3,
    /// Latency-compensated position; authoritative for the actor itself
    pub network_position: Vec3,
    pub health: f32,
    pub max_health: f32,
    /// Health change per second (negative while taking damage over time)
    #[serde(default)]
    pub health_regen: f32,
    pub team: Team,
    pub level: u32,
    pub is_valid: bool,
    pub is_alive: bool,
    pub is_visible: bool,
    pub is_spawned: bool,
    /// Fraction of magic damage that gets through, in [0, 1]
    pub magic_damage_resist: f32,
    #[serde(default)]
    pub abilities: Vec<Ability>,
    #[serde(default)]
    pub inventory: Vec<Item>,
}

impl EntitySnapshot {
    /// A live, visible, level 1 entity at `position` with full health
    pub fn new(id: EntityId, name: impl Into<String>, team: Team, position: Vec3) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            network_position: position,
            health: 600.0,
            max_health: 600.0,
            health_regen: 0.0,
            team,
            level: 1,
            is_valid: true,
            is_alive: true,
            is_visible: true,
            is_spawned: true,
            magic_damage_resist: BASE_MAGIC_RESIST_MULTIPLIER,
            abilities: Vec::new(),
            inventory: Vec::new(),
        }
    }

    /// Valid, spawned, alive and visible
    #[inline]
    pub fn is_targetable(&self) -> bool {
        self.is_valid && self.is_alive && self.is_visible && self.is_spawned
    }

    pub fn ability(&self, slot: AbilitySlot) -> Option<&Ability> {
        self.abilities.iter().find(|a| a.slot == slot)
    }

    pub fn ability_mut(&mut self, slot: AbilitySlot) -> Option<&mut Ability> {
        self.abilities.iter_mut().find(|a| a.slot == slot)
    }

    pub fn has_item(&self, name: &str) -> bool {
        self.inventory.iter().any(|item| item.name == name)
    }

    /// Planar distance from our network position to `other`'s position
    pub fn distance_to(&self, other: &EntitySnapshot) -> f32 {
        planar_distance(self.network_position, other.position)
    }

    pub fn distance_squared_to(&self, other: &EntitySnapshot) -> f32 {
        planar_distance_squared(self.network_position, other.position)
    }

    /// Planar distance from our network position to a world point
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        planar_distance(self.network_position, point)
    }

    /// Planar distance from our network position to a point already on the plane
    pub fn distance_to_point_2d(&self, point: Vec2) -> f32 {
        to_2d(self.network_position).distance(point)
    }

    /// 3D distance between rendered positions
    pub fn distance_3d_to(&self, other: &EntitySnapshot) -> f32 {
        spatial_distance(self.position, other.position)
    }

    pub fn distance_3d_squared_to(&self, other: &EntitySnapshot) -> f32 {
        spatial_distance_squared(self.position, other.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ability_readiness() {
        let mut ability = Ability::new(AbilitySlot::Ultimate, "thunder");
        assert!(ability.is_ready());

        ability.level = 0;
        assert!(!ability.is_ready());

        ability.level = 2;
        ability.state = AbilityState::OnCooldown;
        assert!(!ability.is_ready());

        ability.state = AbilityState::NoMana;
        assert!(!ability.is_ready());
    }

    #[test]
    fn test_ability_data_lookup() {
        let mut ability = Ability::new(AbilitySlot::Ultimate, "thunder");
        ability.data.push(AbilityData::new("damage", vec![100.0, 200.0, 300.0]));
        ability.data.push(AbilityData::new("radius", vec![900.0]));

        let damage = ability.data("damage").expect("damage field");
        assert_eq!(damage.value(0), Some(100.0));
        assert_eq!(damage.value(2), Some(300.0));
        assert_eq!(damage.value(3), None);

        // Single-valued fields apply at every level
        assert_eq!(ability.data("radius").and_then(|d| d.value(5)), Some(900.0));
        assert!(ability.data("missing").is_none());
    }

    #[test]
    fn test_entity_distances_use_network_position_for_self() {
        let mut me = EntitySnapshot::new(EntityId(1), "me", Team(2), Vec3::new(100.0, 0.0, 0.0));
        me.network_position = Vec3::new(0.0, 0.0, 0.0);
        let mut other =
            EntitySnapshot::new(EntityId(2), "other", Team(3), Vec3::new(3.0, 4.0, 50.0));
        other.network_position = Vec3::new(1000.0, 1000.0, 0.0);

        assert_eq!(me.distance_to(&other), 5.0);
        assert_eq!(me.distance_squared_to(&other), 25.0);
        assert_eq!(me.distance_to_point(Vec3::new(0.0, 12.0, 99.0)), 12.0);
        assert_eq!(me.distance_to_point_2d(Vec2::new(-6.0, 8.0)), 10.0);
        // 3D distance uses rendered positions on both sides
        let expected = Vec3::new(100.0, 0.0, 0.0).distance(Vec3::new(3.0, 4.0, 50.0));
        assert_eq!(me.distance_3d_to(&other), expected);
        // 97^2 + 4^2 + 50^2
        assert_eq!(me.distance_3d_squared_to(&other), 11925.0);
    }

    #[test]
    fn test_inventory_and_spellbook() {
        let mut me = EntitySnapshot::new(EntityId(1), "me", Team(2), Vec3::ONE);
        assert!(!me.has_item("item_blink"));
        me.inventory.push(Item::new("item_blink"));
        assert!(me.has_item("item_blink"));

        me.abilities.push(Ability::new(AbilitySlot::First, "arc"));
        assert!(me.ability(AbilitySlot::First).is_some());
        assert!(me.ability(AbilitySlot::Ultimate).is_none());
        me.ability_mut(AbilitySlot::First).expect("learned").level = 4;
        assert_eq!(me.ability(AbilitySlot::First).map(|a| a.level), Some(4));
    }

    #[test]
    fn test_targetable_flags() {
        let mut e = EntitySnapshot::new(EntityId(7), "e", Team(3), Vec3::ONE);
        assert!(e.is_targetable());
        e.is_spawned = false;
        assert!(!e.is_targetable());
    }
}
