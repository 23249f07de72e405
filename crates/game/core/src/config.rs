/// Tunable simulation parameters.
///
/// Every field has a default so partial config files load; missing keys fall
/// back to [`GameConfig::default`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Shadow-casting radius for the player's view.
    pub fov_radius: i32,

    pub player_max_hp: u32,
    pub melee_enemy_hp: u32,
    pub ranged_enemy_hp: u32,
    pub melee_enemy_damage: u32,
    pub ranged_enemy_damage: u32,
    pub ranged_attack_range: i32,

    /// Dormant enemies wake up when the player is strictly closer than this
    /// (Manhattan distance).
    pub alert_radius: i32,
    /// Probability that a dormant enemy skips its wander step.
    pub dormant_idle_chance: f32,
    /// Ranged enemy in cover with a shot: probability to fire.
    pub cover_fire_chance: f32,
    /// Ranged enemy in cover with a shot that did not fire: probability to step out.
    pub step_out_chance: f32,
    /// Ranged enemy in the open with a shot: probability to fire.
    pub exposed_fire_chance: f32,
    /// Ranged enemy in cover without a shot: probability to hold and wait.
    pub ambush_chance: f32,
    /// Chebyshev radius searched for a better cover cell.
    pub cover_search_radius: i32,

    /// Node expansions before the pathfinder reports "no path".
    pub path_max_expansions: usize,

    /// Damage multiplier applied when the target is in cover (result floored).
    pub cover_damage_factor: f32,
    /// Maximum Euclidean reticle distance for melee weapons.
    pub melee_reach: f32,

    /// Probability that a kill or a destroyed box drops loot.
    pub loot_chance: f32,
    pub max_mods_per_weapon: usize,

    pub xp_melee_kill: u32,
    pub xp_ranged_kill: u32,
    pub xp_first_level: u32,
    pub xp_growth: f32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Mod slots per weapon instance (storage bound).
    pub const MAX_MOD_SLOTS: usize = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_FOV_RADIUS: i32 = 15;
    pub const DEFAULT_ALERT_RADIUS: i32 = 8;
    pub const DEFAULT_PATH_MAX_EXPANSIONS: usize = 500;
    pub const DEFAULT_COVER_DAMAGE_FACTOR: f32 = 0.5;

    pub fn new() -> Self {
        Self {
            fov_radius: Self::DEFAULT_FOV_RADIUS,
            player_max_hp: 100,
            melee_enemy_hp: 3,
            ranged_enemy_hp: 2,
            melee_enemy_damage: 10,
            ranged_enemy_damage: 5,
            ranged_attack_range: 6,
            alert_radius: Self::DEFAULT_ALERT_RADIUS,
            dormant_idle_chance: 0.5,
            cover_fire_chance: 0.8,
            step_out_chance: 0.3,
            exposed_fire_chance: 0.5,
            ambush_chance: 0.2,
            cover_search_radius: 5,
            path_max_expansions: Self::DEFAULT_PATH_MAX_EXPANSIONS,
            cover_damage_factor: Self::DEFAULT_COVER_DAMAGE_FACTOR,
            melee_reach: 1.5,
            loot_chance: 0.35,
            max_mods_per_weapon: Self::MAX_MOD_SLOTS,
            xp_melee_kill: 15,
            xp_ranged_kill: 20,
            xp_first_level: 100,
            xp_growth: 1.5,
        }
    }

    pub fn with_fov_radius(mut self, fov_radius: i32) -> Self {
        self.fov_radius = fov_radius;
        self
    }

    pub fn with_alert_radius(mut self, alert_radius: i32) -> Self {
        self.alert_radius = alert_radius;
        self
    }

    /// Mod slot count actually available, bounded by storage.
    pub fn mod_slots(&self) -> usize {
        self.max_mods_per_weapon.min(Self::MAX_MOD_SLOTS)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
