/// How a weapon delivers its damage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FireMode {
    /// Instant straight-line trace.
    Hitscan,
    /// Travels to an impact cell, optionally exploding there.
    Projectile,
    /// Strikes the adjacent cell toward the reticle.
    Melee,
}

/// Ammunition pools held by the player.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::EnumIter, strum::Display,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AmmoKind {
    #[strum(to_string = "9mm")]
    NineMil,
    #[strum(to_string = "shells")]
    Shells,
    #[strum(to_string = "7.62mm")]
    Rifle,
    #[strum(to_string = "rocket")]
    Rocket,
    #[strum(to_string = "grenade")]
    Grenade,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AreaEffect {
    /// Manhattan radius around the impact cell.
    pub radius: i32,
    /// Damage dealt to everything in the radius except the impact occupant.
    pub damage: u32,
}

/// Immutable weapon template.
///
/// Instances carried by the player wrap a definition in
/// [`EquippedWeapon`](super::EquippedWeapon) together with mods and a loaded
/// magazine.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponDefinition {
    pub name: String,
    pub damage: u32,
    pub range: u32,
    pub magazine_size: u32,
    /// `None` for melee weapons, which never consume rounds.
    #[cfg_attr(feature = "serde", serde(default))]
    pub ammo: Option<AmmoKind>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub pellets: Option<u32>,
    /// Angular jitter in radians applied per pellet.
    #[cfg_attr(feature = "serde", serde(default))]
    pub spread: Option<f32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub area: Option<AreaEffect>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub burst: Option<u32>,
    pub mode: FireMode,
}

impl WeaponDefinition {
    pub fn new(name: impl Into<String>, mode: FireMode, damage: u32, range: u32) -> Self {
        Self {
            name: name.into(),
            damage,
            range,
            magazine_size: 0,
            ammo: None,
            pellets: None,
            spread: None,
            area: None,
            burst: None,
            mode,
        }
    }

    pub fn with_magazine(mut self, magazine_size: u32, ammo: AmmoKind) -> Self {
        self.magazine_size = magazine_size;
        self.ammo = Some(ammo);
        self
    }

    pub fn with_pellets(mut self, pellets: u32, spread: f32) -> Self {
        self.pellets = Some(pellets);
        self.spread = Some(spread);
        self
    }

    pub fn with_area(mut self, radius: i32, damage: u32) -> Self {
        self.area = Some(AreaEffect { radius, damage });
        self
    }

    pub fn with_burst(mut self, burst: u32) -> Self {
        self.burst = Some(burst);
        self
    }

    pub fn is_melee(&self) -> bool {
        self.mode == FireMode::Melee
    }
}
