use crate::sounds::Cue;
use crate::state::{Tool, Weapon};

/// Fixed combat numbers for one weapon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponStats {
    pub damage: i32,
    /// Reach in pixels, inclusive.
    pub range: f32,
    pub cue: Cue,
}

impl Weapon {
    pub fn stats(self) -> WeaponStats {
        match self {
            Weapon::Tool(Tool::Pickaxe) => WeaponStats { damage: 30, range: 80.0, cue: Cue::Axe },
            Weapon::Tool(Tool::Axe) => WeaponStats { damage: 40, range: 70.0, cue: Cue::Axe },
            Weapon::Tool(Tool::Shovel) => WeaponStats { damage: 30, range: 100.0, cue: Cue::Shovel },
            Weapon::Sword => WeaponStats { damage: 60, range: 50.0, cue: Cue::Sword },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_values() {
        let sword = Weapon::Sword.stats();
        assert_eq!((sword.damage, sword.range), (60, 50.0));
        let shovel = Weapon::Tool(Tool::Shovel).stats();
        assert_eq!((shovel.damage, shovel.range), (30, 100.0));
        // Pickaxe has no sound of its own.
        assert_eq!(Weapon::Tool(Tool::Pickaxe).stats().cue, Cue::Axe);
    }
}
