use std::fmt::{self, Debug};

use log::debug;
use serde::Deserialize;
use strum::{Display, EnumIter, EnumString};

use crate::behavior::weapon::{WeaponBehavior, WeaponKind};

use super::Actor;

/// Reported whenever a character switches weapons.
pub const WEAPON_CHANGE: &str = "Changing weapon";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum CharacterKind {
    King,
    Queen,
    Troll,
    Knight,
}

impl CharacterKind {
    pub fn default_weapon(self) -> WeaponKind {
        match self {
            CharacterKind::King => WeaponKind::Sword,
            CharacterKind::Queen => WeaponKind::Knife,
            CharacterKind::Troll => WeaponKind::Axe,
            CharacterKind::Knight => WeaponKind::BowAndArrow,
        }
    }

    fn title(self) -> &'static str {
        match self {
            CharacterKind::King => "King",
            CharacterKind::Queen => "Queen",
            CharacterKind::Troll => "Troll",
            CharacterKind::Knight => "Knight",
        }
    }
}

pub struct Character {
    kind: CharacterKind,
    weapon: Box<dyn WeaponBehavior>,
}

impl Character {
    pub fn new(kind: CharacterKind, weapon: Box<dyn WeaponBehavior>) -> Self {
        Character { kind, weapon }
    }

    pub fn of_kind(kind: CharacterKind) -> Self {
        Self::new(kind, kind.default_weapon().behavior())
    }

    pub fn kind(&self) -> CharacterKind {
        self.kind
    }

    pub fn fight(&self) -> &'static str {
        self.weapon.use_weapon()
    }

    /// Replaces the weapon, returning the line announcing the change.
    pub fn set_weapon(&mut self, weapon: Box<dyn WeaponBehavior>) -> &'static str {
        debug!("{} changes weapon", self.kind.title());
        self.weapon = weapon;
        WEAPON_CHANGE
    }
}

impl Actor for Character {
    fn banner(&self) -> String {
        // The knight's banner is one dash narrower on each side.
        let rule = match self.kind {
            CharacterKind::Knight => "--------",
            _ => "---------",
        };
        format!("{rule} {} {rule}", self.kind.title())
    }

    fn display(&self) -> &'static str {
        match self.kind {
            CharacterKind::King => "I'm King",
            CharacterKind::Queen => "I'm Queen",
            CharacterKind::Troll => "I'm Troll",
            CharacterKind::Knight => "I'm Knight",
        }
    }
}

impl Debug for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Character")
            .field("kind", &self.kind)
            .field("weapon", &self.fight())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use strum::IntoEnumIterator;

    use crate::{actor::Actor, behavior::weapon::WeaponBehavior, WeaponKind};

    use super::{Character, CharacterKind};

    mock! {
        Blade {}

        impl WeaponBehavior for Blade {
            fn use_weapon(&self) -> &'static str;
        }
    }

    #[test]
    fn test_character_of_kind_fights_with_default_weapon() {
        for kind in CharacterKind::iter() {
            let character = Character::of_kind(kind);
            assert_eq!(
                kind.default_weapon().behavior().use_weapon(),
                character.fight(),
                "{kind} should start with its own weapon"
            );
        }
    }

    #[test]
    fn test_character_set_weapon() {
        // Given
        let mut king = Character::of_kind(CharacterKind::King);
        assert_eq!("I'm fighting with sword!", king.fight());

        // When
        let report = king.set_weapon(WeaponKind::Axe.behavior());

        // Then
        assert_eq!("Changing weapon", report);
        assert_eq!("I'm fighting with axe!", king.fight());
        assert_eq!(CharacterKind::King, king.kind());
    }

    #[test]
    fn test_character_fight_delegates_to_weapon() {
        // Given
        let mut blade = MockBlade::new();
        blade.expect_use_weapon().times(1).return_const("slash");
        let troll = Character::new(CharacterKind::Troll, Box::new(blade));

        // When
        let result = troll.fight();

        // Then
        assert_eq!("slash", result);
    }

    #[test]
    fn test_character_introduction() {
        let queen = Character::of_kind(CharacterKind::Queen);
        assert_eq!("--------- Queen ---------", queen.banner());
        assert_eq!("I'm Queen", queen.display());
    }

    #[test]
    fn test_character_banners() {
        assert_eq!(
            vec![
                "--------- King ---------",
                "--------- Queen ---------",
                "--------- Troll ---------",
                "-------- Knight --------",
            ],
            CharacterKind::iter()
                .map(|kind| Character::of_kind(kind).banner())
                .collect::<Vec<_>>()
        );
    }
}
