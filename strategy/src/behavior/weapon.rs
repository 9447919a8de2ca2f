use serde::Deserialize;
use strum::{Display, EnumIter, EnumString};

pub trait WeaponBehavior {
    fn use_weapon(&self) -> &'static str;
}

pub struct Sword;

pub struct Knife;

pub struct BowAndArrow;

pub struct Axe;

impl WeaponBehavior for Sword {
    fn use_weapon(&self) -> &'static str {
        "I'm fighting with sword!"
    }
}

impl WeaponBehavior for Knife {
    fn use_weapon(&self) -> &'static str {
        "I'm fighting with knife!"
    }
}

impl WeaponBehavior for BowAndArrow {
    fn use_weapon(&self) -> &'static str {
        "I'm shooting with bow!"
    }
}

impl WeaponBehavior for Axe {
    fn use_weapon(&self) -> &'static str {
        "I'm fighting with axe!"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum WeaponKind {
    Sword,
    Knife,
    BowAndArrow,
    Axe,
}

impl WeaponKind {
    pub fn behavior(self) -> Box<dyn WeaponBehavior> {
        match self {
            WeaponKind::Sword => Box::new(Sword),
            WeaponKind::Knife => Box::new(Knife),
            WeaponKind::BowAndArrow => Box::new(BowAndArrow),
            WeaponKind::Axe => Box::new(Axe),
        }
    }
}
