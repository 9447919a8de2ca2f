use serde::Deserialize;
use strum::{Display, EnumIter, EnumString};

pub trait QuackBehavior {
    fn quack(&self) -> &'static str;
}

pub struct Quack;

pub struct Squeak;

pub struct Silence;

impl QuackBehavior for Quack {
    fn quack(&self) -> &'static str {
        "Quack"
    }
}

impl QuackBehavior for Squeak {
    fn quack(&self) -> &'static str {
        "Squeak"
    }
}

impl QuackBehavior for Silence {
    fn quack(&self) -> &'static str {
        "<< Silence >>"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum QuackKind {
    Quack,
    Squeak,
    Silence,
}

impl QuackKind {
    pub fn behavior(self) -> Box<dyn QuackBehavior> {
        match self {
            QuackKind::Quack => Box::new(Quack),
            QuackKind::Squeak => Box::new(Squeak),
            QuackKind::Silence => Box::new(Silence),
        }
    }
}
