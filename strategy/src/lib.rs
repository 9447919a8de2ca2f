pub mod actor;
pub mod behavior;

pub use actor::{Actor, Character, CharacterKind, Duck, DuckKind};
pub use behavior::{
    fly::{FlyBehavior, FlyKind},
    quack::{QuackBehavior, QuackKind},
    weapon::{WeaponBehavior, WeaponKind},
};
