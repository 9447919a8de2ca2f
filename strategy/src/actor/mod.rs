mod character;
mod duck;

pub use character::{Character, CharacterKind};
pub use duck::{Duck, DuckKind};

/// Something holding swappable behaviors and able to introduce itself.
pub trait Actor {
    /// Heading printed when the actor enters a scenario.
    fn banner(&self) -> String;

    fn display(&self) -> &'static str;
}
