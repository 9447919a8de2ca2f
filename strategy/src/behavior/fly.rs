use serde::Deserialize;
use strum::{Display, EnumIter, EnumString};

pub trait FlyBehavior {
    fn fly(&self) -> &'static str;
}

pub struct FlyWithWings;

pub struct FlyNoWay;

pub struct FlyRocketPowered;

impl FlyBehavior for FlyWithWings {
    fn fly(&self) -> &'static str {
        "I'm flying!"
    }
}

impl FlyBehavior for FlyNoWay {
    fn fly(&self) -> &'static str {
        "I can't fly"
    }
}

impl FlyBehavior for FlyRocketPowered {
    fn fly(&self) -> &'static str {
        "I'm flying with a rocket!"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum FlyKind {
    WithWings,
    NoWay,
    RocketPowered,
}

impl FlyKind {
    pub fn behavior(self) -> Box<dyn FlyBehavior> {
        match self {
            FlyKind::WithWings => Box::new(FlyWithWings),
            FlyKind::NoWay => Box::new(FlyNoWay),
            FlyKind::RocketPowered => Box::new(FlyRocketPowered),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::FlyKind;

    #[test]
    fn test_fly_kind_behavior() {
        assert_eq!("I'm flying!", FlyKind::WithWings.behavior().fly());
        assert_eq!("I can't fly", FlyKind::NoWay.behavior().fly());
        assert_eq!(
            "I'm flying with a rocket!",
            FlyKind::RocketPowered.behavior().fly()
        );
    }

    #[test]
    fn test_fly_kind_from_str() {
        // When
        let result = FlyKind::from_str("rocket-powered");

        // Then
        assert_eq!(Ok(FlyKind::RocketPowered), result);
        assert!(
            FlyKind::from_str("jet").is_err(),
            "Should reject unknown fly behaviors"
        );
    }
}
