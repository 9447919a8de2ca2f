use std::str::FromStr;

use config::{Config, Environment, File, FileFormat};
use log::LevelFilter;
use observer::Topic;
use serde::Deserialize;
use strategy::{CharacterKind, DuckKind, FlyKind, QuackKind, WeaponKind};
use validator::Validate;

use crate::AppError;

const DEFAULT_CONFIG: &str = include_str!("../../resources/config/default.toml");
const DEFAULT_CONFIG_PREFIX: &str = "DEMO";

/// A duck introduced with its stock behaviors, then given new ones.
#[derive(Debug, Deserialize, Clone)]
pub struct DuckScenario {
    pub kind: DuckKind,
    pub fly: Option<FlyKind>,
    pub quack: Option<QuackKind>,
}

/// A character fighting with its own weapon, then with `weapon`.
#[derive(Debug, Deserialize, Clone)]
pub struct CharacterScenario {
    pub kind: CharacterKind,
    pub weapon: WeaponKind,
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct BroadcastScenario {
    #[validate(length(min = 1))]
    pub observers: Vec<String>,
    #[serde(default)]
    pub removals: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Validate)]
pub struct SubscriptionConfig {
    #[validate(length(min = 1))]
    pub observer: String,
    pub topic: Topic,
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct TopicScenario {
    #[validate(nested)]
    pub subscriptions: Vec<SubscriptionConfig>,
    #[serde(default)]
    #[validate(nested)]
    pub unsubscriptions: Vec<SubscriptionConfig>,
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct DemoConfig {
    pub log_level: String,
    #[serde(default)]
    pub ducks: Vec<DuckScenario>,
    #[serde(default)]
    pub characters: Vec<CharacterScenario>,
    #[validate(nested)]
    pub broadcast: BroadcastScenario,
    #[validate(nested)]
    pub topics: TopicScenario,
    #[validate(nested)]
    pub registry: TopicScenario,
}

impl DemoConfig {
    pub fn new() -> Result<Self, AppError> {
        let config: DemoConfig = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(Environment::with_prefix(DEFAULT_CONFIG_PREFIX))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        config.level_filter()?;
        Ok(config)
    }

    pub fn level_filter(&self) -> Result<LevelFilter, AppError> {
        LevelFilter::from_str(&self.log_level).map_err(AppError::from)
    }
}
