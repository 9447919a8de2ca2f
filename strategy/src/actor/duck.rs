use std::fmt::{self, Debug};

use log::debug;
use serde::Deserialize;
use strum::{Display, EnumIter, EnumString};

use crate::behavior::{
    fly::{FlyBehavior, FlyKind},
    quack::{QuackBehavior, QuackKind},
};

use super::Actor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum DuckKind {
    Mallard,
    Model,
}

impl DuckKind {
    fn default_fly(self) -> FlyKind {
        match self {
            DuckKind::Mallard => FlyKind::WithWings,
            DuckKind::Model => FlyKind::NoWay,
        }
    }

    fn default_quack(self) -> QuackKind {
        match self {
            DuckKind::Mallard => QuackKind::Quack,
            DuckKind::Model => QuackKind::Silence,
        }
    }
}

pub struct Duck {
    kind: DuckKind,
    fly_behavior: Box<dyn FlyBehavior>,
    quack_behavior: Box<dyn QuackBehavior>,
}

impl Duck {
    pub fn new(
        kind: DuckKind,
        fly_behavior: Box<dyn FlyBehavior>,
        quack_behavior: Box<dyn QuackBehavior>,
    ) -> Self {
        Duck {
            kind,
            fly_behavior,
            quack_behavior,
        }
    }

    /// Duck equipped with the stock behaviors of its kind.
    pub fn of_kind(kind: DuckKind) -> Self {
        Self::new(
            kind,
            kind.default_fly().behavior(),
            kind.default_quack().behavior(),
        )
    }

    pub fn mallard() -> Self {
        Self::of_kind(DuckKind::Mallard)
    }

    pub fn model() -> Self {
        Self::of_kind(DuckKind::Model)
    }

    pub fn kind(&self) -> DuckKind {
        self.kind
    }

    pub fn perform_fly(&self) -> &'static str {
        self.fly_behavior.fly()
    }

    pub fn perform_quack(&self) -> &'static str {
        self.quack_behavior.quack()
    }

    pub fn set_fly_behavior(&mut self, fly_behavior: Box<dyn FlyBehavior>) {
        debug!("{} duck changes the way it flies", self.kind);
        self.fly_behavior = fly_behavior;
    }

    pub fn set_quack_behavior(&mut self, quack_behavior: Box<dyn QuackBehavior>) {
        debug!("{} duck changes the way it quacks", self.kind);
        self.quack_behavior = quack_behavior;
    }
}

impl Actor for Duck {
    fn banner(&self) -> String {
        let title = match self.kind {
            DuckKind::Mallard => "MallardDuck",
            DuckKind::Model => "ModelDuck",
        };
        format!("-------- {title} --------")
    }

    fn display(&self) -> &'static str {
        match self.kind {
            DuckKind::Mallard => "I'm a real Mallard duck",
            DuckKind::Model => "I'm a model duck",
        }
    }
}

impl Debug for Duck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Duck")
            .field("kind", &self.kind)
            .field("fly", &self.perform_fly())
            .field("quack", &self.perform_quack())
            .finish()
    }
}
