use serde::Deserialize;
use strum::{Display, EnumIter, EnumString};

/// Kinds of messages a [`TopicHub`](crate::TopicHub) dispatches.
///
/// The declaration order is the notification order when every topic is
/// notified at once.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Deserialize,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Topic {
    Log,
    Data,
    Mqtt,
}
