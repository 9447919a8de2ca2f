use std::fmt::Display;

use common::subject_observer::SubscriptionError;
use log::debug;

use crate::partitions::Partitions;

/// Names of subscribers grouped by topic, without any dispatching.
pub struct TopicRegistry<T> {
    members: Partitions<T, String>,
}

impl<T> Default for TopicRegistry<T> {
    fn default() -> Self {
        Self {
            members: Partitions::default(),
        }
    }
}

impl<T> TopicRegistry<T>
where
    T: Ord + Copy + Display,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, topic: T, name: impl Into<String>) {
        let name = name.into();
        debug!("{name} registered on {topic}");
        self.members.push(topic, name);
    }

    /// Names registered on `topic`, latest first; empty for unknown topics.
    pub fn members(&self, topic: T) -> Vec<&str> {
        self.search(topic).unwrap_or_default()
    }

    /// Like [`members`](Self::members) but tells an unknown topic apart.
    pub fn search(&self, topic: T) -> Option<Vec<&str>> {
        self.members
            .list(topic)
            .map(|list| list.iter().map(String::as_str).collect())
    }

    pub fn remove(&mut self, topic: T, name: &str) -> Result<(), SubscriptionError<T>> {
        self.members
            .remove_first(topic, |member| member == name)
            .map_err(|missing| missing.into_error(topic, name))?;
        debug!("{name} unregistered from {topic}");
        Ok(())
    }

    pub fn topics(&self) -> Vec<T> {
        self.members.topics().collect()
    }

    /// Number of known topics.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.len() == 0
    }
}
