use std::collections::{BTreeMap, VecDeque};

use common::subject_observer::{Scope, SubscriptionError};

/// Why [`Partitions::remove_first`] found nothing to remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Missing {
    Topic,
    Entry,
}

impl Missing {
    pub(crate) fn into_error<T>(self, topic: T, name: &str) -> SubscriptionError<T> {
        match self {
            Missing::Topic => SubscriptionError::TopicNotFound(topic),
            Missing::Entry => SubscriptionError::ObserverNotFound {
                name: name.to_string(),
                topic,
            },
        }
    }
}

/// Ordered lists of values keyed by topic.
///
/// Topics iterate in ascending order and values are pushed at the head of
/// their list, so a list reads from the latest insertion to the oldest.
/// A list is kept, possibly empty, once its topic has been used.
pub(crate) struct Partitions<T, V> {
    lists: BTreeMap<T, VecDeque<V>>,
}

impl<T, V> Default for Partitions<T, V> {
    fn default() -> Self {
        Self {
            lists: BTreeMap::new(),
        }
    }
}

impl<T, V> Partitions<T, V>
where
    T: Ord + Copy,
{
    pub(crate) fn push(&mut self, topic: T, value: V) {
        self.lists.entry(topic).or_default().push_front(value);
    }

    pub(crate) fn remove_first<F>(&mut self, topic: T, matches: F) -> Result<V, Missing>
    where
        F: Fn(&V) -> bool,
    {
        let list = self.lists.get_mut(&topic).ok_or(Missing::Topic)?;
        let position = list.iter().position(matches).ok_or(Missing::Entry)?;
        list.remove(position).ok_or(Missing::Entry)
    }

    pub(crate) fn list(&self, topic: T) -> Option<&VecDeque<V>> {
        self.lists.get(&topic)
    }

    pub(crate) fn scoped(&self, scope: Scope<T>) -> impl Iterator<Item = (T, &V)> + '_ {
        self.lists
            .iter()
            .filter(move |(topic, _)| scope.covers(topic))
            .flat_map(|(&topic, list)| list.iter().map(move |value| (topic, value)))
    }

    pub(crate) fn topics(&self) -> impl Iterator<Item = T> + '_ {
        self.lists.keys().copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.lists.len()
    }
}
