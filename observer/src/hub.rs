use std::{
    fmt::{Debug, Display},
    rc::Rc,
};

use common::subject_observer::{Observer, Scope, SubscriptionError, TopicSubject};
use log::{debug, trace};

use crate::partitions::Partitions;

type Observers<S, T> = Partitions<T, Rc<dyn Observer<S, T>>>;

/// Subject dispatching to observers partitioned by topic.
///
/// An observer may be registered on any number of topics; each registration
/// is independent from the others.
pub struct TopicHub<T> {
    observers: Observers<Self, T>,
}

impl<T> Default for TopicHub<T> {
    fn default() -> Self {
        Self {
            observers: Partitions::default(),
        }
    }
}

impl<T> TopicHub<T>
where
    T: Ord + Copy,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Topics having been registered at least once, in notification order.
    pub fn topics(&self) -> Vec<T> {
        self.observers.topics().collect()
    }

    /// Names subscribed to `topic`, in notification order.
    pub fn subscribers(&self, topic: T) -> Vec<&str> {
        self.observers
            .list(topic)
            .map(|list| list.iter().map(|obs| obs.name()).collect())
            .unwrap_or_default()
    }

    /// Number of (topic, observer) registrations.
    pub fn subscription_count(&self) -> usize {
        self.observers.scoped(Scope::All).count()
    }
}

impl<T> TopicSubject<T> for TopicHub<T>
where
    T: Ord + Copy + Debug + Display,
{
    fn register_observer(&mut self, topic: T, observer: Rc<dyn Observer<Self, T>>) {
        debug!("{} added to subscription on {topic}", observer.name());
        self.observers.push(topic, observer);
    }

    fn unregister_observer(
        &mut self,
        topic: T,
        observer: &Rc<dyn Observer<Self, T>>,
    ) -> Result<(), SubscriptionError<T>> {
        let removed = self
            .observers
            .remove_first(topic, |obs| Rc::ptr_eq(obs, observer))
            .map_err(|missing| missing.into_error(topic, observer.name()))?;
        debug!("{} removed from {topic}", removed.name());
        Ok(())
    }

    fn notify_observers(&self, scope: Scope<T>) -> usize {
        let mut delivered = 0;
        for (topic, obs) in self.observers.scoped(scope) {
            trace!("Notifying {} on {topic}", obs.name());
            obs.update(self, topic);
            delivered += 1;
        }
        delivered
    }
}
