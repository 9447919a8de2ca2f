use std::rc::Rc;

use thiserror::Error;

pub trait Observer<S: ?Sized, E> {
    fn name(&self) -> &str;

    fn update(&self, source: &S, event: E);
}

/// A subject keeping a single list of observers.
pub trait Subject<E: Clone> {
    fn register_observer(&mut self, observer: Rc<dyn Observer<Self, E>>);

    /// Returns `false` when the observer was not registered.
    fn unregister_observer(&mut self, observer: &Rc<dyn Observer<Self, E>>) -> bool;

    fn notify_observers(&self, event: E);
}

/// Which partitions of a [`TopicSubject`] a notification reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope<T> {
    All,
    Only(T),
}

impl<T: PartialEq> Scope<T> {
    pub fn covers(&self, topic: &T) -> bool {
        match self {
            Scope::All => true,
            Scope::Only(only) => only == topic,
        }
    }
}

impl<T> From<T> for Scope<T> {
    fn from(topic: T) -> Self {
        Scope::Only(topic)
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SubscriptionError<T> {
    #[error("Topic {0} not found")]
    TopicNotFound(T),
    #[error("{name} not found in topic {topic}")]
    ObserverNotFound { name: String, topic: T },
}

/// A subject keeping one list of observers per topic.
///
/// Observers are told which topic they were reached through, so a single
/// observer registered on several topics can tell the notifications apart.
pub trait TopicSubject<T> {
    fn register_observer(&mut self, topic: T, observer: Rc<dyn Observer<Self, T>>);

    fn unregister_observer(
        &mut self,
        topic: T,
        observer: &Rc<dyn Observer<Self, T>>,
    ) -> Result<(), SubscriptionError<T>>;

    /// Returns the number of notifications delivered.
    fn notify_observers(&self, scope: Scope<T>) -> usize;
}
