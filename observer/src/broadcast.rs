use std::{collections::VecDeque, fmt::Debug, rc::Rc};

use common::subject_observer::{Observer, Subject};
use log::{debug, trace};

type Observers<S, E> = VecDeque<Rc<dyn Observer<S, E>>>;

/// Subject notifying one list of observers, latest registration first.
pub struct BroadcastSubject<E> {
    observers: Observers<Self, E>,
}

impl<E> Default for BroadcastSubject<E> {
    fn default() -> Self {
        Self {
            observers: VecDeque::new(),
        }
    }
}

impl<E> BroadcastSubject<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn observer_names(&self) -> Vec<&str> {
        self.observers.iter().map(|obs| obs.name()).collect()
    }
}

impl<E> Subject<E> for BroadcastSubject<E>
where
    E: Clone + Debug,
{
    fn register_observer(&mut self, observer: Rc<dyn Observer<Self, E>>) {
        debug!("{} added to subscription", observer.name());
        self.observers.push_front(observer);
    }

    fn unregister_observer(&mut self, observer: &Rc<dyn Observer<Self, E>>) -> bool {
        let before = self.observers.len();
        self.observers.retain(|obs| !Rc::ptr_eq(obs, observer));
        let removed = self.observers.len() < before;
        if removed {
            debug!("{} removed from subscription", observer.name());
        } else {
            debug!("{} was not subscribed", observer.name());
        }
        removed
    }

    fn notify_observers(&self, event: E) {
        for obs in &self.observers {
            trace!("Notifying {} of {:?}", obs.name(), event);
            obs.update(self, event.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use common::subject_observer::{Observer, Subject};
    use common_test::Journal;

    use super::BroadcastSubject;

    type Shared = Rc<dyn Observer<BroadcastSubject<u8>, u8>>;

    #[test]
    fn test_notify_observers_latest_first() {
        // Given
        let journal = Journal::new();
        let mut subject = BroadcastSubject::<u8>::new();
        for name in ["Observer1", "Observer2", "Observer3", "Observer4"] {
            subject.register_observer(journal.witness(name));
        }

        // When
        subject.notify_observers(1);

        // Then
        assert_eq!(
            vec!["Observer4", "Observer3", "Observer2", "Observer1"],
            journal.observers(),
            "Should notify the latest registration first"
        );
        assert!(journal.entries().iter().all(|entry| entry.event == "1"));
    }

    #[test]
    fn test_unregister_observer() {
        // Given
        let journal = Journal::new();
        let observer1: Shared = journal.witness("Observer1");
        let observer2: Shared = journal.witness("Observer2");
        let mut subject = BroadcastSubject::<u8>::new();
        subject.register_observer(observer1.clone());
        subject.register_observer(observer2.clone());

        // When
        let removed = subject.unregister_observer(&observer2);
        subject.notify_observers(0);

        // Then
        assert!(removed, "Should report the removal");
        assert_eq!(vec!["Observer1"], journal.observers());
        assert_eq!(2, Rc::strong_count(&observer1), "Subject should keep its handle");
        assert_eq!(1, Rc::strong_count(&observer2), "Subject should drop its handle");
    }

    #[test]
    fn test_unregister_unknown_observer_is_a_no_op() {
        // Given
        let journal = Journal::new();
        let stranger: Shared = journal.witness("Stranger");
        let mut subject = BroadcastSubject::<u8>::new();
        subject.register_observer(journal.witness("Observer1"));

        // When
        let removed = subject.unregister_observer(&stranger);

        // Then
        assert!(!removed);
        assert_eq!(vec!["Observer1"], subject.observer_names());
    }

    #[test]
    fn test_unregister_observer_removes_every_registration() {
        // Given
        let journal = Journal::new();
        let observer: Shared = journal.witness("Twice");
        let mut subject = BroadcastSubject::<u8>::new();
        subject.register_observer(observer.clone());
        subject.register_observer(observer.clone());
        assert_eq!(2, subject.len());

        // When
        subject.unregister_observer(&observer);

        // Then
        assert!(subject.is_empty());
    }
}
