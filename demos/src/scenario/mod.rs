//! Scripted walkthroughs of each pattern, driven by [`DemoConfig`].
//!
//! Scenarios write their narration to the given writer, interleaved with
//! the greetings of the observers they notify.
//!
//! [`DemoConfig`]: crate::config::app::DemoConfig

pub mod broadcast;
pub mod ducks;
pub mod registry;
pub mod topics;
pub mod weapons;

use std::{
    cell::RefCell,
    io::{self, Write},
    rc::Rc,
};

use observer::NamedObserver;

/// Observers of a scenario, created on first mention and dropped with it.
///
/// Greetings are buffered until [`Roster::flush`] copies them to the
/// scenario's writer.
#[derive(Default)]
pub(crate) struct Roster {
    observers: Vec<Rc<NamedObserver>>,
    greetings: Rc<RefCell<Vec<u8>>>,
}

impl Roster {
    /// Known observer named `name`, created if needed.
    pub(crate) fn observer(&mut self, name: &str) -> Rc<NamedObserver> {
        if let Some(known) = self.find(name) {
            return known;
        }
        let created = NamedObserver::with_sink(name, self.greetings.clone());
        self.observers.push(created.clone());
        created
    }

    pub(crate) fn find(&self, name: &str) -> Option<Rc<NamedObserver>> {
        self.observers
            .iter()
            .find(|obs| obs.name() == name)
            .cloned()
    }

    pub(crate) fn flush(&self, out: &mut impl Write) -> io::Result<()> {
        let greetings = std::mem::take(&mut *self.greetings.borrow_mut());
        out.write_all(&greetings)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use common::subject_observer::Observer;

    use super::Roster;

    #[test]
    fn test_roster_reuses_observers_by_name() {
        // Given
        let mut roster = Roster::default();

        // When
        let first = roster.observer("Observer1");
        let again = roster.observer("Observer1");
        let other = roster.observer("Observer2");

        // Then
        assert!(Rc::ptr_eq(&first, &again), "Should hand out the same observer");
        assert!(!Rc::ptr_eq(&first, &other));
        assert_eq!(2, roster.observers.len());
    }

    #[test]
    fn test_roster_find_does_not_create() {
        // Given
        let mut roster = Roster::default();
        let known = roster.observer("Observer1");

        // When
        let found = roster.find("Observer1");
        let unknown = roster.find("Observer9");

        // Then
        assert!(found.is_some_and(|obs| Rc::ptr_eq(&obs, &known)));
        assert!(unknown.is_none());
        assert_eq!(1, roster.observers.len(), "Lookup should not register anyone");
    }

    #[test]
    fn test_roster_flush_drains_greetings() {
        // Given
        let mut roster = Roster::default();
        let observer = roster.observer("Observer1");
        Observer::<(), ()>::update(&*observer, &(), ());
        let mut out = Vec::new();

        // When
        roster.flush(&mut out).unwrap();
        roster.flush(&mut out).unwrap();

        // Then
        assert_eq!("Hello! I'm a Observer1\n", String::from_utf8(out).unwrap());
    }
}
