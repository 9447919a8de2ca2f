use std::{
    io::{self, Write},
    rc::Rc,
};

use common::subject_observer::{Observer, Subject};
use observer::BroadcastSubject;

use crate::config::app::BroadcastScenario;

use super::Roster;

type Shared = Rc<dyn Observer<BroadcastSubject<()>, ()>>;

/// Returns the names still subscribed at the end, in notification order.
pub fn run(scenario: &BroadcastScenario, out: &mut impl Write) -> io::Result<Vec<String>> {
    let mut roster = Roster::default();
    let mut subject = BroadcastSubject::<()>::new();

    for name in &scenario.observers {
        subject.register_observer(roster.observer(name));
        writeln!(out, "{name} added to subscription.")?;
    }

    writeln!(out)?;
    subject.notify_observers(());
    roster.flush(out)?;
    writeln!(out)?;

    for name in &scenario.removals {
        let removed = match roster.find(name) {
            Some(observer) => subject.unregister_observer(&(observer as Shared)),
            None => false,
        };
        if removed {
            writeln!(out, "{name} removed from subscription.")?;
        } else {
            writeln!(out, "{name} was not subscribed.")?;
        }
    }

    writeln!(out)?;
    subject.notify_observers(());
    roster.flush(out)?;

    Ok(subject
        .observer_names()
        .into_iter()
        .map(str::to_string)
        .collect())
}
