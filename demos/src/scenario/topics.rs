use std::{
    collections::BTreeSet,
    io::{self, Write},
    rc::Rc,
};

use common::subject_observer::{Observer, Scope, SubscriptionError, TopicSubject};
use log::warn;
use observer::{Topic, TopicHub};

use crate::config::app::TopicScenario;

use super::Roster;

type Shared = Rc<dyn Observer<TopicHub<Topic>, Topic>>;

/// Registers, notifies every topic, unregisters, then notifies each topic an
/// unsubscription targeted. Returns the number of notifications delivered.
pub fn run(scenario: &TopicScenario, out: &mut impl Write) -> io::Result<usize> {
    let mut roster = Roster::default();
    let mut hub = TopicHub::<Topic>::new();
    let mut delivered = 0;

    for subscription in &scenario.subscriptions {
        hub.register_observer(subscription.topic, roster.observer(&subscription.observer));
        writeln!(
            out,
            "{} added to subscription on event {}",
            subscription.observer, subscription.topic
        )?;
    }

    writeln!(out, "\nNotifying ALL")?;
    delivered += hub.notify_observers(Scope::All);
    roster.flush(out)?;
    writeln!(out)?;

    for unsubscription in &scenario.unsubscriptions {
        let result = match roster.find(&unsubscription.observer) {
            Some(observer) => hub.unregister_observer(unsubscription.topic, &(observer as Shared)),
            None => Err(SubscriptionError::ObserverNotFound {
                name: unsubscription.observer.clone(),
                topic: unsubscription.topic,
            }),
        };
        match result {
            Ok(()) => writeln!(out, "{} removed", unsubscription.observer)?,
            Err(e) => {
                warn!("Unable to unsubscribe: {e}");
                writeln!(out, "{e}")?;
            }
        }
    }

    let targeted = scenario
        .unsubscriptions
        .iter()
        .map(|unsubscription| unsubscription.topic)
        .collect::<BTreeSet<_>>();
    for topic in targeted {
        writeln!(out, "\nNotifying {topic}")?;
        delivered += hub.notify_observers(Scope::Only(topic));
        roster.flush(out)?;
    }

    Ok(delivered)
}
