use std::io::{self, Write};

use log::warn;
use observer::{Topic, TopicRegistry};
use strum::IntoEnumIterator;

use crate::config::app::TopicScenario;

fn write_members(
    registry: &TopicRegistry<Topic>,
    topic: Topic,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out, "\nValue in {topic} key:")?;
    for member in registry.members(topic) {
        writeln!(out, "{member}")?;
    }
    Ok(())
}

pub fn run(scenario: &TopicScenario, out: &mut impl Write) -> io::Result<TopicRegistry<Topic>> {
    let mut registry = TopicRegistry::new();
    for subscription in &scenario.subscriptions {
        registry.add(subscription.topic, subscription.observer.as_str());
    }

    writeln!(out, "There are {} keys in map list:", registry.len())?;
    for topic in registry.topics() {
        writeln!(out, "{topic}")?;
    }

    for topic in registry.topics() {
        write_members(&registry, topic, out)?;
    }

    for topic in Topic::iter() {
        writeln!(out, "\nSearch result for {topic} observers:")?;
        match registry.search(topic) {
            Some(members) => {
                for member in members {
                    writeln!(out, "{member}")?;
                }
            }
            None => writeln!(out, "Not found")?,
        }
    }

    for unsubscription in &scenario.unsubscriptions {
        let (name, topic) = (&unsubscription.observer, unsubscription.topic);
        writeln!(out, "\nSearch and remove {name} from {topic} event.")?;
        if let Err(e) = registry.remove(topic, name) {
            warn!("Unable to remove {name}: {e}");
            writeln!(out, "{e}")?;
        }
        write_members(&registry, topic, out)?;
    }

    Ok(registry)
}
