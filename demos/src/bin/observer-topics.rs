use std::io;

use demos::{
    config::{app::DemoConfig, log},
    scenario::topics,
};

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::new()?;
    log::init(config.level_filter()?)?;

    topics::run(&config.topics, &mut io::stdout().lock())?;
    Ok(())
}
