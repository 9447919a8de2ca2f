use std::io;

use demos::{
    config::{app::DemoConfig, log},
    scenario::registry,
};

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::new()?;
    log::init(config.level_filter()?)?;

    registry::run(&config.registry, &mut io::stdout().lock())?;
    Ok(())
}
