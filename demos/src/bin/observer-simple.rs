use std::io;

use demos::{
    config::{app::DemoConfig, log},
    scenario::broadcast,
};

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::new()?;
    log::init(config.level_filter()?)?;

    broadcast::run(&config.broadcast, &mut io::stdout().lock())?;
    Ok(())
}
