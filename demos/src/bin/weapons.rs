use std::io;

use demos::{
    config::{app::DemoConfig, log},
    scenario::weapons,
};

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::new()?;
    log::init(config.level_filter()?)?;

    weapons::run(&config.characters, &mut io::stdout().lock())?;
    Ok(())
}
