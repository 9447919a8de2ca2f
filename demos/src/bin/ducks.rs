use std::io;

use demos::{
    config::{app::DemoConfig, log},
    scenario::ducks,
};

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::new()?;
    log::init(config.level_filter()?)?;

    ducks::run(&config.ducks, &mut io::stdout().lock())?;
    Ok(())
}
