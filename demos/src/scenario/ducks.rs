use std::io::{self, Write};

use strategy::{Actor, Duck};

use crate::config::app::DuckScenario;

pub fn run(scenarios: &[DuckScenario], out: &mut impl Write) -> io::Result<()> {
    for scenario in scenarios {
        let mut duck = Duck::of_kind(scenario.kind);
        writeln!(out, "\n{}", duck.banner())?;
        writeln!(out, "{}", duck.perform_quack())?;
        writeln!(out, "{}", duck.perform_fly())?;
        writeln!(out, "{}", duck.display())?;

        if let Some(quack) = scenario.quack {
            duck.set_quack_behavior(quack.behavior());
            writeln!(out, "{}", duck.perform_quack())?;
        }
        if let Some(fly) = scenario.fly {
            duck.set_fly_behavior(fly.behavior());
            writeln!(out, "{}", duck.perform_fly())?;
        }
    }
    Ok(())
}
