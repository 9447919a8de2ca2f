use std::io::{self, Write};

use strategy::{Actor, Character};

use crate::config::app::CharacterScenario;

pub fn run(scenarios: &[CharacterScenario], out: &mut impl Write) -> io::Result<()> {
    for scenario in scenarios {
        let mut character = Character::of_kind(scenario.kind);
        writeln!(out, "\n{}", character.banner())?;
        writeln!(out, "{}", character.display())?;
        writeln!(out, "{}", character.fight())?;

        writeln!(out, "{}", character.set_weapon(scenario.weapon.behavior()))?;
        writeln!(out, "{}", character.fight())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use strategy::{CharacterKind, WeaponKind};

    use crate::config::app::CharacterScenario;

    use super::run;

    #[test]
    fn test_run() {
        // Given
        let scenarios = vec![CharacterScenario {
            kind: CharacterKind::Troll,
            weapon: WeaponKind::Knife,
        }];
        let mut out = Vec::new();

        // When
        run(&scenarios, &mut out).unwrap();

        // Then
        let transcript = String::from_utf8(out).unwrap();
        assert_eq!(
            vec![
                "",
                "--------- Troll ---------",
                "I'm Troll",
                "I'm fighting with axe!",
                "Changing weapon",
                "I'm fighting with knife!",
            ],
            transcript.lines().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_run_without_characters() {
        let mut out = Vec::new();
        run(&[], &mut out).unwrap();
        assert!(out.is_empty());
    }
}
