use std::{
    cell::RefCell,
    collections::HashMap,
    env,
    error::Error,
    fmt::Debug,
    rc::Rc,
    sync::{OnceLock, RwLock},
};

use common::subject_observer::Observer;
use rand::{random, rngs::StdRng, SeedableRng};

pub const DEFAULT_TEST_SEED_ENV: &str = "PATTERN_TEST_SEED";

static SEEDS: OnceLock<RwLock<HashMap<&'static str, u64>>> = OnceLock::new();

fn seeds() -> &'static RwLock<HashMap<&'static str, u64>> {
    SEEDS.get_or_init(|| RwLock::new(HashMap::new()))
}

fn resolve_seed(key: &'static str) -> Result<u64, Box<dyn Error>> {
    let mut seeds = seeds().write().map_err(|e| e.to_string())?;
    let seed = *seeds.entry(key).or_insert_with(|| {
        let seed = env::var(key)
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or_else(random);
        // Printed so a failing randomized scenario can be replayed.
        println!("Using seed {seed} for {key}");
        seed
    });
    Ok(seed)
}

/// Seeded generator shared by every test reading [`DEFAULT_TEST_SEED_ENV`].
pub fn seeded_rng() -> Result<StdRng, Box<dyn Error>> {
    seeded_rng_for(DEFAULT_TEST_SEED_ENV)
}

/// Seeded generator whose seed can be pinned through the `key` env var.
pub fn seeded_rng_for(key: &'static str) -> Result<StdRng, Box<dyn Error>> {
    Ok(StdRng::seed_from_u64(resolve_seed(key)?))
}

/// Notification delivered to a [`Witness`]: observer name and event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub observer: String,
    pub event: String,
}

/// Shared, ordered record of every notification its witnesses receive.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    entries: Rc<RefCell<Vec<Entry>>>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn witness(&self, name: &str) -> Rc<Witness> {
        Rc::new(Witness {
            name: name.to_string(),
            journal: self.clone(),
        })
    }

    pub fn entries(&self) -> Vec<Entry> {
        self.entries.borrow().clone()
    }

    pub fn observers(&self) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .map(|entry| entry.observer.clone())
            .collect()
    }

    pub fn count(&self, observer: &str) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|entry| entry.observer == observer)
            .count()
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    fn record(&self, observer: &str, event: String) {
        self.entries.borrow_mut().push(Entry {
            observer: observer.to_string(),
            event,
        });
    }
}

/// Observer writing each notification into its [`Journal`].
#[derive(Debug)]
pub struct Witness {
    name: String,
    journal: Journal,
}

impl<S: ?Sized, E: Debug> Observer<S, E> for Witness {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&self, _source: &S, event: E) {
        self.journal.record(&self.name, format!("{event:?}"));
    }
}
