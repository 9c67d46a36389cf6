//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::cell::Cell;
use std::collections::HashMap;

use game_player::{
    BonusOracle, Env, InactiveBonuses, OakItem, PlayerConfig, PlayerEnv, PlayerState,
    PokemonData, PokemonType, StaticCatalog, StaticTowns,
};

/// Routes `tracing` output through the test harness. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Bonus system with fixed multipliers for the listed items.
#[derive(Default)]
pub struct TableBonuses {
    active: HashMap<OakItem, f64>,
    uses: Cell<u32>,
}

impl TableBonuses {
    pub fn new(entries: impl IntoIterator<Item = (OakItem, f64)>) -> Self {
        Self {
            active: entries.into_iter().collect(),
            uses: Cell::new(0),
        }
    }

    pub fn uses(&self) -> u32 {
        self.uses.get()
    }
}

impl BonusOracle for TableBonuses {
    fn is_active(&self, item: OakItem) -> bool {
        self.active.contains_key(&item)
    }

    fn calculate_bonus(&self, item: OakItem) -> f64 {
        self.active.get(&item).copied().unwrap_or(1.0)
    }

    fn use_item(&self, _item: OakItem) {
        self.uses.set(self.uses.get() + 1);
    }
}

pub struct World<B> {
    pub catalog: StaticCatalog,
    pub bonuses: B,
    pub towns: StaticTowns,
}

impl<B: BonusOracle> World<B> {
    pub fn env(&self) -> PlayerEnv<'_> {
        Env::new(&self.catalog, &self.bonuses, &self.towns).into_player_env()
    }

    pub fn new_game(&self) -> PlayerState {
        PlayerState::new(PlayerConfig::default(), &self.env())
    }
}

pub fn kanto() -> World<InactiveBonuses> {
    kanto_with(InactiveBonuses)
}

pub fn kanto_with<B: BonusOracle>(bonuses: B) -> World<B> {
    init_tracing();
    World {
        catalog: StaticCatalog::new([
            PokemonData::new(1, "Bulbasaur", 49, [PokemonType::Grass, PokemonType::Poison]),
            PokemonData::new(4, "Charmander", 52, [PokemonType::Fire, PokemonType::None]),
            PokemonData::new(7, "Squirtle", 48, [PokemonType::Water, PokemonType::None]),
            PokemonData::new(16, "Pidgey", 45, [PokemonType::Normal, PokemonType::Flying]),
            PokemonData::new(19, "Rattata", 56, [PokemonType::Normal, PokemonType::None]),
            PokemonData::new(25, "Pikachu", 55, [PokemonType::Electric, PokemonType::None]),
        ]),
        bonuses,
        towns: StaticTowns::new(["Pallet Town", "Viridian City", "Pewter City"]),
    }
}
