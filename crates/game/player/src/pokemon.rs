//! Caught pokémon records.

use crate::env::PokemonData;

/// One caught species. Created on first capture, never removed, and mutated
/// in place when it gains experience.
#[derive(Clone, Debug, PartialEq)]
pub struct CaughtPokemon {
    data: PokemonData,
    pub evolved: bool,
    pub attack_bonus: u32,
    exp: u64,
}

impl CaughtPokemon {
    pub const MIN_LEVEL: u64 = 1;
    pub const MAX_LEVEL: u64 = 100;

    pub fn new(data: PokemonData, evolved: bool, attack_bonus: u32, exp: u64) -> Self {
        Self {
            data,
            evolved,
            attack_bonus,
            exp,
        }
    }

    /// Freshly caught: not evolved, no bonus, no experience.
    pub fn caught(data: PokemonData) -> Self {
        Self::new(data, false, 0, 0)
    }

    pub fn name(&self) -> &str {
        &self.data.name
    }

    pub fn data(&self) -> &PokemonData {
        &self.data
    }

    pub fn exp(&self) -> u64 {
        self.exp
    }

    pub fn gain_exp(&mut self, amount: u64) {
        self.exp = self.exp.saturating_add(amount);
    }

    /// Cubic experience curve: level `n` needs `n³` experience.
    pub fn level(&self) -> u64 {
        (Self::MIN_LEVEL..=Self::MAX_LEVEL)
            .take_while(|level| level.pow(3) <= self.exp)
            .last()
            .unwrap_or(Self::MIN_LEVEL)
    }

    pub fn attack(&self) -> u64 {
        let base = u64::from(self.data.attack) + u64::from(self.attack_bonus);
        (base * self.level() / 100).max(1)
    }
}
