//! Traits describing the collaborators the player model consumes.
//!
//! Oracles expose the pokémon catalog, the oak item bonus system and the town
//! registry. The [`Env`] aggregate bundles them so player operations can reach
//! everything they need without hard coupling to concrete implementations.
//!
//! Oracles never fail: a catalog miss yields a placeholder entry and an
//! unknown oak item is simply inactive.
mod bonus;
mod pokemon;
mod town;

pub use bonus::{BonusOracle, InactiveBonuses};
pub use pokemon::{PokemonData, PokemonOracle, StaticCatalog};
pub use town::{StaticTowns, TownOracle};

/// Aggregates the oracles required by player construction and operations.
pub struct Env<'a, P, B, T>
where
    P: PokemonOracle + ?Sized,
    B: BonusOracle + ?Sized,
    T: TownOracle + ?Sized,
{
    pokemon: &'a P,
    bonuses: &'a B,
    towns: &'a T,
}

pub type PlayerEnv<'a> = Env<'a, dyn PokemonOracle + 'a, dyn BonusOracle + 'a, dyn TownOracle + 'a>;

impl<'a, P, B, T> Env<'a, P, B, T>
where
    P: PokemonOracle + ?Sized,
    B: BonusOracle + ?Sized,
    T: TownOracle + ?Sized,
{
    pub fn new(pokemon: &'a P, bonuses: &'a B, towns: &'a T) -> Self {
        Self {
            pokemon,
            bonuses,
            towns,
        }
    }

    pub fn pokemon(&self) -> &'a P {
        self.pokemon
    }

    pub fn bonuses(&self) -> &'a B {
        self.bonuses
    }

    pub fn towns(&self) -> &'a T {
        self.towns
    }

    /// Bonus multiplier of `item` when it is active, otherwise 1.
    pub fn bonus_multiplier(&self, item: crate::OakItem) -> f64 {
        if self.bonuses.is_active(item) {
            self.bonuses.calculate_bonus(item)
        } else {
            1.0
        }
    }
}

// Manual impls so trait-object envs stay Copy.
impl<P, B, T> Clone for Env<'_, P, B, T>
where
    P: PokemonOracle + ?Sized,
    B: BonusOracle + ?Sized,
    T: TownOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<P, B, T> Copy for Env<'_, P, B, T>
where
    P: PokemonOracle + ?Sized,
    B: BonusOracle + ?Sized,
    T: TownOracle + ?Sized,
{
}

impl<'a, P, B, T> Env<'a, P, B, T>
where
    P: PokemonOracle + 'a,
    B: BonusOracle + 'a,
    T: TownOracle + 'a,
{
    /// Converts this environment into a trait-object based `PlayerEnv` (consumes self).
    pub fn into_player_env(self) -> PlayerEnv<'a> {
        let pokemon: &'a dyn PokemonOracle = self.pokemon;
        let bonuses: &'a dyn BonusOracle = self.bonuses;
        let towns: &'a dyn TownOracle = self.towns;
        Env::new(pokemon, bonuses, towns)
    }
}
