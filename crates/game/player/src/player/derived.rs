//! Derived values.
//!
//! Derived values are pure functions of the current cells. Cheap ones are
//! recomputed on every read; the sorted pokémon list is cached against the
//! versions of its inputs and rate limited to one recompute per catch time.

use std::cmp::Ordering;

use super::PlayerState;
use crate::config::PlayerConfig;
use crate::env::PlayerEnv;
use crate::observe::{PlayerFields, Tick};
use crate::pokemon::CaughtPokemon;
use crate::types::{OakItem, Pokeball, PokemonType, SortOption};

/// Derived values exposed by [`PlayerState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Derived {
    CappedRouteKills,
    PokeballCount,
    OakItemSlots,
    ClickAttack,
    PokemonAttack,
    SortedPokemon,
}

impl Derived {
    /// Fields whose change can alter this value.
    ///
    /// Click attack also depends on the external bonus system, which the
    /// player cannot observe.
    pub fn dependencies(self) -> PlayerFields {
        match self {
            Self::CappedRouteKills => PlayerFields::ROUTE_KILLS | PlayerFields::ROUTE_KILLS_NEEDED,
            Self::PokeballCount => PlayerFields::POKEBALLS,
            Self::OakItemSlots => PlayerFields::CAUGHT_POKEMON,
            Self::ClickAttack => PlayerFields::empty(),
            Self::PokemonAttack => PlayerFields::CAUGHT_POKEMON,
            Self::SortedPokemon => {
                PlayerFields::CAUGHT_POKEMON | PlayerFields::CAUGHT_SHINY | PlayerFields::SORT
            }
        }
    }

    /// Whether `changes` may have invalidated this value.
    pub fn is_affected_by(self, changes: PlayerFields) -> bool {
        self.dependencies().intersects(changes)
    }
}

impl PlayerState {
    /// Kill count of `route` capped at the completion threshold, for progress
    /// bars. Unknown routes read 0.
    pub fn capped_route_kills(&self, route: usize) -> u64 {
        self.route_kills(route)
            .unwrap_or(0)
            .min(self.route_kills_needed())
    }

    /// Stock of `ball`. [`Pokeball::None`] always reads 0.
    pub fn pokeball_count(&self, ball: Pokeball) -> i64 {
        ball.slot()
            .and_then(|slot| self.pokeballs.get(slot))
            .map_or(0, |stock| *stock.get())
    }

    /// Number of oak item unlock thresholds the caught-species count exceeds.
    pub fn oak_item_slots_unlocked(&self) -> usize {
        let caught = self.caught_pokemon.len();
        self.config
            .oak_item_unlocks
            .iter()
            .filter(|&&threshold| caught > threshold)
            .count()
    }

    /// Damage of one click: the configured baseline times the Poison Barb bonus.
    pub fn click_attack_power(&self, env: &PlayerEnv<'_>) -> u64 {
        let bonus = env.bonus_multiplier(OakItem::PoisonBarb);
        (self.config.click_attack_base as f64 * bonus).floor() as u64
    }

    /// Combined attack of every caught pokémon against an enemy of the given
    /// types.
    // TODO: apply type effectiveness once the type chart is available to the model.
    pub fn pokemon_attack_power(
        &self,
        _enemy_type1: PokemonType,
        _enemy_type2: PokemonType,
    ) -> u64 {
        self.caught_pokemon.iter().map(CaughtPokemon::attack).sum()
    }

    pub fn money_multiplier(&self) -> f64 {
        1.0
    }

    pub fn exp_multiplier(&self) -> f64 {
        1.0
    }

    pub fn dungeon_token_multiplier(&self) -> f64 {
        1.0
    }

    /// Milliseconds between catch attempts, also the sorted list's rate limit.
    pub fn catch_time_ms(&self) -> u64 {
        PlayerConfig::DEFAULT_CATCH_TIME_MS
    }

    /// Caught pokémon ordered by the current sort preference.
    ///
    /// Re-sorted at most once per [`PlayerState::catch_time_ms`]. A read within
    /// that window of the last re-sort serves the previous ordering; the first
    /// read after it folds every change since into a single re-sort.
    pub fn sorted_pokemon(&mut self, now: Tick) -> &[CaughtPokemon] {
        let key = (
            self.caught_pokemon.version(),
            self.caught_shiny.version(),
            self.sort_option.version(),
            self.sort_descending.version(),
        );
        let option = *self.sort_option.get();
        let descending = *self.sort_descending.get();
        let pokemon = self.caught_pokemon.as_slice();
        let shiny = self.caught_shiny.as_slice();

        self.sorted
            .read(key, now, || sort_pokemon(pokemon, shiny, option, descending))
            .as_slice()
    }
}

fn sort_pokemon(
    pokemon: &[CaughtPokemon],
    shiny: &[String],
    option: SortOption,
    descending: bool,
) -> Vec<CaughtPokemon> {
    let is_shiny = |p: &CaughtPokemon| shiny.iter().any(|name| name == p.name());
    let mut sorted = pokemon.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = match option {
            SortOption::Id => Ordering::Equal,
            SortOption::Name => a.name().cmp(b.name()),
            SortOption::Attack => a.attack().cmp(&b.attack()),
            SortOption::Level => a.level().cmp(&b.level()),
            SortOption::Shiny => is_shiny(a).cmp(&is_shiny(b)),
        }
        .then_with(|| a.data().id.cmp(&b.data().id));
        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
    sorted
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::player::fixture::{FixedBonuses, fixture, fixture_with};

    #[test]
    fn capped_route_kills_never_exceed_threshold() {
        let fx = fixture();
        let mut state = fx.player();

        for _ in 0..25 {
            state.add_route_kill().unwrap();
        }
        assert_eq!(state.route_kills(1), Some(25));
        assert_eq!(state.capped_route_kills(1), 10);

        state.set_route_kills_needed(30);
        assert_eq!(state.capped_route_kills(1), 25);
        assert_eq!(state.capped_route_kills(999), 0);
    }

    #[test]
    fn oak_item_slots_unlock_past_thresholds() {
        let mut fx = fixture();
        for id in 0..51u16 {
            fx.catalog.insert(crate::env::PokemonData::new(
                100 + id,
                format!("Mon{id}"),
                10,
                [PokemonType::Normal, PokemonType::None],
            ));
        }
        let env = fx.env();
        let mut state = fx.player();

        let mut unlocked = Vec::new();
        for id in 0..51u16 {
            state.capture_pokemon(&format!("Mon{id}"), false, &env);
            unlocked.push(state.oak_item_slots_unlocked());
        }
        assert_eq!(unlocked[14], 0); // 15 caught, not above 15
        assert_eq!(unlocked[15], 1);
        assert_eq!(unlocked[30], 2);
        assert_eq!(unlocked[50], 3);
    }

    #[test]
    fn oak_item_unlock_thresholds_are_configurable() {
        let fx = fixture();
        let env = fx.env();
        let config = PlayerConfig::default().with_oak_item_unlocks([0, 1, 3]);
        let mut state = PlayerState::new(config, &env);
        assert_eq!(state.oak_item_slots_unlocked(), 0);

        state.capture_pokemon("Pidgey", false, &env);
        assert_eq!(state.oak_item_slots_unlocked(), 1);
        state.capture_pokemon("Rattata", false, &env);
        assert_eq!(state.oak_item_slots_unlocked(), 2);
    }

    #[test]
    fn click_attack_scales_with_poison_barb() {
        let fx = fixture_with(FixedBonuses::with(OakItem::PoisonBarb, 2.5));
        let state = PlayerState::new(
            PlayerConfig::default().with_click_attack_base(10),
            &fx.env(),
        );
        assert_eq!(state.click_attack_power(&fx.env()), 25);

        let plain = fixture();
        assert_eq!(plain.player().click_attack_power(&plain.env()), 1);
    }

    #[test]
    fn pokemon_attack_sums_caught_attack_ignoring_types() {
        let fx = fixture();
        let env = fx.env();
        let mut state = fx.player();
        assert_eq!(state.pokemon_attack_power(PokemonType::None, PokemonType::None), 0);

        state.capture_pokemon("Pidgey", false, &env);
        state.capture_pokemon("Rattata", false, &env);
        assert_eq!(state.pokemon_attack_power(PokemonType::Fire, PokemonType::None), 2);
        assert_eq!(
            state.pokemon_attack_power(PokemonType::Water, PokemonType::Rock),
            state.pokemon_attack_power(PokemonType::None, PokemonType::None)
        );
    }

    fn names(list: &[CaughtPokemon]) -> Vec<&str> {
        list.iter().map(CaughtPokemon::name).collect()
    }

    #[test]
    fn sorted_pokemon_follows_preferences() {
        let fx = fixture();
        let env = fx.env();
        let mut state = fx.player();
        for name in ["Rattata", "Bulbasaur", "Pikachu", "Pidgey"] {
            state.capture_pokemon(name, name == "Pikachu", &env);
        }

        assert_eq!(
            names(state.sorted_pokemon(Tick(0))),
            ["Bulbasaur", "Pidgey", "Rattata", "Pikachu"]
        );

        state.set_sort_option(SortOption::Name);
        state.set_sort_descending(true);
        assert_eq!(
            names(state.sorted_pokemon(Tick(10))),
            ["Bulbasaur", "Pidgey", "Rattata", "Pikachu"],
            "change inside the window serves the previous order"
        );
        assert_eq!(
            names(state.sorted_pokemon(Tick(20))),
            ["Rattata", "Pikachu", "Pidgey", "Bulbasaur"]
        );

        state.set_sort_option(SortOption::Shiny);
        assert_eq!(names(state.sorted_pokemon(Tick(200)))[0], "Pikachu");
    }

    #[test]
    fn sorted_pokemon_coalesces_rapid_captures() {
        let fx = fixture();
        let env = fx.env();
        let mut state = fx.player();
        state.capture_pokemon("Pidgey", false, &env);
        assert_eq!(state.sorted_pokemon(Tick(0)).len(), 1);

        state.capture_pokemon("Rattata", false, &env);
        assert_eq!(state.sorted_pokemon(Tick(1)).len(), 1);
        state.capture_pokemon("Bulbasaur", false, &env);
        assert_eq!(state.sorted_pokemon(Tick(5)).len(), 1);

        let window_end = Tick(state.catch_time_ms());
        assert_eq!(
            names(state.sorted_pokemon(window_end)),
            ["Bulbasaur", "Pidgey", "Rattata"]
        );
    }

    #[test]
    fn sorted_pokemon_refreshes_immediately_after_idle() {
        let fx = fixture();
        let env = fx.env();
        let mut state = fx.player();
        state.capture_pokemon("Pidgey", false, &env);
        assert_eq!(state.sorted_pokemon(Tick(0)).len(), 1);

        state.capture_pokemon("Rattata", false, &env);
        assert_eq!(names(state.sorted_pokemon(Tick(60_000))), ["Pidgey", "Rattata"]);
    }

    #[test]
    fn dependencies_cover_sort_inputs() {
        assert!(Derived::SortedPokemon.is_affected_by(PlayerFields::SORT));
        assert!(!Derived::SortedPokemon.is_affected_by(PlayerFields::MONEY));
        assert!(Derived::CappedRouteKills.is_affected_by(PlayerFields::ROUTE_KILLS_NEEDED));
        assert!(
            Derived::iter()
                .filter(|d| *d != Derived::ClickAttack)
                .all(|d| PlayerFields::PERSISTED.contains(d.dependencies()))
        );
    }
}
