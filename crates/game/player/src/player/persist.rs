//! Construction from and conversion to [`PlayerSnapshot`].
//!
//! Restoration is total: each field is defaulted on its own when the
//! snapshot lacks it, and inputs that would break an invariant (duplicate
//! species, unknown route, oversized arrays) are repaired with a warning.

use std::collections::HashSet;

use tracing::{debug, warn};

use super::PlayerState;
use crate::config::PlayerConfig;
use crate::env::PlayerEnv;
use crate::error::SnapshotError;
use crate::events::EventSender;
use crate::observe::{Observable, ObservableList, PlayerFields, RateLimited};
use crate::pokemon::CaughtPokemon;
use crate::snapshot::{CaughtPokemonSnapshot, PlayerSnapshot};
use crate::types::{Badge, Pokeball, TownRef};

impl PlayerState {
    /// Starts a new game.
    pub fn new(config: PlayerConfig, env: &PlayerEnv<'_>) -> Self {
        Self::build(PlayerSnapshot::default(), config, env, true)
    }

    /// Restores a saved game. Never fails; see the module docs.
    pub fn restore(snapshot: PlayerSnapshot, config: PlayerConfig, env: &PlayerEnv<'_>) -> Self {
        Self::build(snapshot, config, env, false)
    }

    /// Restores from raw save text. A JSON `null` starts a new game.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Json`] if `text` is not valid JSON.
    pub fn from_json(
        text: &str,
        config: PlayerConfig,
        env: &PlayerEnv<'_>,
    ) -> Result<Self, SnapshotError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        if value.is_null() {
            return Ok(Self::new(config, env));
        }
        Ok(Self::restore(PlayerSnapshot::from_value(value), config, env))
    }

    fn build(
        snapshot: PlayerSnapshot,
        config: PlayerConfig,
        env: &PlayerEnv<'_>,
        fresh: bool,
    ) -> Self {
        let route = match snapshot.route {
            None | Some(0) => PlayerConfig::DEFAULT_ROUTE,
            Some(route) if route > config.route_count => {
                warn!(route, max = config.route_count, "saved route out of range, resetting");
                PlayerConfig::DEFAULT_ROUTE
            }
            Some(route) => route,
        };

        let mut gym_badges = snapshot.gym_badges.unwrap_or_default();
        if gym_badges.is_empty() {
            gym_badges.push(Badge::None);
        }

        let pokeball_stock = snapshot.pokeballs.unwrap_or_default();
        let pokeballs = std::array::from_fn(|slot| {
            Observable::new(
                pokeball_stock
                    .get(slot)
                    .copied()
                    .flatten()
                    .unwrap_or(PlayerConfig::DEFAULT_POKEBALLS),
            )
        });

        let town = env
            .towns()
            .town(TownRef::STARTING_TOWN)
            .unwrap_or_else(|| TownRef::new(TownRef::STARTING_TOWN));

        let caught_pokemon = restore_caught(snapshot.caught_pokemon_list.unwrap_or_default(), env);
        let caught_shiny = dedup_names(snapshot.caught_shiny_list.unwrap_or_default());
        let route_kills = counters(snapshot.route_kills, config.route_slots(), "route kills");
        let oak_item_exp = counters(snapshot.oak_item_exp, config.oak_item_count, "oak item exp");

        debug!(
            fresh,
            caught = caught_pokemon.len(),
            shiny = caught_shiny.len(),
            badges = gym_badges.len(),
            "player state built"
        );

        Self {
            fresh,
            money: Observable::new(snapshot.money.unwrap_or(0)),
            dungeon_tokens: Observable::new(snapshot.dungeon_tokens.unwrap_or(0)),
            route: Observable::new(route),
            region: Observable::new(snapshot.region.unwrap_or_default()),
            town: Observable::new(town),
            starter: Observable::new(snapshot.starter.unwrap_or_default()),
            caught_pokemon: ObservableList::new(caught_pokemon),
            caught_shiny: ObservableList::new(caught_shiny),
            route_kills,
            // A zero threshold is treated as unset.
            route_kills_needed: Observable::new(
                snapshot
                    .route_kills_needed
                    .filter(|&needed| needed > 0)
                    .unwrap_or(PlayerConfig::DEFAULT_ROUTE_KILLS_NEEDED),
            ),
            gym_badges: ObservableList::new(gym_badges),
            pokeballs,
            not_caught_ball: Observable::new(
                snapshot
                    .not_caught_ball_selection
                    .unwrap_or(Pokeball::Pokeball),
            ),
            already_caught_ball: Observable::new(
                snapshot
                    .already_caught_ball_selection
                    .unwrap_or(Pokeball::Pokeball),
            ),
            sort_option: Observable::new(snapshot.sort_option.unwrap_or_default()),
            sort_descending: Observable::new(snapshot.sort_descending.unwrap_or(false)),
            oak_item_exp,
            oak_items_equipped: ObservableList::new(
                snapshot.oak_items_equipped.unwrap_or_default(),
            ),
            sorted: RateLimited::new(PlayerConfig::DEFAULT_CATCH_TIME_MS),
            changes: PlayerFields::empty(),
            events: EventSender::new(config.event_capacity),
            config,
        }
    }

    /// The persisted subset of the state.
    ///
    /// Town and oak item fields are runtime-only and left out.
    pub fn to_snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            money: Some(self.money()),
            dungeon_tokens: Some(self.dungeon_tokens()),
            caught_shiny_list: Some(self.caught_shiny.as_slice().to_vec()),
            route: Some(self.route()),
            caught_pokemon_list: Some(
                self.caught_pokemon
                    .iter()
                    .map(|pokemon| CaughtPokemonSnapshot {
                        name: pokemon.name().to_owned(),
                        evolved: pokemon.evolved,
                        attack_bonus: pokemon.attack_bonus,
                        exp: pokemon.exp(),
                    })
                    .collect(),
            ),
            route_kills: Some(
                self.route_kills
                    .iter()
                    .map(|kills| Some(*kills.get()))
                    .collect(),
            ),
            route_kills_needed: Some(self.route_kills_needed()),
            region: Some(self.region()),
            gym_badges: Some(self.gym_badges.as_slice().to_vec()),
            pokeballs: Some(
                self.pokeballs
                    .iter()
                    .map(|stock| Some(*stock.get()))
                    .collect(),
            ),
            not_caught_ball_selection: Some(self.not_caught_ball_selection()),
            already_caught_ball_selection: Some(self.already_caught_ball_selection()),
            sort_option: Some(self.sort_option()),
            sort_descending: Some(self.sort_descending()),
            starter: Some(self.starter()),
            oak_item_exp: None,
            oak_items_equipped: None,
        }
    }

    /// # Errors
    ///
    /// Returns [`SnapshotError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        self.to_snapshot().to_json()
    }
}

/// Re-resolves species through the catalog, keeping the first entry per name.
fn restore_caught(entries: Vec<CaughtPokemonSnapshot>, env: &PlayerEnv<'_>) -> Vec<CaughtPokemon> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|entry| {
            let first = seen.insert(entry.name.clone());
            if !first {
                warn!(name = %entry.name, "duplicate caught pokémon in save, dropping");
            }
            first
        })
        .map(|entry| {
            CaughtPokemon::new(
                env.pokemon().pokemon_by_name(&entry.name),
                entry.evolved,
                entry.attack_bonus,
                entry.exp,
            )
        })
        .collect()
}

fn dedup_names(names: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let before = names.len();
    let names: Vec<String> = names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect();
    if names.len() != before {
        warn!(dropped = before - names.len(), "duplicate shiny entries in save");
    }
    names
}

/// Fixed-size counter array; missing slots read 0, surplus slots are dropped.
fn counters(saved: Option<Vec<Option<u64>>>, len: usize, what: &str) -> Vec<Observable<u64>> {
    let saved = saved.unwrap_or_default();
    if saved.len() > len {
        warn!(saved = saved.len(), len, what, "save has more counters than configured, truncating");
    }
    (0..len)
        .map(|index| Observable::new(saved.get(index).copied().flatten().unwrap_or(0)))
        .collect()
}
