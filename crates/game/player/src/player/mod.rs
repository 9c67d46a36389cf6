//! The player aggregate.
//!
//! [`PlayerState`] owns every mutable player field behind an observable cell.
//! Reads go through plain accessors, UI bindings subscribe through `watch_*`
//! handles, and writes are limited to the mutation operations in `ops` plus a
//! handful of setters for preferences the UI assigns directly.
mod derived;
mod ops;
mod persist;

pub use derived::Derived;
pub use ops::CaptureOutcome;

use tokio::sync::broadcast;

use crate::config::PlayerConfig;
use crate::error::PlayerError;
use crate::events::{EventSender, PlayerEvent};
use crate::observe::{Observable, ObservableList, PlayerFields, RateLimited, Watch};
use crate::pokemon::CaughtPokemon;
use crate::types::{Badge, OakItem, Pokeball, Region, SortOption, Starter, TownRef};

/// Versions of the sorted list's dependencies: caught list, shiny list, sort
/// option, sort direction.
type SortKey = (u64, u64, u64, u64);

#[derive(Debug)]
pub struct PlayerState {
    config: PlayerConfig,
    /// Constructed without a save.
    fresh: bool,

    money: Observable<u64>,
    dungeon_tokens: Observable<u64>,
    route: Observable<usize>,
    region: Observable<Region>,
    town: Observable<TownRef>,
    starter: Observable<Starter>,

    caught_pokemon: ObservableList<CaughtPokemon>,
    caught_shiny: ObservableList<String>,

    /// One counter per route id, `0..=config.route_count`.
    route_kills: Vec<Observable<u64>>,
    route_kills_needed: Observable<u64>,
    gym_badges: ObservableList<Badge>,

    /// Stock per throwable tier. May go negative, see [`PlayerState::use_pokeball`].
    pokeballs: [Observable<i64>; PlayerConfig::POKEBALL_TIERS],
    not_caught_ball: Observable<Pokeball>,
    already_caught_ball: Observable<Pokeball>,

    sort_option: Observable<SortOption>,
    sort_descending: Observable<bool>,

    oak_item_exp: Vec<Observable<u64>>,
    oak_items_equipped: ObservableList<OakItem>,

    sorted: RateLimited<SortKey, Vec<CaughtPokemon>>,
    changes: PlayerFields,
    events: EventSender,
}

impl PlayerState {
    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// True when the state was built without a save, i.e. a new game.
    pub fn is_fresh(&self) -> bool {
        self.fresh
    }

    // ===== change tracking =====

    /// Drains the set of fields changed since the previous call.
    pub fn take_changes(&mut self) -> PlayerFields {
        std::mem::take(&mut self.changes)
    }

    pub fn pending_changes(&self) -> PlayerFields {
        self.changes
    }

    /// Whether a persisted field changed since the last [`PlayerState::take_changes`].
    pub fn has_unsaved_changes(&self) -> bool {
        self.changes.intersects(PlayerFields::PERSISTED)
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<PlayerEvent> {
        self.events.subscribe()
    }

    fn mark(&mut self, field: PlayerFields, changed: bool) -> bool {
        if changed {
            self.changes |= field;
        }
        changed
    }

    // ===== accessors =====

    pub fn money(&self) -> u64 {
        *self.money.get()
    }

    pub fn has_money(&self, amount: u64) -> bool {
        self.money() >= amount
    }

    pub fn dungeon_tokens(&self) -> u64 {
        *self.dungeon_tokens.get()
    }

    pub fn route(&self) -> usize {
        *self.route.get()
    }

    pub fn region(&self) -> Region {
        *self.region.get()
    }

    pub fn town(&self) -> &TownRef {
        self.town.get()
    }

    pub fn starter(&self) -> Starter {
        *self.starter.get()
    }

    /// Caught pokémon in catch order.
    pub fn caught_pokemon(&self) -> &[CaughtPokemon] {
        self.caught_pokemon.as_slice()
    }

    pub fn caught_shiny(&self) -> &[String] {
        self.caught_shiny.as_slice()
    }

    pub fn already_caught(&self, name: &str) -> bool {
        self.caught_pokemon.iter().any(|pokemon| pokemon.name() == name)
    }

    pub fn already_caught_shiny(&self, name: &str) -> bool {
        self.caught_shiny.iter().any(|shiny| shiny == name)
    }

    /// Raw kill counter of `route`, uncapped.
    pub fn route_kills(&self, route: usize) -> Option<u64> {
        self.route_kills.get(route).map(|kills| *kills.get())
    }

    pub fn route_kills_needed(&self) -> u64 {
        *self.route_kills_needed.get()
    }

    pub fn gym_badges(&self) -> &[Badge] {
        self.gym_badges.as_slice()
    }

    /// Always true for [`Badge::None`], otherwise whether the badge was earned.
    pub fn has_badge(&self, badge: Badge) -> bool {
        badge.is_sentinel() || self.gym_badges.contains(&badge)
    }

    pub fn not_caught_ball_selection(&self) -> Pokeball {
        *self.not_caught_ball.get()
    }

    pub fn already_caught_ball_selection(&self) -> Pokeball {
        *self.already_caught_ball.get()
    }

    pub fn sort_option(&self) -> SortOption {
        *self.sort_option.get()
    }

    pub fn sort_descending(&self) -> bool {
        *self.sort_descending.get()
    }

    pub fn oak_item_exp(&self, item: OakItem) -> Option<u64> {
        self.oak_item_exp.get(item.slot()).map(|exp| *exp.get())
    }

    pub fn oak_items_equipped(&self) -> &[OakItem] {
        self.oak_items_equipped.as_slice()
    }

    // ===== subscriptions =====

    pub fn watch_money(&mut self) -> Watch<'_, u64> {
        self.money.watch()
    }

    pub fn watch_dungeon_tokens(&mut self) -> Watch<'_, u64> {
        self.dungeon_tokens.watch()
    }

    pub fn watch_route(&mut self) -> Watch<'_, usize> {
        self.route.watch()
    }

    pub fn watch_region(&mut self) -> Watch<'_, Region> {
        self.region.watch()
    }

    pub fn watch_town(&mut self) -> Watch<'_, TownRef> {
        self.town.watch()
    }

    pub fn watch_starter(&mut self) -> Watch<'_, Starter> {
        self.starter.watch()
    }

    pub fn watch_caught_pokemon(&mut self) -> Watch<'_, [CaughtPokemon]> {
        self.caught_pokemon.watch()
    }

    pub fn watch_caught_shiny(&mut self) -> Watch<'_, [String]> {
        self.caught_shiny.watch()
    }

    pub fn watch_route_kills(&mut self, route: usize) -> Option<Watch<'_, u64>> {
        self.route_kills.get_mut(route).map(Observable::watch)
    }

    pub fn watch_route_kills_needed(&mut self) -> Watch<'_, u64> {
        self.route_kills_needed.watch()
    }

    pub fn watch_gym_badges(&mut self) -> Watch<'_, [Badge]> {
        self.gym_badges.watch()
    }

    pub fn watch_pokeballs(&mut self, ball: Pokeball) -> Option<Watch<'_, i64>> {
        let slot = ball.slot()?;
        self.pokeballs.get_mut(slot).map(Observable::watch)
    }

    pub fn watch_ball_selection(&mut self, already_caught: bool) -> Watch<'_, Pokeball> {
        if already_caught {
            self.already_caught_ball.watch()
        } else {
            self.not_caught_ball.watch()
        }
    }

    pub fn watch_sort_option(&mut self) -> Watch<'_, SortOption> {
        self.sort_option.watch()
    }

    pub fn watch_sort_descending(&mut self) -> Watch<'_, bool> {
        self.sort_descending.watch()
    }

    pub fn watch_oak_item_exp(&mut self, item: OakItem) -> Option<Watch<'_, u64>> {
        self.oak_item_exp.get_mut(item.slot()).map(Observable::watch)
    }

    pub fn watch_oak_items_equipped(&mut self) -> Watch<'_, [OakItem]> {
        self.oak_items_equipped.watch()
    }

    // ===== externally assignable preferences =====

    pub fn set_region(&mut self, region: Region) -> bool {
        let changed = self.region.set(region);
        self.mark(PlayerFields::REGION, changed)
    }

    pub fn set_starter(&mut self, starter: Starter) -> bool {
        let changed = self.starter.set(starter);
        self.mark(PlayerFields::STARTER, changed)
    }

    pub fn set_town(&mut self, town: TownRef) -> bool {
        let changed = self.town.set(town);
        self.mark(PlayerFields::TOWN, changed)
    }

    pub fn set_sort_option(&mut self, option: SortOption) -> bool {
        let changed = self.sort_option.set(option);
        self.mark(PlayerFields::SORT, changed)
    }

    pub fn set_sort_descending(&mut self, descending: bool) -> bool {
        let changed = self.sort_descending.set(descending);
        self.mark(PlayerFields::SORT, changed)
    }

    /// Replaces the equipped oak items; order is kept as given.
    pub fn set_oak_items_equipped(&mut self, items: Vec<OakItem>) {
        if self.oak_items_equipped.as_slice() == items.as_slice() {
            return;
        }
        self.oak_items_equipped.replace(items);
        self.mark(PlayerFields::OAK_ITEMS_EQUIPPED, true);
    }

    pub fn set_not_caught_ball_selection(&mut self, ball: Pokeball) -> bool {
        let changed = self.not_caught_ball.set(ball);
        self.mark(PlayerFields::BALL_SELECTION, changed)
    }

    pub fn set_already_caught_ball_selection(&mut self, ball: Pokeball) -> bool {
        let changed = self.already_caught_ball.set(ball);
        self.mark(PlayerFields::BALL_SELECTION, changed)
    }

    /// Moves the player to `route`.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::RouteOutOfRange`] outside `1..=route_count`.
    pub fn set_route(&mut self, route: usize) -> Result<bool, PlayerError> {
        if !(1..=self.config.route_count).contains(&route) {
            return Err(PlayerError::RouteOutOfRange {
                route,
                max: self.config.route_count,
            });
        }
        let changed = self.route.set(route);
        Ok(self.mark(PlayerFields::ROUTE, changed))
    }

    pub fn set_route_kills_needed(&mut self, needed: u64) -> bool {
        let changed = self.route_kills_needed.set(needed);
        self.mark(PlayerFields::ROUTE_KILLS_NEEDED, changed)
    }
}
