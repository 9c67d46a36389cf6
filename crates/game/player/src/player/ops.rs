//! Mutation operations.
//!
//! Every operation runs to completion synchronously. Listeners of the touched
//! cells fire before the operation returns.

use tracing::{debug, info, trace};

use super::PlayerState;
use crate::config::PlayerConfig;
use crate::env::PlayerEnv;
use crate::error::PlayerError;
use crate::events::PlayerEvent;
use crate::observe::PlayerFields;
use crate::pokemon::CaughtPokemon;
use crate::types::{Badge, OakItem, Pokeball};

/// What a capture changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CaptureOutcome {
    /// The species was not caught before.
    pub new_species: bool,
    /// First shiny of the species.
    pub new_shiny: bool,
}

impl PlayerState {
    /// Adds `amount` scaled by the Amulet Coin bonus, floored.
    ///
    /// Spends one Amulet Coin use whether or not the item is active.
    pub fn gain_money(&mut self, amount: u64, env: &PlayerEnv<'_>) -> u64 {
        env.bonuses().use_item(OakItem::AmuletCoin);
        let scale = env.bonus_multiplier(OakItem::AmuletCoin) * self.money_multiplier();
        let gained = (amount as f64 * scale).floor() as u64;

        let changed = self.money.update(|money| money.saturating_add(gained));
        self.mark(PlayerFields::MONEY, changed);
        trace!(amount, gained, money = self.money(), "gained money");
        gained
    }

    /// Debits `amount` if the balance covers it; otherwise does nothing.
    pub fn pay_money(&mut self, amount: u64) -> bool {
        if !self.has_money(amount) {
            trace!(amount, money = self.money(), "insufficient money");
            return false;
        }
        let changed = self.money.update(|money| money - amount);
        self.mark(PlayerFields::MONEY, changed);
        true
    }

    pub fn gain_dungeon_tokens(&mut self, amount: u64) -> u64 {
        let gained = (amount as f64 * self.dungeon_token_multiplier()).floor() as u64;
        let changed = self.dungeon_tokens.update(|tokens| tokens.saturating_add(gained));
        self.mark(PlayerFields::DUNGEON_TOKENS, changed);
        trace!(gained, tokens = self.dungeon_tokens(), "gained dungeon tokens");
        gained
    }

    pub fn pay_dungeon_tokens(&mut self, amount: u64) -> bool {
        if self.dungeon_tokens() < amount {
            return false;
        }
        let changed = self.dungeon_tokens.update(|tokens| tokens - amount);
        self.mark(PlayerFields::DUNGEON_TOKENS, changed);
        true
    }

    /// Spreads experience from a defeated enemy over every caught pokémon
    /// below the badge level cap.
    ///
    /// Each eligible pokémon gains
    /// `floor(base_exp * level * trainer_factor * exp_share_bonus / 9)`.
    /// Returns the per-pokémon amount.
    pub fn gain_exp(
        &mut self,
        base_exp: u64,
        level: u64,
        trainer: bool,
        env: &PlayerEnv<'_>,
    ) -> u64 {
        env.bonuses().use_item(OakItem::ExpShare);
        let trainer_factor = if trainer {
            PlayerConfig::TRAINER_EXP_FACTOR
        } else {
            1.0
        };
        let scale =
            trainer_factor * env.bonus_multiplier(OakItem::ExpShare) * self.exp_multiplier();
        let total =
            (base_exp as f64 * level as f64 * scale / PlayerConfig::EXP_DIVISOR).floor() as u64;

        let cap = self.level_cap();
        let changed = total > 0
            && self.caught_pokemon.update_each(|pokemon| {
                if pokemon.level() >= cap {
                    return false;
                }
                pokemon.gain_exp(total);
                true
            });
        self.mark(PlayerFields::CAUGHT_POKEMON, changed);
        total
    }

    /// Level at which caught pokémon stop gaining experience.
    ///
    /// The badge list includes the sentinel, so a new player caps at 30.
    pub fn level_cap(&self) -> u64 {
        (self.gym_badges.len() as u64 + 2) * PlayerConfig::LEVEL_CAP_STEP
    }

    /// Increments the kill counter of the current route. Returns the raw count.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::RouteOutOfRange`] if the current route has no counter.
    pub fn add_route_kill(&mut self) -> Result<u64, PlayerError> {
        let route = self.route();
        let max = self.config.route_count;
        let kills = self
            .route_kills
            .get_mut(route)
            .ok_or(PlayerError::RouteOutOfRange { route, max })?;
        kills.update(|count| count.saturating_add(1));
        let count = *kills.get();
        self.mark(PlayerFields::ROUTE_KILLS, true);
        Ok(count)
    }

    /// Returns the item's new experience.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::OakItemSlotOutOfRange`] when the config allocates
    /// fewer slots than there are oak items.
    pub fn gain_oak_item_exp(&mut self, item: OakItem, amount: u64) -> Result<u64, PlayerError> {
        let slots = self.oak_item_exp.len();
        let exp = self
            .oak_item_exp
            .get_mut(item.slot())
            .ok_or(PlayerError::OakItemSlotOutOfRange { item, slots })?;
        let changed = exp.update(|exp| exp.saturating_add(amount));
        let total = *exp.get();
        self.mark(PlayerFields::OAK_ITEM_EXP, changed);
        Ok(total)
    }

    /// [`Pokeball::None`] has no stock and is ignored.
    pub fn gain_pokeballs(&mut self, ball: Pokeball, amount: u64) {
        let Some(slot) = ball.slot() else {
            return;
        };
        let amount = i64::try_from(amount).unwrap_or(i64::MAX);
        let changed = self.pokeballs[slot].update(|stock| stock.saturating_add(amount));
        self.mark(PlayerFields::POKEBALLS, changed);
        trace!(%ball, amount, stock = self.pokeball_count(ball), "gained pokéballs");
    }

    /// Takes one ball out of stock.
    ///
    /// Stock is not checked and may go negative; callers pick the ball with
    /// [`PlayerState::calculate_pokeball_to_use`], which only returns tiers in
    /// stock.
    pub fn use_pokeball(&mut self, ball: Pokeball) {
        let Some(slot) = ball.slot() else {
            return;
        };
        let changed = self.pokeballs[slot].update(|stock| stock.saturating_sub(1));
        self.mark(PlayerFields::POKEBALLS, changed);
    }

    /// Records a capture.
    ///
    /// Adds the species on first catch and, for shinies, the species to the
    /// shiny list on its first shiny catch. A first shiny publishes
    /// [`PlayerEvent::ShinyCaptured`] so the save layer can store right away.
    /// Spends one Magic Ball use.
    pub fn capture_pokemon(
        &mut self,
        name: &str,
        shiny: bool,
        env: &PlayerEnv<'_>,
    ) -> CaptureOutcome {
        env.bonuses().use_item(OakItem::MagicBall);
        let mut outcome = CaptureOutcome::default();
        // Both lists key on the catalog's spelling of the name.
        let data = env.pokemon().pokemon_by_name(name);
        let name = data.name.clone();

        if !self.already_caught(&name) {
            debug!(%name, id = data.id, "caught new species");
            self.caught_pokemon.push(CaughtPokemon::caught(data));
            self.mark(PlayerFields::CAUGHT_POKEMON, true);
            self.events.publish(PlayerEvent::PokemonCaptured { name: name.clone() });
            outcome.new_species = true;
        }

        if shiny && !self.already_caught_shiny(&name) {
            info!(%name, "caught first shiny");
            self.caught_shiny.push(name.clone());
            self.mark(PlayerFields::CAUGHT_SHINY, true);
            self.events.publish(PlayerEvent::ShinyCaptured { name });
            outcome.new_shiny = true;
        }

        outcome
    }

    /// Appends `badge`. Badges are never removed.
    pub fn gain_badge(&mut self, badge: Badge) {
        debug!(%badge, "earned badge");
        self.gym_badges.push(badge);
        self.mark(PlayerFields::GYM_BADGES, true);
        if !badge.is_sentinel() {
            self.events.publish(PlayerEvent::BadgeEarned(badge));
        }
    }

    /// Picks the ball to throw next.
    ///
    /// Starts at the player's preference for caught or uncaught targets
    /// (always the strongest tier for shinies) and walks down to the weakest
    /// tier, returning the first one in stock. [`Pokeball::None`] when every
    /// candidate is empty.
    pub fn calculate_pokeball_to_use(&self, already_caught: bool, shiny: bool) -> Pokeball {
        let preference = if shiny {
            Pokeball::Masterball
        } else if already_caught {
            self.already_caught_ball_selection()
        } else {
            self.not_caught_ball_selection()
        };
        // A stored `None` preference means "throw nothing".
        let Some(start) = preference.slot() else {
            return Pokeball::None;
        };

        Pokeball::TIERS[..=start]
            .iter()
            .rev()
            .copied()
            .find(|&ball| self.pokeball_count(ball) > 0)
            .unwrap_or(Pokeball::None)
    }
}
