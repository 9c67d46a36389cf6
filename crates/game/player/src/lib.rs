//! Persistent player state for the idle game.
//!
//! `game-player` owns everything that belongs to one player: currencies,
//! caught pokémon, route progress, pokéball stock, badges and oak items.
//! Every field lives behind an observable cell so UI bindings can subscribe
//! to changes, derived values are recomputed from those cells on read, and
//! [`PlayerState::to_snapshot`] produces the only persisted representation.
//!
//! External collaborators (pokémon catalog, oak item bonuses, town registry)
//! are reached through the oracle traits in [`env`]; the save layer listens
//! for [`PlayerEvent`]s instead of being called directly.
pub mod config;
pub mod env;
pub mod error;
pub mod events;
pub mod observe;
pub mod player;
pub mod pokemon;
pub mod snapshot;
pub mod types;

pub use config::PlayerConfig;
pub use env::{
    BonusOracle, Env, InactiveBonuses, PlayerEnv, PokemonData, PokemonOracle, StaticCatalog,
    StaticTowns, TownOracle,
};
pub use error::{ErrorSeverity, GameError, PlayerError, SnapshotError};
pub use events::PlayerEvent;
pub use observe::{
    Memo, Observable, ObservableList, PlayerFields, RateLimited, SubscriptionId, Tick, Watch,
};
pub use player::{CaptureOutcome, Derived, PlayerState};
pub use pokemon::CaughtPokemon;
pub use snapshot::{CaughtPokemonSnapshot, PlayerSnapshot};
pub use types::{Badge, OakItem, Pokeball, PokemonType, Region, SortOption, Starter, TownRef};
