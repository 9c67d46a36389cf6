//! Persisted player snapshot.
//!
//! [`PlayerSnapshot`] is the save contract: a statically declared subset of
//! player state. Every field is optional so saves written by older versions
//! (or hand-edited ones) still load. A field that is missing, `null` or of the
//! wrong shape decodes as `None` and restoration substitutes the default.
//!
//! Older saves prefixed every key with an underscore (`_money`,
//! `_caughtPokemonList`, ...). Those keys are accepted as aliases.
mod lenient;

use serde::{Deserialize, Serialize};

use crate::error::SnapshotError;
use crate::types::{Badge, OakItem, Pokeball, Region, SortOption, Starter};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    #[serde(
        default,
        alias = "_money",
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub money: Option<u64>,

    #[serde(
        default,
        alias = "_dungeonTokens",
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub dungeon_tokens: Option<u64>,

    #[serde(
        default,
        alias = "_caughtShinyList",
        deserialize_with = "lenient::filtered",
        skip_serializing_if = "Option::is_none"
    )]
    pub caught_shiny_list: Option<Vec<String>>,

    #[serde(
        default,
        alias = "_route",
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub route: Option<usize>,

    #[serde(
        default,
        alias = "_caughtPokemonList",
        deserialize_with = "lenient::filtered",
        skip_serializing_if = "Option::is_none"
    )]
    pub caught_pokemon_list: Option<Vec<CaughtPokemonSnapshot>>,

    /// Kill counters indexed by route id. `null` entries mean "not recorded".
    #[serde(
        default,
        alias = "_routeKills",
        deserialize_with = "lenient::numbers",
        skip_serializing_if = "Option::is_none"
    )]
    pub route_kills: Option<Vec<Option<u64>>>,

    #[serde(
        default,
        alias = "_routeKillsNeeded",
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub route_kills_needed: Option<u64>,

    #[serde(
        default,
        alias = "_region",
        deserialize_with = "lenient::value",
        skip_serializing_if = "Option::is_none"
    )]
    pub region: Option<Region>,

    #[serde(
        default,
        alias = "_gymBadges",
        deserialize_with = "lenient::filtered",
        skip_serializing_if = "Option::is_none"
    )]
    pub gym_badges: Option<Vec<Badge>>,

    /// Stock per ball tier, indexed by [`Pokeball`] discriminant.
    #[serde(
        default,
        alias = "_pokeballs",
        deserialize_with = "lenient::numbers",
        skip_serializing_if = "Option::is_none"
    )]
    pub pokeballs: Option<Vec<Option<i64>>>,

    #[serde(
        default,
        alias = "_notCaughtBallSelection",
        deserialize_with = "lenient::value",
        skip_serializing_if = "Option::is_none"
    )]
    pub not_caught_ball_selection: Option<Pokeball>,

    #[serde(
        default,
        alias = "_alreadyCaughtBallSelection",
        deserialize_with = "lenient::value",
        skip_serializing_if = "Option::is_none"
    )]
    pub already_caught_ball_selection: Option<Pokeball>,

    #[serde(
        default,
        alias = "_sortOption",
        deserialize_with = "lenient::value",
        skip_serializing_if = "Option::is_none"
    )]
    pub sort_option: Option<SortOption>,

    #[serde(
        default,
        alias = "_sortDescending",
        deserialize_with = "lenient::value",
        skip_serializing_if = "Option::is_none"
    )]
    pub sort_descending: Option<bool>,

    #[serde(
        default,
        alias = "_starter",
        deserialize_with = "lenient::value",
        skip_serializing_if = "Option::is_none"
    )]
    pub starter: Option<Starter>,

    /// Read on restore when present, never written.
    #[serde(
        default,
        alias = "_oakItemExp",
        deserialize_with = "lenient::numbers",
        skip_serializing
    )]
    pub oak_item_exp: Option<Vec<Option<u64>>>,

    /// Read on restore when present, never written.
    #[serde(
        default,
        alias = "_oakItemsEquipped",
        deserialize_with = "lenient::oak_items",
        skip_serializing
    )]
    pub oak_items_equipped: Option<Vec<OakItem>>,
}

/// Persisted form of a caught pokémon. Species data is re-resolved from the
/// catalog by name on restore.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaughtPokemonSnapshot {
    pub name: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub evolved: bool,
    #[serde(default, deserialize_with = "lenient::number_or_default")]
    pub attack_bonus: u32,
    #[serde(default, deserialize_with = "lenient::number_or_default")]
    pub exp: u64,
}

impl PlayerSnapshot {
    /// Decodes an already parsed JSON value. Never fails.
    ///
    /// Anything that is not an object yields an empty snapshot. When a save
    /// carries both a legacy `_key` and the current `key`, the current one wins.
    pub fn from_value(value: serde_json::Value) -> Self {
        let mut fields = match value {
            serde_json::Value::Object(fields) => fields,
            other => {
                if !other.is_null() {
                    tracing::warn!("save data is not an object, starting from defaults");
                }
                return Self::default();
            }
        };
        let shadowed: Vec<String> = fields
            .keys()
            .filter(|key| {
                key.strip_prefix('_')
                    .is_some_and(|current| fields.contains_key(current))
            })
            .cloned()
            .collect();
        for key in shadowed {
            tracing::warn!(%key, "save has both legacy and current key, ignoring legacy");
            fields.remove(&key);
        }
        serde_json::from_value(serde_json::Value::Object(fields)).unwrap_or_else(|err| {
            tracing::warn!(%err, "unreadable save data, starting from defaults");
            Self::default()
        })
    }

    /// Parses raw save text.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Json`] if `text` is not valid JSON.
    pub fn from_json(text: &str) -> Result<Self, SnapshotError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        Ok(Self::from_value(value))
    }

    /// # Errors
    ///
    /// Returns [`SnapshotError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }
}
