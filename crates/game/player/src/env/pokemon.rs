use std::collections::HashMap;

use crate::types::PokemonType;

/// Read-only pokémon catalog.
pub trait PokemonOracle {
    /// Looks a species up by name.
    ///
    /// Implementations return a usable entry for unknown names (see
    /// [`PokemonData::unknown`]) rather than failing.
    fn pokemon_by_name(&self, name: &str) -> PokemonData;
}

/// Immutable species metadata.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PokemonData {
    pub id: u16,
    pub name: String,
    /// Base attack before level scaling and attack bonus.
    pub attack: u32,
    pub types: [PokemonType; 2],
}

impl PokemonData {
    pub fn new(id: u16, name: impl Into<String>, attack: u32, types: [PokemonType; 2]) -> Self {
        Self {
            id,
            name: name.into(),
            attack,
            types,
        }
    }

    /// Placeholder for a name missing from the catalog.
    ///
    /// Keeps the name so the entry still round-trips through a save.
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::new(0, name, 1, [PokemonType::None, PokemonType::None])
    }
}

/// In-memory catalog keyed by species name.
#[derive(Clone, Debug, Default)]
pub struct StaticCatalog {
    entries: HashMap<String, PokemonData>,
}

impl StaticCatalog {
    pub fn new(entries: impl IntoIterator<Item = PokemonData>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|data| (data.name.clone(), data))
                .collect(),
        }
    }

    pub fn insert(&mut self, data: PokemonData) {
        self.entries.insert(data.name.clone(), data);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PokemonOracle for StaticCatalog {
    fn pokemon_by_name(&self, name: &str) -> PokemonData {
        match self.entries.get(name) {
            Some(data) => data.clone(),
            None => {
                tracing::warn!(name, "pokémon missing from catalog, using placeholder");
                PokemonData::unknown(name)
            }
        }
    }
}
