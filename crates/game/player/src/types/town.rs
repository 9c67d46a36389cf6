use std::fmt;

/// Non-owning reference to a town, resolved by name through a
/// [`crate::TownOracle`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct TownRef(String);

impl TownRef {
    pub const STARTING_TOWN: &'static str = "Pallet Town";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TownRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
