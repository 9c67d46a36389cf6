use std::collections::HashSet;

use crate::types::TownRef;

/// Name-keyed town registry.
pub trait TownOracle {
    fn town(&self, name: &str) -> Option<TownRef>;
}

/// In-memory registry of known town names.
#[derive(Clone, Debug, Default)]
pub struct StaticTowns {
    names: HashSet<String>,
}

impl StaticTowns {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl TownOracle for StaticTowns {
    fn town(&self, name: &str) -> Option<TownRef> {
        self.names.contains(name).then(|| TownRef::new(name))
    }
}
