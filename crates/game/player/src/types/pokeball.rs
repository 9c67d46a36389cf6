use super::repr_serde;

/// Pokéball tiers, ordered from weakest to strongest.
///
/// [`Pokeball::None`] is the "nothing to throw" result of ball selection and
/// has no inventory slot.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::FromRepr,
)]
#[repr(u8)]
pub enum Pokeball {
    #[default]
    Pokeball = 0,
    Greatball = 1,
    Ultraball = 2,
    Masterball = 3,
    None = 4,
}

impl Pokeball {
    /// Throwable tiers in inventory order.
    pub const TIERS: [Pokeball; 4] = [
        Pokeball::Pokeball,
        Pokeball::Greatball,
        Pokeball::Ultraball,
        Pokeball::Masterball,
    ];

    /// Inventory index, or `None` for [`Pokeball::None`].
    pub const fn slot(self) -> Option<usize> {
        match self {
            Self::None => None,
            tier => Some(tier as usize),
        }
    }
}

repr_serde!(Pokeball, u8);
