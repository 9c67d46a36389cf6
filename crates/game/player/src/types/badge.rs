use super::repr_serde;

/// Gym badges. [`Badge::None`] is the sentinel that keeps the badge list non-empty.
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
    strum::EnumIter,
    strum::FromRepr,
)]
#[repr(u8)]
pub enum Badge {
    #[default]
    None = 0,
    Boulder = 1,
    Cascade = 2,
    Thunder = 3,
    Rainbow = 4,
    Soul = 5,
    Marsh = 6,
    Volcano = 7,
    Earth = 8,
}

impl Badge {
    pub const fn is_sentinel(self) -> bool {
        matches!(self, Self::None)
    }
}

repr_serde!(Badge, u8);
