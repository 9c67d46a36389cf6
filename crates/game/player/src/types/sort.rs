use super::repr_serde;

/// Sort key of the caught pokémon list.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::FromRepr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum SortOption {
    #[default]
    Id = 0,
    Name = 1,
    Attack = 2,
    Level = 3,
    Shiny = 4,
}

repr_serde!(SortOption, u8);
