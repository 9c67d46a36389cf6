use super::repr_serde;

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
    strum::FromRepr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum Region {
    #[default]
    Kanto = 0,
    Johto = 1,
    Hoenn = 2,
}

repr_serde!(Region, u8);

/// Starter pokémon picked at the beginning of a new game.
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
    strum::FromRepr,
)]
#[repr(i8)]
pub enum Starter {
    #[default]
    None = -1,
    Bulbasaur = 0,
    Charmander = 1,
    Squirtle = 2,
}

repr_serde!(Starter, i8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_uses_negative_sentinel() {
        assert_eq!(serde_json::to_string(&Starter::None).unwrap(), "-1");
        assert_eq!(
            serde_json::from_str::<Starter>("1").unwrap(),
            Starter::Charmander
        );
        assert_eq!(serde_json::from_str::<Region>("0").unwrap(), Region::Kanto);
    }
}
