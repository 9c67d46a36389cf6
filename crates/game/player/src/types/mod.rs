//! Identifier enums shared by the player model and its snapshot.
//!
//! Saves store these as their numeric discriminants, so each enum carries an
//! explicit `#[repr]` and (de)serializes through [`repr_serde!`].
mod badge;
mod oak_item;
mod pokeball;
mod pokemon_type;
mod region;
mod sort;
mod town;

pub use badge::Badge;
pub use oak_item::OakItem;
pub use pokeball::Pokeball;
pub use pokemon_type::PokemonType;
pub use region::{Region, Starter};
pub use sort::SortOption;
pub use town::TownRef;

/// Implements numeric serde for a `#[repr]` enum deriving `strum::FromRepr`.
macro_rules! repr_serde {
    ($ty:ty, $repr:ty) => {
        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_i64(*self as $repr as i64)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = <i64 as serde::Deserialize>::deserialize(deserializer)?;
                <$repr>::try_from(raw)
                    .ok()
                    .and_then(<$ty>::from_repr)
                    .ok_or_else(|| {
                        serde::de::Error::custom(format_args!(
                            "{raw} is not a valid {}",
                            stringify!($ty)
                        ))
                    })
            }
        }
    };
}

pub(crate) use repr_serde;
