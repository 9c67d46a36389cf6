use bitflags::bitflags;

bitflags! {
    /// Tracks which fields of a [`crate::PlayerState`] changed since the last
    /// [`crate::PlayerState::take_changes`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct PlayerFields: u32 {
        const MONEY              = 1 << 0;
        const DUNGEON_TOKENS     = 1 << 1;
        const ROUTE              = 1 << 2;
        const ROUTE_KILLS        = 1 << 3;
        const ROUTE_KILLS_NEEDED = 1 << 4;
        const REGION             = 1 << 5;
        const TOWN               = 1 << 6;
        const STARTER            = 1 << 7;
        const CAUGHT_POKEMON     = 1 << 8;
        const CAUGHT_SHINY       = 1 << 9;
        const GYM_BADGES         = 1 << 10;
        const POKEBALLS          = 1 << 11;
        const BALL_SELECTION     = 1 << 12;
        const SORT               = 1 << 13;
        const OAK_ITEM_EXP       = 1 << 14;
        const OAK_ITEMS_EQUIPPED = 1 << 15;

        /// Fields written by [`crate::PlayerState::to_snapshot`].
        const PERSISTED = Self::MONEY.bits()
            | Self::DUNGEON_TOKENS.bits()
            | Self::ROUTE.bits()
            | Self::ROUTE_KILLS.bits()
            | Self::ROUTE_KILLS_NEEDED.bits()
            | Self::REGION.bits()
            | Self::STARTER.bits()
            | Self::CAUGHT_POKEMON.bits()
            | Self::CAUGHT_SHINY.bits()
            | Self::GYM_BADGES.bits()
            | Self::POKEBALLS.bits()
            | Self::BALL_SELECTION.bits()
            | Self::SORT.bits();
    }
}
