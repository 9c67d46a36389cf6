use crate::types::OakItem;

/// Oak item bonus system.
///
/// `use_item` is side-effecting (it spends a charge or levels the item), so
/// implementations hold their own interior mutability; the player only ever
/// borrows the oracle immutably.
pub trait BonusOracle {
    fn is_active(&self, item: OakItem) -> bool;

    /// Multiplier granted by `item`. Only meaningful while the item is active.
    fn calculate_bonus(&self, item: OakItem) -> f64;

    fn use_item(&self, item: OakItem);
}

/// Bonus system with nothing equipped.
#[derive(Clone, Copy, Debug, Default)]
pub struct InactiveBonuses;

impl BonusOracle for InactiveBonuses {
    fn is_active(&self, _item: OakItem) -> bool {
        false
    }

    fn calculate_bonus(&self, _item: OakItem) -> f64 {
        1.0
    }

    fn use_item(&self, _item: OakItem) {}
}
