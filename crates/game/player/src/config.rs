/// Player model constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Highest route id. Route kill counters are allocated for `0..=route_count`.
    pub route_count: usize,
    /// Number of oak item experience slots.
    pub oak_item_count: usize,
    /// Caught-species counts that must be exceeded to unlock each oak item slot.
    pub oak_item_unlocks: [usize; 3],
    /// Baseline click damage before oak item bonuses.
    pub click_attack_base: u64,
    /// Buffered domain events per receiver before lagging receivers drop old ones.
    pub event_capacity: usize,
}

impl PlayerConfig {
    // ===== compile-time constants =====
    pub const AMOUNT_OF_ROUTES: usize = 25;
    pub const AMOUNT_OF_OAKITEMS: usize = 8;
    pub const POKEBALL_TIERS: usize = 4;
    pub const OAKITEM_UNLOCKS: [usize; 3] = [15, 30, 50];

    // ===== defaults applied when a save omits a field =====
    pub const DEFAULT_ROUTE: usize = 1;
    pub const DEFAULT_POKEBALLS: i64 = 1000;
    pub const DEFAULT_ROUTE_KILLS_NEEDED: u64 = 10;

    // ===== placeholder balancing =====
    /// Rate-limit window of the sorted pokémon list, in milliseconds.
    pub const DEFAULT_CATCH_TIME_MS: u64 = 20;
    pub const DEFAULT_CLICK_ATTACK_BASE: u64 = 1;
    pub const TRAINER_EXP_FACTOR: f64 = 1.5;
    pub const EXP_DIVISOR: f64 = 9.0;
    /// Pokémon stop gaining experience at `(badges + 2) * LEVEL_CAP_STEP`.
    pub const LEVEL_CAP_STEP: u64 = 10;

    pub const DEFAULT_EVENT_CAPACITY: usize = 64;

    pub fn new() -> Self {
        Self {
            route_count: Self::AMOUNT_OF_ROUTES,
            oak_item_count: Self::AMOUNT_OF_OAKITEMS,
            oak_item_unlocks: Self::OAKITEM_UNLOCKS,
            click_attack_base: Self::DEFAULT_CLICK_ATTACK_BASE,
            event_capacity: Self::DEFAULT_EVENT_CAPACITY,
        }
    }

    pub fn with_route_count(mut self, route_count: usize) -> Self {
        self.route_count = route_count;
        self
    }

    pub fn with_oak_item_count(mut self, oak_item_count: usize) -> Self {
        self.oak_item_count = oak_item_count;
        self
    }

    pub fn with_oak_item_unlocks(mut self, oak_item_unlocks: [usize; 3]) -> Self {
        self.oak_item_unlocks = oak_item_unlocks;
        self
    }

    pub fn with_click_attack_base(mut self, click_attack_base: u64) -> Self {
        self.click_attack_base = click_attack_base;
        self
    }

    pub fn with_event_capacity(mut self, event_capacity: usize) -> Self {
        self.event_capacity = event_capacity;
        self
    }

    /// Number of route kill counters (route ids are 1-based, slot 0 is unused).
    pub fn route_slots(&self) -> usize {
        self.route_count + 1
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self::new()
    }
}
