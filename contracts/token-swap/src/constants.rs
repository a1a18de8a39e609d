//! Storage lifetime policy and query limits.

/// Roughly one day of ledgers at a 5 second close time.
pub const DAY_IN_LEDGERS: u32 = 17280;

pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

// Orders are kept for audit long after they reach a terminal state.
pub const ORDER_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const ORDER_LIFETIME_THRESHOLD: u32 = ORDER_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Upper bound on the number of orders returned by a single `list_orders` call.
pub const MAX_PAGE_SIZE: u32 = 50;
