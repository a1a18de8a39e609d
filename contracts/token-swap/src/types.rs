use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OrderStatus {
    Open,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Completed and Cancelled orders accept no further transitions.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, OrderStatus::Open)
    }
}

/// A single fixed-amount bilateral trade offered by `creator`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Order {
    pub id: u64,
    pub creator: Address,
    pub deposit_token: Address,
    pub deposit_amount: i128,
    pub desired_token: Address,
    pub desired_amount: i128,
    pub created_at: u64,
    pub expires_at: u64,
    pub status: OrderStatus,
    pub fulfiller: Option<Address>,
}

impl Order {
    pub fn is_expired_at(&self, now: u64) -> bool {
        now > self.expires_at
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    OrderCount,
    Order(u64),
}
