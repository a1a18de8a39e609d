use core::fmt;

use soroban_sdk::contracterror;

/// Every way a swap operation can be rejected.
///
/// Discriminants are part of the contract ABI and must never be renumbered.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SwapError {
    // Input validation
    InvalidDepositAmount = 1,
    InvalidDesiredAmount = 2,
    ZeroDepositToken = 3,
    ZeroDesiredToken = 4,
    IdenticalTokens = 5,
    InvalidDuration = 6,
    Overflow = 7,

    // Ledger shortfalls
    InsufficientAllowance = 10,
    InsufficientBalance = 11,
    InsufficientDesiredAllowance = 12,
    InsufficientDesiredBalance = 13,

    // Order state
    OrderNotFound = 20,
    OrderAlreadyCompleted = 21,
    OrderExpired = 22,
    NotOrderCreator = 23,
    DuplicateOrderId = 24,
}

impl SwapError {
    /// Canonical human-readable reason for the rejection.
    pub const fn reason(&self) -> &'static str {
        match self {
            SwapError::InvalidDepositAmount => "Deposit amount must be greater than zero",
            SwapError::InvalidDesiredAmount => "Desired amount must be greater than zero",
            SwapError::ZeroDepositToken => "Invalid deposit token address",
            SwapError::ZeroDesiredToken => "Invalid desired token address",
            SwapError::IdenticalTokens => "Deposit and desired tokens must be different",
            SwapError::InvalidDuration => "Duration must be greater than zero",
            SwapError::Overflow => "Order expiry overflows the ledger clock",
            SwapError::InsufficientAllowance => "Insufficient allowance for deposit token",
            SwapError::InsufficientBalance => "Insufficient balance of deposit token",
            SwapError::InsufficientDesiredAllowance => "Insufficient allowance for desired token",
            SwapError::InsufficientDesiredBalance => "Insufficient balance of desired token",
            SwapError::OrderNotFound => "Order does not exist",
            SwapError::OrderAlreadyCompleted => "Order already completed",
            SwapError::OrderExpired => "Order has expired",
            SwapError::NotOrderCreator => "Only the order creator can cancel",
            SwapError::DuplicateOrderId => "Order id already in use",
        }
    }
}

impl fmt::Display for SwapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}
