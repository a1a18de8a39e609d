//! Escrow-style bilateral token swaps for Soroban.
//!
//! A creator offers a fixed amount of one token for a fixed amount of another
//! within a time window. Any counterparty may take the offer once; settlement
//! moves both legs in the same invocation or not at all.

#![no_std]

mod constants;
mod contract;
mod error;
mod events;
mod ledger;
mod storage;
mod types;

pub use constants::*;
pub use contract::*;
pub use error::SwapError;
pub use types::{DataKey, Order, OrderStatus};
