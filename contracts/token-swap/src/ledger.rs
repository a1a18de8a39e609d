//! Adapter over the SEP-41 token interface.
//!
//! The swap contract never custodies assets. It only reads balances and
//! allowances and moves funds with `transfer_from`, acting as the spender.

use soroban_sdk::{token::TokenClient, Address, Env};

use crate::error::SwapError;

pub struct AssetLedger<'a> {
    token: TokenClient<'a>,
    spender: Address,
}

/// Errors to surface when one leg of a swap cannot be pulled.
#[derive(Clone, Copy)]
pub struct Shortfall {
    pub allowance: SwapError,
    pub balance: SwapError,
}

pub const DEPOSIT_LEG: Shortfall = Shortfall {
    allowance: SwapError::InsufficientAllowance,
    balance: SwapError::InsufficientBalance,
};

pub const DESIRED_LEG: Shortfall = Shortfall {
    allowance: SwapError::InsufficientDesiredAllowance,
    balance: SwapError::InsufficientDesiredBalance,
};

impl<'a> AssetLedger<'a> {
    pub fn new(env: &Env, asset: &Address) -> Self {
        Self {
            token: TokenClient::new(env, asset),
            spender: env.current_contract_address(),
        }
    }

    pub fn balance_of(&self, account: &Address) -> i128 {
        self.token.balance(account)
    }

    /// Amount `owner` has approved this contract to move.
    pub fn allowance_of(&self, owner: &Address) -> i128 {
        self.token.allowance(owner, &self.spender)
    }

    /// Checks that `amount` can be pulled from `owner`. Allowance is checked
    /// before balance so the allowance error wins when both are short.
    pub fn ensure_pullable(
        &self,
        owner: &Address,
        amount: i128,
        shortfall: Shortfall,
    ) -> Result<(), SwapError> {
        if self.allowance_of(owner) < amount {
            return Err(shortfall.allowance);
        }
        if self.balance_of(owner) < amount {
            return Err(shortfall.balance);
        }
        Ok(())
    }

    /// Moves `amount` from `from` to `to` using this contract's allowance.
    ///
    /// The token's own error code is never passed through: a refused transfer
    /// is reported as the leg's allowance shortfall if the allowance no longer
    /// covers `amount`, and as its balance shortfall otherwise (including a
    /// deauthorized sender or recipient).
    pub fn transfer_from(
        &self,
        from: &Address,
        to: &Address,
        amount: i128,
        shortfall: Shortfall,
    ) -> Result<(), SwapError> {
        match self.token.try_transfer_from(&self.spender, from, to, &amount) {
            Ok(Ok(())) => Ok(()),
            _ if self.allowance_of(from) < amount => Err(shortfall.allowance),
            _ => Err(shortfall.balance),
        }
    }
}
