//! Order lifecycle: creation, fulfillment and cancellation of bilateral swaps.
//!
//! A creator offers `deposit_amount` of `deposit_token` in exchange for
//! `desired_amount` of `desired_token` until `expires_at`. Nothing is escrowed
//! up front; both legs are pulled with `transfer_from` when a fulfiller takes
//! the order, so both sides are validated right before settlement.

use soroban_sdk::{contract, contractimpl, log, symbol_short, Address, Env, Symbol, Vec};

use crate::error::SwapError;
use crate::events;
use crate::ledger::{AssetLedger, DEPOSIT_LEG, DESIRED_LEG};
use crate::storage::OrderStore;
use crate::types::{Order, OrderStatus};

#[contract]
pub struct TokenSwap;

#[contractimpl]
impl TokenSwap {
    /// Offers a swap and returns the new order id.
    ///
    /// `None` stands for the null token and is rejected. The creator must have
    /// approved this contract for at least `deposit_amount` and hold that much,
    /// but the deposit stays in the creator's account until the order is filled.
    pub fn create_order(
        env: Env,
        creator: Address,
        deposit_token: Option<Address>,
        deposit_amount: i128,
        desired_token: Option<Address>,
        desired_amount: i128,
        duration: u64,
    ) -> Result<u64, SwapError> {
        creator.require_auth();

        let order = open_order(
            &env,
            creator,
            deposit_token,
            deposit_amount,
            desired_token,
            desired_amount,
            duration,
        )
        .map_err(|err| rejected(&env, symbol_short!("create"), err))?;

        events::order_created(&env, &order);
        log!(&env, "order created", order.id, order.expires_at);

        Ok(order.id)
    }

    /// Takes an open order: the deposit leg goes to `fulfiller`, the desired
    /// leg goes to the creator. Either both legs move or the call fails.
    pub fn fulfill_order(env: Env, fulfiller: Address, order_id: u64) -> Result<(), SwapError> {
        fulfiller.require_auth();

        let store = OrderStore::new(&env);
        let order = settle(&env, &store, &fulfiller, order_id)
            .map_err(|err| rejected(&env, symbol_short!("fulfill"), err))?;

        events::order_filled(&env, &order, &fulfiller);
        log!(&env, "order filled", order.id);

        Ok(())
    }

    /// Withdraws an open order. Only its creator may do so, expired or not.
    pub fn cancel_order(env: Env, caller: Address, order_id: u64) -> Result<(), SwapError> {
        caller.require_auth();

        let store = OrderStore::new(&env);
        let order = withdraw(&store, &caller, order_id)
            .map_err(|err| rejected(&env, symbol_short!("cancel"), err))?;

        events::order_cancelled(&env, &order);
        log!(&env, "order cancelled", order.id);

        Ok(())
    }

    pub fn get_order(env: Env, order_id: u64) -> Option<Order> {
        OrderStore::new(&env).get(order_id).ok()
    }

    pub fn order_count(env: Env) -> u64 {
        OrderStore::new(&env).count()
    }

    /// Pages through every order ever created, oldest first.
    pub fn list_orders(env: Env, start_id: u64, limit: u32) -> Vec<Order> {
        OrderStore::new(&env).list(start_id, limit)
    }

    /// Whether the fulfillment window of an order has closed. Says nothing
    /// about its status: a completed order may also be past its expiry.
    pub fn is_expired(env: Env, order_id: u64) -> Result<bool, SwapError> {
        let order = OrderStore::new(&env).get(order_id)?;
        Ok(order.is_expired_at(env.ledger().timestamp()))
    }

    pub fn extend_order_ttl(env: Env, order_id: u64, extend_to: u32) -> Result<(), SwapError> {
        OrderStore::new(&env).extend_ttl(order_id, extend_to)
    }
}

fn open_order(
    env: &Env,
    creator: Address,
    deposit_token: Option<Address>,
    deposit_amount: i128,
    desired_token: Option<Address>,
    desired_amount: i128,
    duration: u64,
) -> Result<Order, SwapError> {
    if desired_amount <= 0 {
        return Err(SwapError::InvalidDesiredAmount);
    }
    if deposit_amount <= 0 {
        return Err(SwapError::InvalidDepositAmount);
    }
    let deposit_token = deposit_token.ok_or(SwapError::ZeroDepositToken)?;
    let desired_token = desired_token.ok_or(SwapError::ZeroDesiredToken)?;
    if deposit_token == desired_token {
        return Err(SwapError::IdenticalTokens);
    }

    AssetLedger::new(env, &deposit_token).ensure_pullable(&creator, deposit_amount, DEPOSIT_LEG)?;

    if duration == 0 {
        return Err(SwapError::InvalidDuration);
    }
    let created_at = env.ledger().timestamp();
    let expires_at = created_at
        .checked_add(duration)
        .ok_or(SwapError::Overflow)?;

    // Only reserve an id once the request is known to be valid.
    let store = OrderStore::new(env);
    let id = store.next_id()?;

    let order = Order {
        id,
        creator,
        deposit_token,
        deposit_amount,
        desired_token,
        desired_amount,
        created_at,
        expires_at,
        status: OrderStatus::Open,
        fulfiller: None,
    };
    store.insert(&order)?;

    Ok(order)
}

fn settle(
    env: &Env,
    store: &OrderStore,
    fulfiller: &Address,
    order_id: u64,
) -> Result<Order, SwapError> {
    let mut order = store.get(order_id)?;
    if order.status.is_terminal() {
        return Err(SwapError::OrderAlreadyCompleted);
    }
    if order.is_expired_at(env.ledger().timestamp()) {
        return Err(SwapError::OrderExpired);
    }

    let desired = AssetLedger::new(env, &order.desired_token);
    desired.ensure_pullable(fulfiller, order.desired_amount, DESIRED_LEG)?;

    // The creator may have spent or revoked the deposit since creation.
    let deposit = AssetLedger::new(env, &order.deposit_token);
    deposit.ensure_pullable(&order.creator, order.deposit_amount, DEPOSIT_LEG)?;

    // A failure on either leg returns an error, and the host then reverts the
    // whole invocation including a deposit leg that already moved.
    deposit.transfer_from(&order.creator, fulfiller, order.deposit_amount, DEPOSIT_LEG)?;
    desired.transfer_from(fulfiller, &order.creator, order.desired_amount, DESIRED_LEG)?;

    order.status = OrderStatus::Completed;
    order.fulfiller = Some(fulfiller.clone());
    store.update(&order)?;

    Ok(order)
}

fn withdraw(store: &OrderStore, caller: &Address, order_id: u64) -> Result<Order, SwapError> {
    let mut order = store.get(order_id)?;
    if order.creator != *caller {
        return Err(SwapError::NotOrderCreator);
    }
    if order.status.is_terminal() {
        return Err(SwapError::OrderAlreadyCompleted);
    }

    order.status = OrderStatus::Cancelled;
    store.update(&order)?;

    Ok(order)
}

fn rejected(env: &Env, operation: Symbol, err: SwapError) -> SwapError {
    log!(env, "swap rejected", operation, err as u32);
    err
}
