use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::types::Order;

pub const ORDER_CREATED: Symbol = symbol_short!("created");
pub const ORDER_FILLED: Symbol = symbol_short!("filled");
pub const ORDER_CANCELLED: Symbol = symbol_short!("cancelled");

pub fn order_created(env: &Env, order: &Order) {
    env.events().publish(
        (ORDER_CREATED, order.id),
        (
            order.creator.clone(),
            order.deposit_token.clone(),
            order.deposit_amount,
            order.desired_token.clone(),
            order.desired_amount,
            order.expires_at,
        ),
    );
}

pub fn order_filled(env: &Env, order: &Order, fulfiller: &Address) {
    env.events().publish(
        (ORDER_FILLED, order.id),
        (order.creator.clone(), fulfiller.clone()),
    );
}

pub fn order_cancelled(env: &Env, order: &Order) {
    env.events().publish((ORDER_CANCELLED, order.id), order.creator.clone());
}
