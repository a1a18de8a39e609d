//! Order store backed by contract storage.
//!
//! The id counter lives in instance storage, orders live in persistent storage
//! under `DataKey::Order(id)`. Orders are never removed, so the store doubles as
//! the audit log of every swap ever offered.

use soroban_sdk::{Env, Vec};

use crate::constants::{
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, MAX_PAGE_SIZE, ORDER_BUMP_AMOUNT,
    ORDER_LIFETIME_THRESHOLD,
};
use crate::error::SwapError;
use crate::types::{DataKey, Order};

pub struct OrderStore<'a> {
    env: &'a Env,
}

impl<'a> OrderStore<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }

    /// Number of orders ever created, which is also the last issued id.
    pub fn count(&self) -> u64 {
        self.env
            .storage()
            .instance()
            .get(&DataKey::OrderCount)
            .unwrap_or(0)
    }

    /// Reserves the next id. Ids start at 1 and are never reused.
    pub fn next_id(&self) -> Result<u64, SwapError> {
        let id = self.count().checked_add(1).ok_or(SwapError::Overflow)?;
        let instance = self.env.storage().instance();
        instance.set(&DataKey::OrderCount, &id);
        instance.extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        Ok(id)
    }

    pub fn insert(&self, order: &Order) -> Result<(), SwapError> {
        let key = DataKey::Order(order.id);
        if self.env.storage().persistent().has(&key) {
            return Err(SwapError::DuplicateOrderId);
        }
        self.write(&key, order);
        Ok(())
    }

    pub fn get(&self, id: u64) -> Result<Order, SwapError> {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::Order(id))
            .ok_or(SwapError::OrderNotFound)
    }

    pub fn update(&self, order: &Order) -> Result<(), SwapError> {
        let key = DataKey::Order(order.id);
        if !self.env.storage().persistent().has(&key) {
            return Err(SwapError::OrderNotFound);
        }
        self.write(&key, order);
        Ok(())
    }

    /// Orders in creation order starting at `start_id`, at most `limit` of them.
    pub fn list(&self, start_id: u64, limit: u32) -> Vec<Order> {
        let mut orders = Vec::new(self.env);
        let limit = limit.min(MAX_PAGE_SIZE);
        let count = self.count();
        let mut id = start_id.max(1);

        while id <= count && orders.len() < limit {
            if let Ok(order) = self.get(id) {
                orders.push_back(order);
            }
            id += 1;
        }
        orders
    }

    pub fn extend_ttl(&self, id: u64, extend_to: u32) -> Result<(), SwapError> {
        let key = DataKey::Order(id);
        let persistent = self.env.storage().persistent();
        if !persistent.has(&key) {
            return Err(SwapError::OrderNotFound);
        }
        persistent.extend_ttl(&key, extend_to, extend_to);
        Ok(())
    }

    fn write(&self, key: &DataKey, order: &Order) {
        let persistent = self.env.storage().persistent();
        persistent.set(key, order);
        persistent.extend_ttl(key, ORDER_LIFETIME_THRESHOLD, ORDER_BUMP_AMOUNT);
    }
}
