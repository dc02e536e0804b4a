//! In-memory store implementations
//!
//! Back the deterministic tests (including the last-unit race) and let the
//! service run without PostgreSQL. `DashMap` gives per-key locking, so the
//! conditional decrement is atomic per product, matching the SQL guard.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use super::{InventoryStore, OrderStore, StatusTransition, StoreError};
use crate::catalog::{Category, FrameColor, Product, slugify};
use crate::orders::models::{NewOrder, Order, OrderStatus, OrderSummary};

/// In-memory inventory keyed by product id
#[derive(Default)]
pub struct MemoryInventoryStore {
    products: DashMap<Uuid, Product>,
    calls: AtomicU64,
    fail_increments: AtomicBool,
}

impl MemoryInventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a product and return its id
    pub fn insert_product(
        &self,
        name: &str,
        price: i64,
        category: Category,
        color: FrameColor,
        stock: i32,
    ) -> Uuid {
        let id = Uuid::new_v4();
        let now = Utc::now();
        self.products.insert(
            id,
            Product {
                id,
                name: name.to_string(),
                slug: slugify(name),
                price,
                category,
                color,
                stock,
                description: String::new(),
                tag: String::new(),
                is_recommended: false,
                is_active: true,
                images: vec![],
                created_at: now,
                updated_at: now,
            },
        );
        id
    }

    pub fn stock_of(&self, product_id: Uuid) -> Option<i32> {
        self.products.get(&product_id).map(|p| p.stock)
    }

    pub fn set_active(&self, product_id: Uuid, active: bool) {
        if let Some(mut p) = self.products.get_mut(&product_id) {
            p.is_active = active;
        }
    }

    pub fn set_price(&self, product_id: Uuid, price: i64) {
        if let Some(mut p) = self.products.get_mut(&product_id) {
            p.price = price;
        }
    }

    /// Number of store calls made so far (any operation)
    pub fn call_count(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }

    /// Fault injection: make every `increment` fail, to exercise the
    /// best-effort rollback path
    pub fn fail_increments(&self, fail: bool) {
        self.fail_increments.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl InventoryStore for MemoryInventoryStore {
    async fn get(&self, product_id: Uuid) -> Result<Option<Product>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.products.get(&product_id).map(|p| p.clone()))
    }

    async fn conditional_decrement(
        &self,
        product_id: Uuid,
        quantity: u32,
    ) -> Result<bool, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        // get_mut holds the shard lock for the whole check-and-subtract
        match self.products.get_mut(&product_id) {
            Some(mut p) => {
                if p.stock >= quantity as i32 {
                    p.stock -= quantity as i32;
                    p.updated_at = Utc::now();
                    Ok(true)
                } else {
                    Ok(false)
                }
            }
            None => Ok(false),
        }
    }

    async fn increment(&self, product_id: Uuid, quantity: u32) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_increments.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(
                "injected increment failure".to_string(),
            ));
        }
        if let Some(mut p) = self.products.get_mut(&product_id) {
            p.stock += quantity as i32;
            p.updated_at = Utc::now();
        }
        Ok(())
    }
}

/// In-memory order store
#[derive(Default)]
pub struct MemoryOrderStore {
    orders: DashMap<Uuid, Order>,
    fail_next_create: AtomicBool,
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Fault injection: fail the next `create` call once
    pub fn fail_next_create(&self) {
        self.fail_next_create.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn create(&self, order: &NewOrder) -> Result<Uuid, StoreError> {
        if self.fail_next_create.swap(false, Ordering::SeqCst) {
            return Err(StoreError::Unavailable(
                "injected create failure".to_string(),
            ));
        }

        let id = Uuid::new_v4();
        let now = Utc::now();
        self.orders.insert(
            id,
            Order {
                id,
                customer: order.customer.clone(),
                payment_method: order.payment_method,
                items: order.lines.clone(),
                total_amount: order.total_amount,
                status: OrderStatus::Pending,
                created_at: now,
                updated_at: now,
            },
        );
        Ok(id)
    }

    async fn get(&self, order_id: Uuid) -> Result<Option<Order>, StoreError> {
        Ok(self.orders.get(&order_id).map(|o| o.clone()))
    }

    async fn list(&self, status: Option<OrderStatus>) -> Result<Vec<OrderSummary>, StoreError> {
        let mut rows: Vec<OrderSummary> = self
            .orders
            .iter()
            .filter(|o| status.is_none_or(|s| o.status == s))
            .map(|o| OrderSummary {
                id: o.id,
                customer_name: o.customer.customer_name.clone(),
                phone: o.customer.phone.clone(),
                total_amount: o.total_amount,
                status: o.status,
                items_count: o.items.len() as i64,
                created_at: o.created_at,
            })
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn transition_status(
        &self,
        order_id: Uuid,
        status: OrderStatus,
    ) -> Result<StatusTransition, StoreError> {
        // Guard and write under the same shard lock
        match self.orders.get_mut(&order_id) {
            Some(mut o) => {
                if o.status.is_terminal() && o.status != status {
                    return Ok(StatusTransition::Rejected { current: o.status });
                }
                let previous = o.status;
                o.status = status;
                o.updated_at = Utc::now();
                Ok(StatusTransition::Applied {
                    previous,
                    order: o.clone(),
                })
            }
            None => Ok(StatusTransition::NotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_conditional_decrement_is_exact() {
        let store = MemoryInventoryStore::new();
        let id = store.insert_product("Frame", 1000, Category::Optical, FrameColor::Black, 3);

        assert!(store.conditional_decrement(id, 3).await.unwrap());
        assert_eq!(store.stock_of(id), Some(0));
        assert!(!store.conditional_decrement(id, 1).await.unwrap());
        assert_eq!(store.stock_of(id), Some(0), "failed decrement must not mutate");
    }

    #[tokio::test]
    async fn test_decrement_unknown_product_reports_no_match() {
        let store = MemoryInventoryStore::new();
        assert!(!store.conditional_decrement(Uuid::new_v4(), 1).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_filters_by_status() {
        let store = MemoryOrderStore::new();
        let order = NewOrder {
            customer: crate::orders::models::CustomerInfo {
                customer_name: "A".to_string(),
                phone: "0".to_string(),
                email: None,
                address: "B".to_string(),
                note: None,
            },
            payment_method: crate::orders::models::PaymentMethod::BankTransfer,
            lines: vec![],
            total_amount: 0,
        };
        let a = store.create(&order).await.unwrap();
        let _b = store.create(&order).await.unwrap();
        store.transition_status(a, OrderStatus::Paid).await.unwrap();

        let paid = store.list(Some(OrderStatus::Paid)).await.unwrap();
        assert_eq!(paid.len(), 1);
        assert_eq!(paid[0].id, a);
        assert_eq!(store.list(None).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_transition_guard_reports_previous_status() {
        let store = MemoryOrderStore::new();
        let order = NewOrder {
            customer: crate::orders::models::CustomerInfo {
                customer_name: "A".to_string(),
                phone: "0".to_string(),
                email: None,
                address: "B".to_string(),
                note: None,
            },
            payment_method: crate::orders::models::PaymentMethod::BankTransfer,
            lines: vec![],
            total_amount: 0,
        };
        let id = store.create(&order).await.unwrap();

        match store.transition_status(id, OrderStatus::Cancelled).await.unwrap() {
            StatusTransition::Applied { previous, order } => {
                assert_eq!(previous, OrderStatus::Pending);
                assert_eq!(order.status, OrderStatus::Cancelled);
            }
            other => panic!("expected Applied, got {:?}", other),
        }

        // Repeat cancel: still applied, but previous now says cancelled
        match store.transition_status(id, OrderStatus::Cancelled).await.unwrap() {
            StatusTransition::Applied { previous, .. } => {
                assert_eq!(previous, OrderStatus::Cancelled);
            }
            other => panic!("expected Applied, got {:?}", other),
        }

        // Leaving the terminal state is rejected in the store itself
        match store.transition_status(id, OrderStatus::Paid).await.unwrap() {
            StatusTransition::Rejected { current } => {
                assert_eq!(current, OrderStatus::Cancelled);
            }
            other => panic!("expected Rejected, got {:?}", other),
        }
    }
}
