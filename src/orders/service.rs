//! Order placement service
//!
//! Sequential per-line stock reservation with compensating rollback.
//! There is no cart-level transaction: correctness under partial failure
//! rests on the reservation list and the rollback pass. A crash mid-loop
//! leaves stock reserved with no order; that gap is reconciled out-of-band.

use std::sync::Arc;

use tracing::{error, info, warn};
use uuid::Uuid;

use super::error::OrderError;
use super::models::{NewOrder, Order, OrderLine, OrderStatus, OrderSummary, PlaceOrderCommand};
use crate::store::{InventoryStore, OrderStore, StatusTransition};

/// Checkout + lifecycle service over injected store seams.
///
/// Constructed once at startup and shared by reference; handlers never
/// reach the stores directly for stock mutation.
pub struct OrderService {
    inventory: Arc<dyn InventoryStore>,
    orders: Arc<dyn OrderStore>,
    restock_on_cancel: bool,
}

impl OrderService {
    pub fn new(
        inventory: Arc<dyn InventoryStore>,
        orders: Arc<dyn OrderStore>,
        restock_on_cancel: bool,
    ) -> Self {
        Self {
            inventory,
            orders,
            restock_on_cancel,
        }
    }

    /// Place an order: reserve stock per line, compute the total
    /// server-side, persist exactly one order record.
    ///
    /// On any failure after the first successful reservation, every
    /// reserved quantity is restored before the error is returned.
    pub async fn place_order(&self, cmd: PlaceOrderCommand) -> Result<Uuid, OrderError> {
        if cmd.items.is_empty() {
            return Err(OrderError::InvalidRequest("cart is empty".to_string()));
        }

        // Lines whose decrement already committed, in reservation order
        let mut reserved: Vec<(Uuid, u32)> = Vec::with_capacity(cmd.items.len());
        let mut lines: Vec<OrderLine> = Vec::with_capacity(cmd.items.len());

        for (product_id, quantity) in &cmd.items {
            let (product_id, quantity) = (*product_id, *quantity);

            if quantity == 0 {
                self.rollback(&reserved).await;
                return Err(OrderError::InvalidRequest(format!(
                    "quantity must be positive for product {}",
                    product_id
                )));
            }

            // Snapshot source: the store, never the client payload
            let product = match self.inventory.get(product_id).await {
                Ok(Some(p)) => p,
                Ok(None) => {
                    self.rollback(&reserved).await;
                    return Err(OrderError::InvalidRequest(format!(
                        "unknown product {}",
                        product_id
                    )));
                }
                Err(e) => {
                    self.rollback(&reserved).await;
                    return Err(e.into());
                }
            };
            if !product.is_active {
                self.rollback(&reserved).await;
                return Err(OrderError::InvalidRequest(format!(
                    "product {} is not available",
                    product_id
                )));
            }

            // Atomic compare-and-decrement: the only stock write on this path
            match self.inventory.conditional_decrement(product_id, quantity).await {
                Ok(true) => {}
                Ok(false) => {
                    self.rollback(&reserved).await;
                    return Err(OrderError::InsufficientStock { product_id });
                }
                Err(e) => {
                    self.rollback(&reserved).await;
                    return Err(e.into());
                }
            }

            reserved.push((product_id, quantity));
            lines.push(OrderLine {
                product_id,
                name: product.name,
                price: product.price,
                quantity,
            });
        }

        // Authoritative total; any caller-supplied figure was discarded at
        // the boundary. Checked arithmetic: an admin-set price large enough
        // to overflow must fail the order, not wrap or panic.
        let total_amount = match lines.iter().try_fold(0i64, |acc, l| {
            l.price
                .checked_mul(l.quantity as i64)
                .and_then(|line_total| acc.checked_add(line_total))
        }) {
            Some(total) => total,
            None => {
                self.rollback(&reserved).await;
                return Err(OrderError::InvalidRequest(
                    "order total exceeds the representable amount".to_string(),
                ));
            }
        };

        let new_order = NewOrder {
            customer: cmd.customer,
            payment_method: cmd.payment_method,
            lines,
            total_amount,
        };

        let order_id = match self.orders.create(&new_order).await {
            Ok(id) => id,
            Err(e) => {
                self.rollback(&reserved).await;
                return Err(e.into());
            }
        };

        info!(
            order_id = %order_id,
            items = new_order.lines.len(),
            total_amount,
            "Order placed"
        );
        Ok(order_id)
    }

    /// Compensating rollback: restore every reserved quantity.
    ///
    /// Best-effort and non-transactional. A failed increment leaves stock
    /// under-counted relative to true availability; it is logged for
    /// out-of-band reconciliation and not retried.
    async fn rollback(&self, reserved: &[(Uuid, u32)]) {
        for (product_id, quantity) in reserved {
            if let Err(e) = self.inventory.increment(*product_id, *quantity).await {
                error!(
                    product_id = %product_id,
                    quantity,
                    error = %e,
                    "Rollback increment failed; stock is under-counted and needs manual reconciliation"
                );
            }
        }
    }

    /// Apply an admin status transition.
    ///
    /// Idempotent-accepting: re-applying the current status succeeds.
    /// Leaving a terminal state (completed/cancelled) for a different
    /// status is rejected. When `restock_on_cancel` is enabled, the first
    /// transition into cancelled restores each line's stock, once.
    ///
    /// The guard lives in the store, not here: reading the status and then
    /// writing it would let two concurrent cancels both look like the
    /// first one and restock twice. The store's `previous` tells us
    /// exactly one caller won the transition into cancelled.
    pub async fn update_status(
        &self,
        order_id: Uuid,
        status: OrderStatus,
    ) -> Result<Order, OrderError> {
        let (previous, updated) = match self.orders.transition_status(order_id, status).await? {
            StatusTransition::Applied { previous, order } => (previous, order),
            StatusTransition::Rejected { current } => {
                return Err(OrderError::InvalidStatus(format!(
                    "order is already {}",
                    current.as_str()
                )));
            }
            StatusTransition::NotFound => return Err(OrderError::OrderNotFound),
        };

        if status == OrderStatus::Cancelled && previous != OrderStatus::Cancelled {
            if self.restock_on_cancel {
                for line in &updated.items {
                    if let Err(e) = self.inventory.increment(line.product_id, line.quantity).await
                    {
                        error!(
                            order_id = %order_id,
                            product_id = %line.product_id,
                            quantity = line.quantity,
                            error = %e,
                            "Restock on cancel failed; needs manual reconciliation"
                        );
                    }
                }
                info!(order_id = %order_id, "Cancelled order restocked");
            } else {
                warn!(
                    order_id = %order_id,
                    "Order cancelled without restock (restock_on_cancel is off)"
                );
            }
        }

        Ok(updated)
    }

    /// Full order lookup (back office + order confirmation page)
    pub async fn get_order(&self, order_id: Uuid) -> Result<Order, OrderError> {
        self.orders
            .get(order_id)
            .await?
            .ok_or(OrderError::OrderNotFound)
    }

    /// Back-office order list, optionally filtered by status
    pub async fn list_orders(
        &self,
        status: Option<OrderStatus>,
    ) -> Result<Vec<OrderSummary>, OrderError> {
        Ok(self.orders.list(status).await?)
    }
}
