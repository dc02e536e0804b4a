//! Checkout invariants under mixed and concurrent workloads
//!
//! Runs the placement service against the in-memory stores, which use the
//! same compare-and-decrement contract as the SQL implementation.

use std::sync::Arc;

use uuid::Uuid;

use optic_shop::catalog::{Category, FrameColor};
use optic_shop::orders::models::{CustomerInfo, PlaceOrderCommand};
use optic_shop::{
    MemoryInventoryStore, MemoryOrderStore, OrderError, OrderService, OrderStatus, PaymentMethod,
};

fn command(items: Vec<(Uuid, u32)>) -> PlaceOrderCommand {
    PlaceOrderCommand {
        customer: CustomerInfo {
            customer_name: "Walk-in Customer".to_string(),
            phone: "0800000000".to_string(),
            email: None,
            address: "Shop front".to_string(),
            note: None,
        },
        payment_method: PaymentMethod::CashOnPickup,
        items,
    }
}

struct Harness {
    inventory: Arc<MemoryInventoryStore>,
    orders: Arc<MemoryOrderStore>,
    svc: Arc<OrderService>,
    ids: Vec<Uuid>,
}

fn setup(stocks: &[i32]) -> Harness {
    let inventory = Arc::new(MemoryInventoryStore::new());
    let ids: Vec<Uuid> = stocks
        .iter()
        .enumerate()
        .map(|(i, &stock)| {
            inventory.insert_product(
                &format!("Frame {}", i),
                1000_00 + i as i64 * 100_00,
                Category::Optical,
                FrameColor::Black,
                stock,
            )
        })
        .collect();
    let orders = Arc::new(MemoryOrderStore::new());
    let svc = Arc::new(OrderService::new(
        inventory.clone(),
        orders.clone(),
        false,
    ));
    Harness {
        inventory,
        orders,
        svc,
        ids,
    }
}

#[tokio::test]
async fn stock_conservation_over_mixed_outcomes() {
    let h = setup(&[5, 3, 0]);

    // Success: 2x product0 + 1x product1
    h.svc
        .place_order(command(vec![(h.ids[0], 2), (h.ids[1], 1)]))
        .await
        .expect("Should place order");

    // Failure: product2 has no stock, product0's reservation must be undone
    let err = h
        .svc
        .place_order(command(vec![(h.ids[0], 1), (h.ids[2], 1)]))
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::InsufficientStock { .. }));

    // Failure: over-ask on product1
    let err = h
        .svc
        .place_order(command(vec![(h.ids[1], 99)]))
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::InsufficientStock { .. }));

    // Exactly the successful reservation is reflected, nothing else
    assert_eq!(h.inventory.stock_of(h.ids[0]), Some(3));
    assert_eq!(h.inventory.stock_of(h.ids[1]), Some(2));
    assert_eq!(h.inventory.stock_of(h.ids[2]), Some(0));
    assert_eq!(h.orders.order_count(), 1);
}

#[tokio::test]
async fn totals_are_recomputed_per_line() {
    let h = setup(&[10, 10]);

    let order_id = h
        .svc
        .place_order(command(vec![(h.ids[0], 3), (h.ids[1], 2)]))
        .await
        .expect("Should place order");

    let order = h.svc.get_order(order_id).await.expect("Should load order");
    let expected: i64 = order
        .items
        .iter()
        .map(|l| l.price * l.quantity as i64)
        .sum();
    assert_eq!(order.total_amount, expected);
    assert_eq!(order.total_amount, 3 * 1000_00 + 2 * 1100_00);
    assert_eq!(h.orders.order_count(), 1);
}

#[tokio::test]
async fn concurrent_checkouts_never_oversell() {
    let h = setup(&[10]);
    let product = h.ids[0];

    // 25 customers race for 10 units, one unit each
    let handles: Vec<_> = (0..25)
        .map(|_| {
            let svc = h.svc.clone();
            tokio::spawn(async move { svc.place_order(command(vec![(product, 1)])).await })
        })
        .collect();

    let mut successes = 0;
    let mut stock_failures = 0;
    for handle in handles {
        match handle.await.expect("task should not panic") {
            Ok(_) => successes += 1,
            Err(OrderError::InsufficientStock { product_id }) => {
                assert_eq!(product_id, product);
                stock_failures += 1;
            }
            Err(other) => panic!("unexpected error: {:?}", other),
        }
    }

    assert_eq!(successes, 10, "every unit is sold exactly once");
    assert_eq!(stock_failures, 15);
    assert_eq!(h.inventory.stock_of(product), Some(0));
    assert_eq!(h.orders.order_count(), 10);
}

#[tokio::test]
async fn concurrent_multi_line_carts_conserve_stock() {
    let h = setup(&[4, 4]);
    let (a, b) = (h.ids[0], h.ids[1]);

    // Carts overlap in both orders so some must fail and roll back
    // across products
    let carts = vec![
        vec![(a, 3), (b, 3)],
        vec![(b, 3), (a, 3)],
        vec![(a, 2)],
        vec![(b, 2)],
    ];

    let handles: Vec<_> = carts
        .into_iter()
        .map(|items| {
            let svc = h.svc.clone();
            tokio::spawn(async move { svc.place_order(command(items)).await })
        })
        .collect();
    for handle in handles {
        // Each cart either fully succeeds or fully rolls back
        let _ = handle.await.expect("task should not panic");
    }

    // Conservation: units missing from inventory == units across orders
    let mut sold = 0i32;
    for summary in h.svc.list_orders(None).await.expect("Should list orders") {
        let order = h
            .svc
            .get_order(summary.id)
            .await
            .expect("Should load order");
        sold += order.items.iter().map(|l| l.quantity as i32).sum::<i32>();
    }
    let remaining: i32 = [a, b]
        .iter()
        .map(|id| h.inventory.stock_of(*id).unwrap())
        .sum();
    assert_eq!(sold + remaining, 8, "no unit vanished or was double-sold");
    assert!(h.inventory.stock_of(a).unwrap() >= 0);
    assert!(h.inventory.stock_of(b).unwrap() >= 0);
}

#[tokio::test]
async fn failed_checkout_leaves_inventory_at_precall_values() {
    let h = setup(&[7, 1]);

    // Second line over-asks, so the first line's reservation must be undone
    let err = h
        .svc
        .place_order(command(vec![(h.ids[0], 5), (h.ids[1], 2)]))
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::InsufficientStock { .. }));

    assert_eq!(h.inventory.stock_of(h.ids[0]), Some(7));
    assert_eq!(h.inventory.stock_of(h.ids[1]), Some(1));
    assert_eq!(h.orders.order_count(), 0);
}

#[tokio::test]
async fn persist_failure_restores_all_reservations() {
    let h = setup(&[6, 6]);
    h.orders.fail_next_create();

    let err = h
        .svc
        .place_order(command(vec![(h.ids[0], 2), (h.ids[1], 3)]))
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::Store(_)));

    assert_eq!(h.inventory.stock_of(h.ids[0]), Some(6));
    assert_eq!(h.inventory.stock_of(h.ids[1]), Some(6));
    assert_eq!(h.orders.order_count(), 0);

    // The store recovers, so the same cart goes through afterwards
    h.svc
        .place_order(command(vec![(h.ids[0], 2), (h.ids[1], 3)]))
        .await
        .expect("Should place order after transient failure");
    assert_eq!(h.inventory.stock_of(h.ids[0]), Some(4));
    assert_eq!(h.inventory.stock_of(h.ids[1]), Some(3));
}

#[tokio::test]
async fn lifecycle_walkthrough() {
    let h = setup(&[5]);
    let order_id = h
        .svc
        .place_order(command(vec![(h.ids[0], 1)]))
        .await
        .expect("Should place order");

    for status in [OrderStatus::Paid, OrderStatus::Shipped, OrderStatus::Completed] {
        let updated = h
            .svc
            .update_status(order_id, status)
            .await
            .expect("Should update status");
        assert_eq!(updated.status, status);
    }

    // Completed is terminal, cancelling now must fail
    let err = h
        .svc
        .update_status(order_id, OrderStatus::Cancelled)
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::InvalidStatus(_)));
}
