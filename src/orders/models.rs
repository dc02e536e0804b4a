//! Order types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// How the customer pays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    BankTransfer,
    CashOnPickup,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::BankTransfer => "bank_transfer",
            PaymentMethod::CashOnPickup => "cash_on_pickup",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "bank_transfer" => Some(PaymentMethod::BankTransfer),
            "cash_on_pickup" => Some(PaymentMethod::CashOnPickup),
            _ => None,
        }
    }
}

/// Order lifecycle status
///
/// pending -> paid -> shipped -> completed, with cancellation possible
/// from any non-terminal state. Completed and cancelled are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Paid,
    Shipped,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(OrderStatus::Pending),
            "paid" => Some(OrderStatus::Paid),
            "shipped" => Some(OrderStatus::Shipped),
            "completed" => Some(OrderStatus::Completed),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }
}

/// One product + quantity within an order, with name/price frozen at
/// order time. Later catalog edits never alter historical orders.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: Uuid,
    pub name: String,
    /// Unit price snapshot, smallest currency unit
    pub price: i64,
    pub quantity: u32,
}

/// Customer contact captured at checkout
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub customer_name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Validated checkout command, produced once at the API boundary.
///
/// Quantities are already known positive; product existence and stock are
/// checked against the inventory store by the placement service.
#[derive(Debug, Clone)]
pub struct PlaceOrderCommand {
    pub customer: CustomerInfo,
    pub payment_method: PaymentMethod,
    /// (product_id, quantity), in cart order
    pub items: Vec<(Uuid, u32)>,
}

/// Order record ready for persistence (status is always pending)
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer: CustomerInfo,
    pub payment_method: PaymentMethod,
    pub lines: Vec<OrderLine>,
    /// Computed server-side; never taken from the caller
    pub total_amount: i64,
}

/// Persisted order
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    #[serde(flatten)]
    pub customer: CustomerInfo,
    pub payment_method: PaymentMethod,
    pub items: Vec<OrderLine>,
    pub total_amount: i64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Row for the back-office order list
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub id: Uuid,
    pub customer_name: String,
    pub phone: String,
    pub total_amount: i64,
    pub status: OrderStatus,
    pub items_count: i64,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_rejects_unknown() {
        assert_eq!(OrderStatus::parse("shipped"), Some(OrderStatus::Shipped));
        assert_eq!(OrderStatus::parse("refunded"), None);
        assert_eq!(OrderStatus::parse("PENDING"), None);
    }

    #[test]
    fn test_terminal_states() {
        assert!(OrderStatus::Completed.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::Pending.is_terminal());
        assert!(!OrderStatus::Paid.is_terminal());
        assert!(!OrderStatus::Shipped.is_terminal());
    }

    #[test]
    fn test_payment_method_wire_format() {
        let m: PaymentMethod = serde_json::from_str("\"bank_transfer\"").unwrap();
        assert_eq!(m, PaymentMethod::BankTransfer);
        assert!(serde_json::from_str::<PaymentMethod>("\"credit_card\"").is_err());
    }
}
