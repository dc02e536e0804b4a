//! Request DTOs and boundary validation
//!
//! Every admin/storefront mutation deserializes into one of these, is
//! validated once here, and only then becomes a typed command for the
//! domain services. Handlers never consume raw JSON maps.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::catalog::{Category, FrameColor, NewProduct, ProductPatch};
use crate::orders::models::{CustomerInfo, PaymentMethod, PlaceOrderCommand};

// ============================================================================
// Checkout
// ============================================================================

/// One cart line on the wire.
///
/// `name` and `price` are what the storefront cart displays; the server
/// re-reads both from the inventory store and ignores these fields.
// Serialize is required by the validator error params on the items field
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemPayload {
    pub product_id: Uuid,
    #[serde(default)]
    #[allow(dead_code)]
    pub name: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    pub price: Option<i64>,
    pub quantity: u32,
}

/// Checkout request (camelCase wire format)
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    #[validate(length(min = 1, message = "customer name is required"))]
    pub customer_name: String,
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    #[validate(email(message = "invalid email"))]
    pub email: Option<String>,
    #[validate(length(min = 1, message = "address is required"))]
    pub address: String,
    pub note: Option<String>,
    pub payment_method: PaymentMethod,
    #[validate(length(min = 1, message = "cart is empty"))]
    pub items: Vec<OrderItemPayload>,
    /// Client-computed total; discarded, never trusted
    #[serde(default)]
    #[allow(dead_code)]
    pub total_amount: Option<i64>,
}

impl PlaceOrderRequest {
    /// Validate and convert into the typed command consumed by the
    /// placement service
    pub fn into_command(self) -> Result<PlaceOrderCommand, String> {
        self.validate().map_err(|e| e.to_string())?;

        Ok(PlaceOrderCommand {
            customer: CustomerInfo {
                customer_name: self.customer_name,
                phone: self.phone,
                email: self.email,
                address: self.address,
                note: self.note,
            },
            payment_method: self.payment_method,
            items: self
                .items
                .into_iter()
                .map(|i| (i.product_id, i.quantity))
                .collect(),
        })
    }
}

// ============================================================================
// Admin: catalog
// ============================================================================

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(range(min = 0, message = "price must be non-negative"))]
    pub price: i64,
    pub category: Category,
    pub color: FrameColor,
    #[validate(range(min = 0, message = "stock must be non-negative"))]
    #[serde(default)]
    pub stock: i32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub is_recommended: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub images: Vec<String>,
}

fn default_true() -> bool {
    true
}

impl CreateProductRequest {
    pub fn into_new_product(self) -> Result<NewProduct, String> {
        self.validate().map_err(|e| e.to_string())?;
        Ok(NewProduct {
            name: self.name,
            price: self.price,
            category: self.category,
            color: self.color,
            stock: self.stock,
            description: self.description,
            tag: self.tag,
            is_recommended: self.is_recommended,
            is_active: self.is_active,
            images: self.images,
        })
    }
}

/// Partial product update. `slug` is deliberately absent: it always
/// follows the name.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: Option<String>,
    #[validate(range(min = 0, message = "price must be non-negative"))]
    pub price: Option<i64>,
    pub category: Option<Category>,
    pub color: Option<FrameColor>,
    #[validate(range(min = 0, message = "stock must be non-negative"))]
    pub stock: Option<i32>,
    pub description: Option<String>,
    pub tag: Option<String>,
    pub is_recommended: Option<bool>,
    pub is_active: Option<bool>,
    pub images: Option<Vec<String>>,
}

impl UpdateProductRequest {
    pub fn into_patch(self) -> Result<ProductPatch, String> {
        self.validate().map_err(|e| e.to_string())?;
        Ok(ProductPatch {
            name: self.name,
            price: self.price,
            category: self.category,
            color: self.color,
            stock: self.stock,
            description: self.description,
            tag: self.tag,
            is_recommended: self.is_recommended,
            is_active: self.is_active,
            images: self.images,
        })
    }
}

// ============================================================================
// Admin: orders / auth
// ============================================================================

/// Status update body: `{"status": "paid"}`. Kept as a raw string so the
/// handler can report the allowed set on a bad value.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderStatusRequest {
    pub status: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AdminLoginRequest {
    pub password: String,
}

// ============================================================================
// Appointments
// ============================================================================

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookAppointmentRequest {
    #[validate(length(min = 1, message = "full name is required"))]
    pub full_name: String,
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    #[validate(email(message = "invalid email"))]
    pub email: Option<String>,
    pub preferred_date: chrono::NaiveDate,
    #[validate(length(min = 1, message = "time slot is required"))]
    pub time_slot: String,
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkout_json(items: &str) -> String {
        format!(
            r#"{{
                "customerName": "Somchai J.",
                "phone": "0812345678",
                "address": "99 Sukhumvit Rd",
                "paymentMethod": "bank_transfer",
                "items": {items}
            }}"#
        )
    }

    #[test]
    fn test_place_order_request_happy_path() {
        let id = Uuid::new_v4();
        let json = checkout_json(&format!(
            r#"[{{"productId": "{id}", "name": "Frame", "price": 249000, "quantity": 2}}]"#
        ));
        let req: PlaceOrderRequest = serde_json::from_str(&json).unwrap();
        let cmd = req.into_command().unwrap();
        assert_eq!(cmd.items, vec![(id, 2)]);
        assert_eq!(cmd.customer.customer_name, "Somchai J.");
    }

    #[test]
    fn test_client_total_is_dropped() {
        let id = Uuid::new_v4();
        let mut json: serde_json::Value = serde_json::from_str(&checkout_json(&format!(
            r#"[{{"productId": "{id}", "quantity": 1}}]"#
        )))
        .unwrap();
        json["totalAmount"] = serde_json::json!(1);
        let req: PlaceOrderRequest = serde_json::from_value(json).unwrap();
        // The command has no total field at all; nothing to trust
        let cmd = req.into_command().unwrap();
        assert_eq!(cmd.items.len(), 1);
    }

    #[test]
    fn test_empty_cart_rejected_at_boundary() {
        let req: PlaceOrderRequest =
            serde_json::from_str(&checkout_json("[]")).unwrap();
        assert!(req.into_command().is_err());
    }

    #[test]
    fn test_missing_customer_name_rejected() {
        let id = Uuid::new_v4();
        let json = checkout_json(&format!(r#"[{{"productId": "{id}", "quantity": 1}}]"#))
            .replace("Somchai J.", "");
        let req: PlaceOrderRequest = serde_json::from_str(&json).unwrap();
        assert!(req.into_command().is_err());
    }

    #[test]
    fn test_unknown_payment_method_fails_deserialization() {
        let id = Uuid::new_v4();
        let json = checkout_json(&format!(r#"[{{"productId": "{id}", "quantity": 1}}]"#))
            .replace("bank_transfer", "credit_card");
        assert!(serde_json::from_str::<PlaceOrderRequest>(&json).is_err());
    }

    #[test]
    fn test_update_product_rejects_negative_price() {
        let req: UpdateProductRequest =
            serde_json::from_str(r#"{"price": -5}"#).unwrap();
        assert!(req.into_patch().is_err());
    }

    #[test]
    fn test_update_product_ignores_slug_key() {
        // Unknown keys (like a client-sent slug) are simply dropped
        let req: UpdateProductRequest =
            serde_json::from_str(r#"{"slug": "hacked", "tag": "new"}"#).unwrap();
        let patch = req.into_patch().unwrap();
        assert_eq!(patch.tag.as_deref(), Some("new"));
    }
}
