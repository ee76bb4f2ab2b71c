use serde::{Deserialize, Serialize};

/// One line of a submitted order. `id` is expected to name a menu item but
/// is not checked against the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    #[serde(default)]
    pub is_veg: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub items: Vec<OrderItem>,
    pub total: f64,
    #[serde(default)]
    pub table_number: Option<u32>,
    pub payment_method: String, // "online" | "counter" by default
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Confirmation {
    pub status: String,
    pub message: String,
}

impl Confirmation {
    pub fn received() -> Self {
        Self {
            status: "confirmed".into(),
            message: "Order received!".into(),
        }
    }
}

#[cfg(test)]
mod dto_tests {
    use super::*;

    #[test]
    fn order_without_table_or_veg_flags_deserializes() {
        let order: Order = serde_json::from_str(
            r#"{"items":[{"id":"dr1","name":"Tea","price":30,"quantity":2}],
                "total":60,"payment_method":"counter"}"#,
        )
        .unwrap();
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].is_veg, None);
        assert_eq!(order.table_number, None);
        assert_eq!(order.total, 60.0);
    }

    #[test]
    fn negative_quantity_still_deserializes() {
        let order: Order = serde_json::from_str(
            r#"{"items":[{"id":"dr1","name":"Tea","price":30,"quantity":-1,"is_veg":true}],
                "total":-30,"table_number":4,"payment_method":"online"}"#,
        )
        .unwrap();
        assert_eq!(order.items[0].quantity, -1);
        assert_eq!(order.table_number, Some(4));
    }

    #[test]
    fn confirmation_shape() {
        let json = serde_json::to_value(Confirmation::received()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "confirmed", "message": "Order received!"})
        );
    }
}
