//! # Domain models for the product catalog and cart
//!
//! Defines the data structures the backend returns for product listings and
//! cart reads. Both are server-owned: the client never constructs them except
//! by deserializing a response, and never patches them locally; a mutation is
//! always followed by a full refetch.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Product`] | One catalog entry. `quantity` is the stock on hand, used only to cap the cart increment control. |
//! | [`CartLine`] | One product/quantity pairing in the signed-in user's cart, with the full product embedded. |
//!
//! Wire names are camelCase (`imageUrl`, `productId`, `userId`) to match the
//! backend's JSON.

use serde::{Deserialize, Serialize};

/// A product as listed by the catalog endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Whole-rupee price.
    pub price: i64,
    /// Units in stock.
    pub quantity: i64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image_url: String,
}

/// One line of the signed-in user's cart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: i64,
    pub product_id: i64,
    pub user_id: i64,
    pub quantity: i64,
    pub product: Product,
}

impl CartLine {
    /// Whether the increment control may be shown for this line.
    /// False once the cart already holds the entire stock.
    pub fn can_increment(&self) -> bool {
        self.quantity < self.product.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, stock: i64) -> Product {
        Product {
            id,
            title: format!("product-{id}"),
            description: String::new(),
            price: 100,
            quantity: stock,
            category: "gadgets".to_string(),
            image_url: String::new(),
        }
    }

    #[test]
    fn deserializes_camel_case_wire_names() {
        let line: CartLine = serde_json::from_str(
            r#"{
                "id": 1,
                "productId": 7,
                "userId": 42,
                "quantity": 2,
                "product": {
                    "id": 7,
                    "title": "Keyboard",
                    "description": "Mechanical",
                    "price": 4500,
                    "quantity": 10,
                    "category": "accessories",
                    "imageUrl": "https://cdn.example/kb.png"
                }
            }"#,
        )
        .unwrap();
        assert_eq!(line.product_id, 7);
        assert_eq!(line.user_id, 42);
        assert_eq!(line.product.image_url, "https://cdn.example/kb.png");
    }

    #[test]
    fn missing_optional_fields_default() {
        let p: Product =
            serde_json::from_str(r#"{"id":1,"title":"x","price":10,"quantity":3}"#).unwrap();
        assert_eq!(p.description, "");
        assert_eq!(p.category, "");
        assert_eq!(p.image_url, "");
    }

    #[test]
    fn increment_allowed_below_stock_only() {
        let line = CartLine {
            id: 1,
            product_id: 7,
            user_id: 1,
            quantity: 9,
            product: product(7, 10),
        };
        assert!(line.can_increment());

        let full = CartLine { quantity: 10, ..line };
        assert!(!full.can_increment());
    }
}
