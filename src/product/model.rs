//! Stored product record and operation inputs

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::pricing;

/// A product as stored in the collection.
///
/// `price` is the effective price. `discount_percentage` is serialized only
/// when present, so the stored document carries the field iff the product
/// was created or last updated with a discount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Lookup key for update/remove. Not unique; duplicates are permitted.
    pub name: String,
    /// Effective price. The base price is not recoverable once discounted.
    pub price: f64,
    /// Units in stock
    pub quantity: u64,
    /// Discount in percent, stored iff present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<i64>,
}

impl Product {
    /// Serializes the product to a JSON document.
    pub fn to_document(&self) -> Value {
        // Serialization of this struct cannot fail: no maps, no non-string keys.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Deserializes a product from a JSON document.
    pub fn from_document(document: &Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(document.clone())
    }
}

/// Input for the add operation. `base_price` is the pre-discount price as
/// entered by the operator.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub base_price: f64,
    pub quantity: u64,
    pub discount_percentage: Option<i64>,
}

impl NewProduct {
    /// Builds the stored record: the persisted price is the effective price.
    pub fn into_record(self) -> Product {
        let price = pricing::effective_price(self.base_price, self.discount_percentage);
        Product {
            name: self.name,
            price,
            quantity: self.quantity,
            discount_percentage: self.discount_percentage,
        }
    }
}

/// Replacement fields for the update operation.
#[derive(Debug, Clone)]
pub struct ProductUpdate {
    pub name: String,
    pub base_price: f64,
    pub quantity: u64,
    /// Required when the matched document carries a discount; ignored when
    /// it does not (field presence is immutable through update).
    pub discount_percentage: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_discount_field_present_iff_set() {
        let discounted = Product {
            name: "Widget".into(),
            price: 80.0,
            quantity: 10,
            discount_percentage: Some(20),
        };
        let doc = discounted.to_document();
        assert_eq!(doc["discount_percentage"], json!(20));

        let plain = Product {
            name: "Bolt".into(),
            price: 1.5,
            quantity: 500,
            discount_percentage: None,
        };
        let doc = plain.to_document();
        assert!(doc.get("discount_percentage").is_none());
    }

    #[test]
    fn test_zero_discount_is_still_present() {
        let product = NewProduct {
            name: "Gadget".into(),
            base_price: 50.0,
            quantity: 5,
            discount_percentage: Some(0),
        }
        .into_record();

        let doc = product.to_document();
        assert_eq!(doc["discount_percentage"], json!(0));
        assert_eq!(doc["price"], json!(50.0));
    }

    #[test]
    fn test_into_record_stores_effective_price() {
        let product = NewProduct {
            name: "Widget".into(),
            base_price: 100.0,
            quantity: 10,
            discount_percentage: Some(20),
        }
        .into_record();

        assert!((product.price - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_document_round_trip() {
        let doc = json!({"name": "Widget", "price": 80.0, "quantity": 10, "discount_percentage": 20});
        let product = Product::from_document(&doc).unwrap();
        assert_eq!(product.name, "Widget");
        assert_eq!(product.quantity, 10);
        assert_eq!(product.discount_percentage, Some(20));
        assert_eq!(product.to_document(), doc);
    }

    #[test]
    fn test_from_document_without_discount() {
        let doc = json!({"name": "Bolt", "price": 1.5, "quantity": 500});
        let product = Product::from_document(&doc).unwrap();
        assert_eq!(product.discount_percentage, None);
    }
}
