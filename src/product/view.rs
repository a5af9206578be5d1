//! Read-side projection of a stored product

use std::fmt;

use crate::pricing;

use super::Product;

/// What search and display-all show for one stored product.
///
/// The stored `price` is already net of any discount; when a
/// `discount_percentage` field is present the view applies it again at read
/// time. This compounding is legacy display behavior and is kept so that
/// existing stored data shows the same figures as before.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductView {
    pub name: String,
    /// Effective price as shown to the operator
    pub price: f64,
    pub quantity: u64,
    /// 0 when the stored document has no discount field
    pub discount_percentage: i64,
}

impl ProductView {
    /// Projects a stored record into its display form.
    pub fn from_record(record: &Product) -> Self {
        let price = pricing::effective_price(record.price, record.discount_percentage);
        Self {
            name: record.name.clone(),
            price,
            quantity: record.quantity,
            discount_percentage: record.discount_percentage.unwrap_or(0),
        }
    }
}

impl fmt::Display for ProductView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Price: ${}, Quantity: {}, Discount: {}%",
            self.name,
            pricing::format_price(self.price),
            self.quantity,
            self.discount_percentage
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_reapplies_stored_discount() {
        // Stored price 80.00 with a 20% discount field shows as 64.00.
        let record = Product {
            name: "Widget".into(),
            price: 80.0,
            quantity: 10,
            discount_percentage: Some(20),
        };
        let view = ProductView::from_record(&record);
        assert!((view.price - 64.0).abs() < 1e-9);
        assert_eq!(view.discount_percentage, 20);
    }

    #[test]
    fn test_view_of_plain_product() {
        let record = Product {
            name: "Bolt".into(),
            price: 1.5,
            quantity: 500,
            discount_percentage: None,
        };
        let view = ProductView::from_record(&record);
        assert!((view.price - 1.5).abs() < 1e-9);
        assert_eq!(view.discount_percentage, 0);
    }

    #[test]
    fn test_display_format() {
        let record = Product {
            name: "Gadget".into(),
            price: 50.0,
            quantity: 5,
            discount_percentage: Some(0),
        };
        let view = ProductView::from_record(&record);
        assert_eq!(
            view.to_string(),
            "Name: Gadget, Price: $50.00, Quantity: 5, Discount: 0%"
        );
    }
}
