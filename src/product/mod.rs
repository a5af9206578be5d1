//! Product data model
//!
//! A stored product document carries `name`, `price` and `quantity`, plus a
//! `discount_percentage` field if and only if the product was created or
//! last updated with a discount. The persisted `price` always holds the
//! effective (already-discounted) price, never the base price.

mod model;
mod view;

pub use model::{NewProduct, Product, ProductUpdate};
pub use view::ProductView;
