//! Inventory store adapter
//!
//! Maps products to and from documents in a collection, enforcing the
//! pricing invariant on write: the persisted `price` field always holds the
//! effective (already-discounted) price, and the `discount_percentage`
//! field is present iff the product was created or last updated with a
//! discount.
//!
//! The collection handle is passed explicitly to every operation; the
//! adapter holds no state of its own.

use serde_json::{json, Value};

use crate::pricing;
use crate::product::{NewProduct, Product, ProductUpdate, ProductView};
use crate::store::{Collection, Filter};

use super::errors::{InventoryError, InventoryResult};

const DISCOUNT_FIELD: &str = "discount_percentage";

fn name_filter(name: &str) -> Filter {
    Filter::eq("name", Value::String(name.to_string()))
}

/// Inserts a new product.
///
/// No uniqueness is enforced on `name`; adding an existing name creates a
/// second document.
pub fn add(collection: &mut dyn Collection, product: NewProduct) -> InventoryResult<()> {
    let record = product.into_record();
    collection.insert_one(record.to_document())?;
    Ok(())
}

/// Looks up a product by exact name (first match).
pub fn find_by_name(
    collection: &dyn Collection,
    name: &str,
) -> InventoryResult<Option<Product>> {
    match collection.find_one(&name_filter(name))? {
        Some(doc) => Ok(Some(Product::from_document(&doc)?)),
        None => Ok(None),
    }
}

/// Replaces a product's fields, keyed on its current name.
///
/// Discount presence carries over from the matched document: when it has a
/// `discount_percentage` field a new discount must be supplied, and when it
/// does not, any supplied discount is ignored. A plain product therefore
/// cannot become discounted through update, nor the reverse; use
/// [`set_discount`] and [`clear_discount`] for that.
///
/// Only `name`, `price`, `quantity` (and the discount, when applicable) are
/// replaced; other fields on the document stay untouched.
pub fn update(
    collection: &mut dyn Collection,
    name: &str,
    update: ProductUpdate,
) -> InventoryResult<()> {
    let filter = name_filter(name);
    let existing = collection
        .find_one(&filter)?
        .ok_or(InventoryError::NotFound)?;

    let discount = if existing.get(DISCOUNT_FIELD).is_some() {
        Some(
            update
                .discount_percentage
                .ok_or(InventoryError::DiscountRequired)?,
        )
    } else {
        None
    };

    let price = pricing::effective_price(update.base_price, discount);
    let mut fields = json!({
        "name": update.name,
        "price": price,
        "quantity": update.quantity,
    });
    if let Some(d) = discount {
        fields[DISCOUNT_FIELD] = json!(d);
    }

    collection.update_one(&filter, fields)?;
    Ok(())
}

/// Deletes the product with the given name.
///
/// At most one document is affected even when duplicates exist.
pub fn remove(collection: &mut dyn Collection, name: &str) -> InventoryResult<()> {
    if collection.delete_one(&name_filter(name))? {
        Ok(())
    } else {
        Err(InventoryError::NotFound)
    }
}

/// Applies a discount to an existing product.
///
/// The stored price is already effective, so the discount is applied to it
/// in place and the `discount_percentage` field is written.
pub fn set_discount(
    collection: &mut dyn Collection,
    name: &str,
    percentage: i64,
) -> InventoryResult<()> {
    let filter = name_filter(name);
    let existing = collection
        .find_one(&filter)?
        .ok_or(InventoryError::NotFound)?;
    let record = Product::from_document(&existing)?;

    let price = pricing::effective_price(record.price, Some(percentage));
    collection.update_one(
        &filter,
        json!({ "price": price, (DISCOUNT_FIELD): percentage }),
    )?;
    Ok(())
}

/// Removes the discount field from an existing product.
///
/// The stored price is left as it is; the base price is not recoverable
/// once a discount has been applied.
pub fn clear_discount(collection: &mut dyn Collection, name: &str) -> InventoryResult<()> {
    if collection.unset_one(&name_filter(name), DISCOUNT_FIELD)? {
        Ok(())
    } else {
        Err(InventoryError::NotFound)
    }
}

/// Returns views of all products whose name matches the pattern,
/// case-insensitively, in store iteration order. An empty result is not an
/// error.
pub fn search(collection: &dyn Collection, pattern: &str) -> InventoryResult<Vec<ProductView>> {
    let filter = Filter::matches("name", pattern)?;
    views(collection.find(&filter)?)
}

/// Returns views of every product in the collection.
pub fn list_all(collection: &dyn Collection) -> InventoryResult<Vec<ProductView>> {
    views(collection.find(&Filter::All)?)
}

fn views(documents: Vec<Value>) -> InventoryResult<Vec<ProductView>> {
    documents
        .iter()
        .map(|doc| {
            let record = Product::from_document(doc)?;
            Ok(ProductView::from_record(&record))
        })
        .collect()
}
