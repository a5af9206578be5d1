//! Interactive menu and configuration
//!
//! The menu loop owns the single store handle for the process lifetime and
//! passes it to every adapter call. User-level outcomes (not found, empty
//! results, invalid patterns) are printed and the loop continues; store
//! failures propagate and terminate the run.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::inventory::{self, InventoryError};
use crate::observability::Logger;
use crate::product::{NewProduct, ProductUpdate, ProductView};
use crate::store::{Collection, FileCollection, StoreError};

use super::args::Cli;
use super::errors::{CliError, CliResult};
use super::io::{prompt, prompt_f64, prompt_i64, prompt_optional_i64, prompt_u64};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Root directory for collection files
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Database name (a subdirectory of `data_dir`)
    #[serde(default = "default_database")]
    pub database: String,

    /// Collection name
    #[serde(default = "default_collection")]
    pub collection: String,
}

fn default_data_dir() -> String {
    "./data".to_string()
}
fn default_database() -> String {
    "ProductsDB".to_string()
}
fn default_collection() -> String {
    "Products".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            database: default_database(),
            collection: default_collection(),
        }
    }
}

impl Config {
    /// Loads configuration from a JSON file. A missing file yields the
    /// defaults; an unreadable or invalid file is an error.
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(CliError::config(format!("Failed to read config: {}", e)));
            }
        };

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config(format!("Invalid config JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.data_dir.is_empty() {
            return Err(CliError::config("data_dir must not be empty"));
        }
        if self.database.is_empty() {
            return Err(CliError::config("database must not be empty"));
        }
        if self.collection.is_empty() {
            return Err(CliError::config("collection must not be empty"));
        }
        Ok(())
    }
}

/// Entry point: parse arguments, open the store, run the menu loop.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    let config = Config::load(&cli.config)?;
    Logger::info(
        "CONFIG_LOADED",
        &[
            ("data_dir", &config.data_dir),
            ("database", &config.database),
            ("collection", &config.collection),
        ],
    );

    let mut collection = FileCollection::open(
        Path::new(&config.data_dir),
        &config.database,
        &config.collection,
    )?;
    Logger::info(
        "STORE_OPENED",
        &[("path", &collection.path().display().to_string())],
    );

    menu_loop(&mut collection)
}

fn menu_loop(collection: &mut dyn Collection) -> CliResult<()> {
    loop {
        println!("--------------------------------------------");
        println!("======= Inventory Management System =======");
        println!("1. Add Product");
        println!("2. Update Product");
        println!("3. Remove Product");
        println!("4. Search Product");
        println!("5. Display Inventory");
        println!("6. Exit");
        println!("--------------------------------------------");

        let choice = prompt("Enter your choice (1-6): ")?;
        match choice.as_str() {
            "1" => add_product(collection)?,
            "2" => update_product(collection)?,
            "3" => remove_product(collection)?,
            "4" => search_products(collection)?,
            "5" => display_inventory(collection)?,
            "6" => {
                println!("Exiting the program...");
                Logger::info("SHUTDOWN", &[]);
                return Ok(());
            }
            _ => println!("Invalid choice. Please enter a number from 1 to 6."),
        }
    }
}

fn add_product(collection: &mut dyn Collection) -> CliResult<()> {
    println!("**** ADD PRODUCT ****");
    let name = prompt("Enter product name: ")?;
    let base_price = prompt_f64("Enter product price: ")?;
    let quantity = prompt_u64("Enter product quantity: ")?;
    let discount = prompt_optional_i64("Enter discount % (blank for none): ")?;

    inventory::add(
        collection,
        NewProduct {
            name: name.clone(),
            base_price,
            quantity,
            discount_percentage: discount,
        },
    )?;
    Logger::info("PRODUCT_ADDED", &[("name", &name)]);
    println!("Product added successfully.");
    Ok(())
}

fn update_product(collection: &mut dyn Collection) -> CliResult<()> {
    println!("**** UPDATE PRODUCT ****");
    let name = prompt("Enter product name: ")?;
    if name.is_empty() {
        println!("Invalid product name.");
        return Ok(());
    }

    // Look up first so the discount prompt only appears for discounted
    // products (their presence carries over through update).
    let existing = match inventory::find_by_name(collection, &name)? {
        Some(product) => product,
        None => {
            println!("Product not found in the inventory.");
            return Ok(());
        }
    };

    let new_name = prompt("Enter new product name: ")?;
    let base_price = prompt_f64("Enter new product price: ")?;
    let quantity = prompt_u64("Enter new product quantity: ")?;
    let discount = if existing.discount_percentage.is_some() {
        Some(prompt_i64("Enter new product discount: ")?)
    } else {
        None
    };

    match inventory::update(
        collection,
        &name,
        ProductUpdate {
            name: new_name,
            base_price,
            quantity,
            discount_percentage: discount,
        },
    ) {
        Ok(()) => {
            Logger::info("PRODUCT_UPDATED", &[("name", &name)]);
            println!("Product updated successfully.");
        }
        Err(InventoryError::NotFound) => println!("Product not found in the inventory."),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn remove_product(collection: &mut dyn Collection) -> CliResult<()> {
    println!("**** REMOVE PRODUCT ****");
    let name = prompt("Enter product name: ")?;

    match inventory::remove(collection, &name) {
        Ok(()) => {
            Logger::info("PRODUCT_REMOVED", &[("name", &name)]);
            println!("Product removed successfully.");
        }
        Err(InventoryError::NotFound) => println!("Product not found in the inventory."),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn search_products(collection: &mut dyn Collection) -> CliResult<()> {
    println!("**** SEARCH PRODUCT ****");
    let query = prompt("Enter search query: ")?;

    match inventory::search(collection, &query) {
        Ok(views) if views.is_empty() => println!("No matching products found."),
        Ok(views) => {
            println!("Matching products:");
            display_views(&views);
        }
        Err(InventoryError::Store(StoreError::InvalidPattern(msg))) => {
            println!("Invalid search pattern: {}", msg);
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn display_inventory(collection: &mut dyn Collection) -> CliResult<()> {
    println!("**** DISPLAY INVENTORY ****");
    let views = inventory::list_all(collection)?;
    if views.is_empty() {
        println!("Inventory is empty.");
    } else {
        println!("Current inventory:");
        display_views(&views);
    }
    Ok(())
}

fn display_views(views: &[ProductView]) {
    for view in views {
        println!("---------------------------------------------------------------------------");
        println!("{}", view);
        println!("---------------------------------------------------------------------------");
    }
}
