//! stockroom - An interactive inventory management tool over a persistent
//! document store

pub mod cli;
pub mod inventory;
pub mod observability;
pub mod pricing;
pub mod product;
pub mod store;
