//! HTTP handlers for the catalog listings, price history and suggestions.

pub mod catalog;
pub mod prices;
pub use catalog::*;
pub use prices::*;
