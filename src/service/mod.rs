//! Request-independent logic between the handlers and the store.

mod history;
mod suggestions;
pub use history::PriceLabeler;
pub use suggestions::{mean, parse_values};
