pub mod filter;
pub mod query;
pub mod sort;

pub use filter::matches;
pub use query::query;
pub use sort::{compare, sort_flights};
