pub mod resolve;
pub mod rows;

pub use rows::{Rows, query};
