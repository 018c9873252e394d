pub mod engine;
pub mod error;
pub mod load;
pub mod record;
pub mod utils;

pub use crate::engine::{Executor, RowSource, Value};
pub use crate::error::{LoadError, LoadResult};
pub use crate::load::{Rows, query};
pub use crate::record::{Field, Record, Target};
