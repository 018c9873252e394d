pub mod executor;
pub mod row_source;
pub mod value;

pub use executor::Executor;
pub use row_source::RowSource;
pub use value::Value;
