use crate::engine::{RowSource, Value};
use crate::error::LoadResult;

/// A handle capable of executing parameterized query text with positional
/// arguments, such as a database connection.
pub trait Executor {
    fn execute(&self, query: &str, args: &[Value]) -> LoadResult<Box<dyn RowSource + '_>>;
}
