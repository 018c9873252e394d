use crate::error::{LoadError, LoadResult};
use crate::record::Target;

/// The `RowSource` trait is the forward-only result set handed back by a
/// query-execution engine. Implementations must close themselves when
/// `next` runs past the last row, tolerate repeated `close` calls, and
/// keep reporting the same iteration error from `err` once one occurred.
pub trait RowSource {
    /// Ordered column names of the result set.
    fn columns(&self) -> LoadResult<Vec<String>>;

    /// Advance to the next row. Returns false when the rows are exhausted
    /// or an error occurred; `err` distinguishes the two.
    fn next(&mut self) -> bool;

    /// Copy the current row into the targets, one per column in order.
    /// Requires a preceding successful call to `next`.
    fn scan(&mut self, targets: &mut [&mut dyn Target]) -> LoadResult<()>;

    /// Error encountered during iteration, if any.
    fn err(&self) -> Option<LoadError>;

    fn close(&mut self) -> LoadResult<()>;
}
