use crate::engine::{Executor, RowSource, Value};
use crate::error::{LoadError, LoadResult};
use crate::load::resolve::resolve;
use crate::record::Record;

/// Executes a query through the provided executor and wraps its result set
/// in a [`Rows`] cursor. Errors from the executor are propagated unchanged.
pub fn query<'a>(db: &'a dyn Executor, query: &str, args: &[Value]) -> LoadResult<Rows<'a>> {
    let source = db.execute(query, args)?;
    Ok(Rows::new(source))
}

/// A cursor over a query result set that loads rows into tagged records.
///
/// The cursor owns the underlying result set until `close` (or automatic
/// closure on exhaustion) and records the first error it sees; once an
/// error is recorded, `next` stops advancing and `err` keeps returning it.
pub struct Rows<'a> {
    source: Box<dyn RowSource + 'a>,
    err: Option<LoadError>,
}

impl std::fmt::Debug for Rows<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rows").field("err", &self.err).finish_non_exhaustive()
    }
}

impl<'a> Rows<'a> {
    pub fn new(source: Box<dyn RowSource + 'a>) -> Self {
        Rows { source, err: None }
    }

    /// Prepares the next result row for reading with `scan`. Returns true
    /// on success, or false if there is no next row or an error happened
    /// while preparing it; `err` distinguishes the two cases.
    ///
    /// Every call to `scan`, even the first one, must be preceded by a
    /// call to `next`.
    pub fn next(&mut self) -> bool {
        if self.err().is_some() {
            return false;
        }

        self.source.next()
    }

    /// Loads the current row into the provided records.
    ///
    /// Every column of the result set must resolve to a tagged field
    /// across the records, searched in the given order; otherwise the
    /// whole row load fails with no field written.
    pub fn scan(&mut self, records: &mut [&mut dyn Record]) -> LoadResult<()> {
        let result = self.scan_row(records);

        if let Err(err) = &result {
            if self.err.is_none() {
                self.err = Some(err.clone());
            }
        }

        result
    }

    /// Bulk form of `scan`, kept for callers that hold a single-row
    /// contract and manage advancement themselves. The resolution and
    /// copy pass is identical to `scan`.
    pub fn load(&mut self, records: &mut [&mut dyn Record]) -> LoadResult<()> {
        self.scan(records)
    }

    /// The error, if any, encountered during iteration. May be called
    /// after an explicit or implicit close. Once an error is recorded it
    /// is returned on every subsequent call without consulting the
    /// underlying result set again.
    pub fn err(&mut self) -> Option<&LoadError> {
        if self.err.is_none() {
            self.err = self.source.err();
        }

        self.err.as_ref()
    }

    /// Closes the underlying result set, preventing further enumeration.
    /// Safe to call repeatedly and after automatic closure; does not
    /// affect the result of `err`.
    pub fn close(&mut self) -> LoadResult<()> {
        self.source.close()
    }

    fn scan_row(&mut self, records: &mut [&mut dyn Record]) -> LoadResult<()> {
        let columns = self.source.columns()?;

        let mut pool = Vec::new();
        for record in records.iter_mut() {
            let fields = record.fields();
            if fields.is_empty() {
                return Err(LoadError::InvalidDestination);
            }
            pool.extend(fields);
        }

        // Resolve every column before copying anything, so an unmatched
        // column leaves all records untouched.
        let mut targets = Vec::with_capacity(columns.len());
        for column in &columns {
            match resolve(column, &mut pool) {
                Some(field) => targets.push(field.into_target()),
                None => return Err(LoadError::MissingField(column.clone())),
            }
        }

        self.source.scan(&mut targets)
    }
}
