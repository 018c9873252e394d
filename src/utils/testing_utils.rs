use std::collections::HashMap;

use crate::engine::{Executor, RowSource, Value};
use crate::error::{LoadError, LoadResult};
use crate::record::Target;

/// A canned result set served by [`MemoryDb`].
#[derive(Clone)]
pub struct ResultSet {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
    fail_after: Option<usize>,
}

impl ResultSet {
    pub fn new(columns: &[&str], rows: Vec<Vec<Value>>) -> Self {
        ResultSet {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows,
            fail_after: None,
        }
    }

    /// Makes iteration fail once the given number of rows was returned.
    pub fn fail_after(mut self, rows: usize) -> Self {
        self.fail_after = Some(rows);
        self
    }
}

/// In-memory query engine double. Result sets are registered up front,
/// keyed by the exact query text; positional arguments are accepted and
/// ignored, as a fixture answers every execution the same way.
pub struct MemoryDb {
    results: HashMap<String, ResultSet>,
}

impl MemoryDb {
    pub fn new() -> Self {
        MemoryDb {
            results: HashMap::new(),
        }
    }

    pub fn register(&mut self, query: impl Into<String>, set: ResultSet) {
        self.results.insert(query.into(), set);
    }
}

impl Executor for MemoryDb {
    fn execute(&self, query: &str, _args: &[Value]) -> LoadResult<Box<dyn RowSource + '_>> {
        let set = self.results.get(query).ok_or_else(|| {
            LoadError::Engine(format!("no result set registered for query: {}", query.trim()))
        })?;

        Ok(Box::new(MemoryRows::new(set.clone())))
    }
}

/// Forward-only cursor over a [`ResultSet`]. Closes itself once the rows
/// are exhausted, the way real driver cursors do.
pub struct MemoryRows {
    set: ResultSet,
    pos: usize,
    current: Option<usize>,
    err: Option<LoadError>,
    closed: bool,
}

impl MemoryRows {
    pub fn new(set: ResultSet) -> Self {
        MemoryRows {
            set,
            pos: 0,
            current: None,
            err: None,
            closed: false,
        }
    }
}

impl RowSource for MemoryRows {
    fn columns(&self) -> LoadResult<Vec<String>> {
        if self.closed {
            return Err(LoadError::Engine("rows are closed".to_string()));
        }

        Ok(self.set.columns.clone())
    }

    fn next(&mut self) -> bool {
        self.current = None;

        if self.err.is_some() || self.closed {
            return false;
        }

        if let Some(limit) = self.set.fail_after {
            if self.pos >= limit {
                self.err = Some(LoadError::Engine(
                    "result set failed during iteration".to_string(),
                ));
                self.closed = true;
                return false;
            }
        }

        if self.pos >= self.set.rows.len() {
            self.closed = true;
            return false;
        }

        self.current = Some(self.pos);
        self.pos += 1;
        true
    }

    fn scan(&mut self, targets: &mut [&mut dyn Target]) -> LoadResult<()> {
        let row = match self.current {
            Some(index) => &self.set.rows[index],
            None => return Err(LoadError::Engine("scan called without a row".to_string())),
        };

        if targets.len() != row.len() {
            return Err(LoadError::Engine(format!(
                "expected {} scan targets, got {}",
                row.len(),
                targets.len()
            )));
        }

        for (target, value) in targets.iter_mut().zip(row.iter()) {
            target.assign(value.clone())?;
        }

        Ok(())
    }

    fn err(&self) -> Option<LoadError> {
        self.err.clone()
    }

    fn close(&mut self) -> LoadResult<()> {
        self.closed = true;
        self.current = None;
        Ok(())
    }
}
