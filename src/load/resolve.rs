use crate::record::Field;

/// Finds the field that receives a column. The pool holds every tagged
/// field of every destination record, in destination order then field
/// declaration order; the first tag equal to the column name wins and is
/// removed from the pool, so each field receives at most one column.
///
/// This is a pure lookup: tags are compared, field values are never read
/// or written.
pub fn resolve<'a>(column: &str, pool: &mut Vec<Field<'a>>) -> Option<Field<'a>> {
    let position = pool.iter().position(|field| field.tag() == column)?;
    Some(pool.remove(position))
}
