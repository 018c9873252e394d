use crate::engine::Value;
use crate::error::{LoadError, LoadResult};

/// An addressable location that receives one column value, converting it
/// into the field's type.
pub trait Target {
    fn assign(&mut self, value: Value) -> LoadResult<()>;
}

fn mismatch(target: &'static str, value: &Value) -> LoadError {
    LoadError::TypeMismatch(format!(
        "cannot assign {} value to {} field",
        value.type_name(),
        target
    ))
}

fn out_of_range(target: &'static str, value: i64) -> LoadError {
    LoadError::TypeMismatch(format!(
        "integer value {} does not fit in {} field",
        value, target
    ))
}

impl Target for i32 {
    fn assign(&mut self, value: Value) -> LoadResult<()> {
        match value {
            Value::Int(v) => {
                *self = i32::try_from(v).map_err(|_| out_of_range("i32", v))?;
                Ok(())
            }
            other => Err(mismatch("i32", &other)),
        }
    }
}

impl Target for i64 {
    fn assign(&mut self, value: Value) -> LoadResult<()> {
        match value {
            Value::Int(v) => {
                *self = v;
                Ok(())
            }
            other => Err(mismatch("i64", &other)),
        }
    }
}

impl Target for u32 {
    fn assign(&mut self, value: Value) -> LoadResult<()> {
        match value {
            Value::Int(v) => {
                *self = u32::try_from(v).map_err(|_| out_of_range("u32", v))?;
                Ok(())
            }
            other => Err(mismatch("u32", &other)),
        }
    }
}

impl Target for u64 {
    fn assign(&mut self, value: Value) -> LoadResult<()> {
        match value {
            Value::Int(v) => {
                *self = u64::try_from(v).map_err(|_| out_of_range("u64", v))?;
                Ok(())
            }
            other => Err(mismatch("u64", &other)),
        }
    }
}

impl Target for String {
    fn assign(&mut self, value: Value) -> LoadResult<()> {
        match value {
            Value::Text(v) => {
                *self = v;
                Ok(())
            }
            other => Err(mismatch("string", &other)),
        }
    }
}

impl<T: Target + Default> Target for Option<T> {
    fn assign(&mut self, value: Value) -> LoadResult<()> {
        if value.is_null() {
            *self = None;
            return Ok(());
        }

        let mut inner = T::default();
        inner.assign(value)?;
        *self = Some(inner);
        Ok(())
    }
}
