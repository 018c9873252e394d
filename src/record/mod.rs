pub mod field;
pub mod record;
pub mod target;

pub use field::Field;
pub use record::Record;
pub use target::Target;
