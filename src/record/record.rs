use crate::record::Field;

/// A destination record: a mutable struct whose tagged fields receive
/// query columns.
///
/// Implementations are usually generated with [`query_fields!`], which
/// declares the column label each field answers to. The fields must be
/// listed in declaration order, since resolution picks the first match.
pub trait Record {
    fn fields(&mut self) -> Vec<Field<'_>>;
}

/// Declares the query fields of a record type and implements [`Record`]
/// for it. Each entry maps a struct field to the column label it receives,
/// in declaration order:
///
/// `query_fields!(User { id => "User_id", login => "User_login" });`
#[macro_export]
macro_rules! query_fields {
    ($record:ty { $($field:ident => $tag:literal),+ $(,)? }) => {
        impl $crate::record::Record for $record {
            fn fields(&mut self) -> ::std::vec::Vec<$crate::record::Field<'_>> {
                ::std::vec![$($crate::record::Field::new($tag, &mut self.$field)),+]
            }
        }
    };
}
