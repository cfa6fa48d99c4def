//! The schema input boundary.

use crate::{error::Result, types::Column};

/// Read access to a relational catalog.
///
/// Implementations enumerate user tables and describe their columns; the
/// generation pipeline is written against this trait so any metadata
/// source can drive it.
pub trait Catalog {
    /// All user table names, sorted lexicographically.
    fn list_tables(&self) -> Result<Vec<String>>;

    /// The columns of `table`, in catalog order.
    ///
    /// Fails with [`Error::TableNotFound`](crate::Error::TableNotFound)
    /// when the table does not exist, including when it vanished after
    /// [`list_tables`](Catalog::list_tables) returned it.
    fn columns_of(&self, table: &str) -> Result<Vec<Column>>;
}
