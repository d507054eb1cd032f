// error module
mod error;
// loader module
mod loader;

// row module
pub mod row;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the table loader.
//─────────────────────────────────────────────────────────────────────────────
pub use error::TableLoaderError;
pub use loader::{open_table, TableReader};
pub use row::{Row, RowKind};
