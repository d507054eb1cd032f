// dotgen module
mod dotgen;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the DOT generator.
//─────────────────────────────────────────────────────────────────────────────
pub use dotgen::{escape_dq, escape_record, node_symbol, render, DotWriter};
