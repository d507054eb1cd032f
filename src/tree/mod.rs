// arena module
mod arena;
// builder module
mod builder;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the tree module.
//─────────────────────────────────────────────────────────────────────────────
pub use arena::{Node, NodeId, Tree};
pub use builder::{parse, RowOutcome, TreeBuilder};
