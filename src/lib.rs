//! Converts a tree encoded by column indentation in a CSV file into a
//! Graphviz DOT graph.
//!
//! The first substantive row is the graph title. In every later row a value
//! at column `c` is a child of the value most recently seen at column `c - 1`.

pub mod app;
pub mod config;
pub mod dotgen;
pub mod table_loader;
pub mod tree;
