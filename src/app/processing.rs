//! Handles a single input row: feeds it to the tree builder and streams
//! whatever it produced to the DOT writer.

use super::error::AppError;
use super::verbose_println; // Macro for conditional logging.
use crate::dotgen::DotWriter;
use crate::table_loader::Row;
use crate::tree::{RowOutcome, TreeBuilder};
use std::io::Write;

/// Running totals for one conversion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    pub title: Option<String>,
    pub rows: usize,
    pub blank_rows: usize,
    pub comment_rows: usize,
    pub data_rows: usize,
    pub nodes: usize,
    pub edges: usize,
}

/// Processes one row.
///
/// # Arguments
/// * `row_number` - 1-based position of the row in the input, for the log.
///
/// # Errors
/// Returns `AppError::Io` if writing a statement fails.
pub fn process_row<W: Write>(
    row: &Row,
    row_number: usize,
    builder: &mut TreeBuilder,
    writer: &mut DotWriter<'_, W>,
    summary: &mut ConversionSummary,
    quiet_mode: bool,
) -> Result<(), AppError> {
    summary.rows += 1;
    match builder.push_row(row) {
        RowOutcome::Blank => {
            summary.blank_rows += 1;
            verbose_println!(quiet_mode, "[ROW {}] blank, skipped", row_number);
        }
        RowOutcome::Comment => {
            summary.comment_rows += 1;
            verbose_println!(quiet_mode, "[ROW {}] comment, skipped", row_number);
        }
        RowOutcome::Title(title) => {
            verbose_println!(quiet_mode, "[ROW {}] title: {}", row_number, title);
            writer.write_header(&title)?;
            summary.title = Some(title);
        }
        RowOutcome::Data(ids) => {
            summary.data_rows += 1;
            let tree = builder.tree();
            let mut edges = 0;
            for id in ids.clone() {
                let node = &tree.nodes()[id];
                writer.write_node(id, node)?;
                if node.parent.is_some() {
                    edges += 1;
                }
            }
            summary.nodes += ids.len();
            summary.edges += edges;
            verbose_println!(
                quiet_mode,
                "[ROW {}] {} node(s), {} edge(s)",
                row_number,
                ids.len(),
                edges
            );
        }
    }
    Ok(())
}
