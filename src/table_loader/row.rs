//! One line of tabular input and the rules that classify it.

/// An ordered sequence of cells parsed from one line of input.
/// An empty (or whitespace-only) cell means "no value at this column".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<String>,
}

/// What a row contributes to the conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowKind {
    /// Every cell is empty after trimming.
    Blank,
    /// The first present cell starts with `#`.
    Comment,
    /// Anything else: the title row or a data row.
    Substantive,
}

/// Returns the trimmed cell when it holds a value.
///
/// This is the only membership test used anywhere: a cell is present iff it is
/// non-empty after trimming surrounding whitespace.
pub fn present(cell: &str) -> Option<&str> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

impl Row {
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    /// Raw cells, untrimmed.
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Present cells with their zero-based column index, left to right.
    pub fn present_cells(&self) -> impl Iterator<Item = (usize, &str)> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(column, cell)| present(cell).map(|value| (column, value)))
    }

    /// The first present cell, trimmed.
    pub fn first_present(&self) -> Option<&str> {
        self.present_cells().next().map(|(_, value)| value)
    }

    pub fn kind(&self) -> RowKind {
        match self.first_present() {
            None => RowKind::Blank,
            Some(value) if value.starts_with('#') => RowKind::Comment,
            Some(_) => RowKind::Substantive,
        }
    }
}

impl From<&csv::StringRecord> for Row {
    fn from(record: &csv::StringRecord) -> Self {
        Row::new(record.iter())
    }
}
