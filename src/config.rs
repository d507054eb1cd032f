//! Output settings for the DOT generator.

/// Default prefix of every node symbol.
pub const DEFAULT_ID_PREFIX: &str = "id";
/// Default zero-padded width of the node counter.
pub const DEFAULT_ID_DIGITS: usize = 4;

/// Controls how node symbols and labels are rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DotConfig {
    /// Alphabetic prefix of node symbols, e.g. `id` in `id0007`.
    pub id_prefix: String,
    /// Minimum number of digits in a node symbol. Wider counters are printed in full.
    pub id_digits: usize,
    /// Render labels as `{label|symbol\l}` records so the symbol is visible.
    pub record_ids: bool,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            id_digits: DEFAULT_ID_DIGITS,
            record_ids: false,
        }
    }
}
