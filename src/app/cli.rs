use clap::Parser;
use std::path::PathBuf;

use crate::config::{DotConfig, DEFAULT_ID_DIGITS, DEFAULT_ID_PREFIX};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Converts a column-indented tree CSV file into a Graphviz DOT graph on stdout.", long_about = None)]
pub struct Cli {
    /// Tree CSV file to convert
    pub input_file: Option<PathBuf>,

    /// Prefix of generated node symbols
    #[clap(long, value_name = "PREFIX", default_value = DEFAULT_ID_PREFIX)]
    pub id_prefix: String,

    /// Zero-padded width of the node counter
    #[clap(long, value_name = "N", default_value_t = DEFAULT_ID_DIGITS)]
    pub id_digits: usize,

    /// Show each node's symbol inside its record label
    #[clap(long)]
    pub record_ids: bool,

    /// Write a verbose progress log to this file
    #[clap(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn dot_config(&self) -> DotConfig {
        DotConfig {
            id_prefix: self.id_prefix.clone(),
            id_digits: self.id_digits,
            record_ids: self.record_ids,
        }
    }

    /// Verbose logging is on only when a log file was requested.
    pub fn quiet(&self) -> bool {
        self.log_file.is_none()
    }
}
