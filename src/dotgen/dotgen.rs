use crate::config::DotConfig;
use crate::tree::{Node, NodeId, Tree};
use std::io::{self, Write};

/// Escapes double quotes for use inside a quoted DOT string. Nothing else is touched.
///
/// Backslashes pass through unchanged, so a label ending in `\` escapes the
/// closing quote of its statement (`label = "a\"`).
pub fn escape_dq(s: &str) -> String {
    s.replace('"', "\\\"")
}

/// Escapes a label for a record field: record metacharacters, then quotes.
pub fn escape_record(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for ch in s.chars() {
        if matches!(ch, '{' | '}' | '|' | '<' | '>') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escape_dq(&escaped)
}

/// Builds the symbol of a node, e.g. `id0007`. Counters wider than
/// `id_digits` are printed in full.
pub fn node_symbol(id: NodeId, config: &DotConfig) -> String {
    format!(
        "{}{:0width$}",
        config.id_prefix,
        id,
        width = config.id_digits
    )
}

/// Streams DOT statements to any writer.
///
/// Statements go out in call order, so a run that stops early leaves a
/// truncated prefix of the full graph.
pub struct DotWriter<'a, W: Write> {
    out: W,
    config: &'a DotConfig,
}

impl<'a, W: Write> DotWriter<'a, W> {
    pub fn new(out: W, config: &'a DotConfig) -> Self {
        Self { out, config }
    }

    pub fn write_header(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out, "digraph generated_data {{")?;
        writeln!(self.out, "  // global settings //")?;
        writeln!(self.out, "  graph [ label = \"\\n{}\",", escape_dq(title))?;
        writeln!(self.out, "  rankdir = TB ];")?;
        writeln!(self.out, "  node [ shape = record ];")?;
        writeln!(self.out)
    }

    /// Declares node `id` and, when it has a parent, the edge leading to it.
    pub fn write_node(&mut self, id: NodeId, node: &Node) -> io::Result<()> {
        let symbol = node_symbol(id, self.config);
        if self.config.record_ids {
            writeln!(
                self.out,
                "  {} [ label = \"{{{}|{}\\l}}\" ];",
                symbol,
                escape_record(&node.label),
                symbol
            )?;
        } else {
            writeln!(
                self.out,
                "  {} [ label = \"{}\" ];",
                symbol,
                escape_dq(&node.label)
            )?;
        }
        if let Some(parent) = node.parent {
            writeln!(
                self.out,
                "  {} -> {};",
                node_symbol(parent, self.config),
                symbol
            )?;
        }
        Ok(())
    }

    pub fn write_footer(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "}}")
    }

    /// Writes a finished tree: header (only if titled), every node, footer.
    pub fn write_tree(&mut self, tree: &Tree) -> io::Result<()> {
        if let Some(title) = tree.title() {
            self.write_header(title)?;
        }
        for (id, node) in tree.nodes().iter().enumerate() {
            self.write_node(id, node)?;
        }
        self.write_footer()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Renders a whole tree into a DOT document.
pub fn render(tree: &Tree, config: &DotConfig) -> String {
    let mut writer = DotWriter::new(Vec::new(), config);
    // Writing into a Vec cannot fail.
    let _ = writer.write_tree(tree);
    String::from_utf8_lossy(&writer.into_inner()).into_owned()
}
