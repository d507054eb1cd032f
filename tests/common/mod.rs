//! Shared test helpers for integration tests.

use std::path::PathBuf;

use tempfile::TempDir;
use treecsv2dot::app::convert_file;
use treecsv2dot::config::DotConfig;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A tree CSV written to a private temporary directory.
pub struct Fixture {
    _dir: TempDir,
    pub path: PathBuf,
}

pub fn write_fixture(contents: &[u8]) -> Fixture {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("tree.csv");
    std::fs::write(&path, contents).expect("write fixture");
    Fixture { _dir: dir, path }
}

// ---------------------------------------------------------------------------
// Conversion runners
// ---------------------------------------------------------------------------

pub fn convert_with(contents: &str, config: &DotConfig) -> String {
    let fixture = write_fixture(contents.as_bytes());
    let mut out = Vec::new();
    convert_file(&fixture.path, config, &mut out, true).expect("conversion succeeds");
    String::from_utf8(out).expect("DOT output is UTF-8")
}

pub fn convert(contents: &str) -> String {
    convert_with(contents, &DotConfig::default())
}

/// Lines of the form `  idXXXX [ label = ... ];`.
pub fn node_lines(dot: &str) -> Vec<&str> {
    dot.lines()
        .filter(|l| l.contains("[ label =") && !l.trim_start().starts_with("graph"))
        .collect()
}

/// Lines of the form `  idXXXX -> idYYYY;`.
pub fn edge_lines(dot: &str) -> Vec<&str> {
    dot.lines().filter(|l| l.contains(" -> ")).collect()
}
