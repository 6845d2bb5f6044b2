//! Edge-list parsing.
//!
//! The input is line-oriented UTF-8 text, one link per line:
//!
//! ```text
//! page1 -> page2
//! page2 -> page3
//! ```
//!
//! Lines that do not split into exactly two fields on `->` are skipped with a
//! warning; they never abort the parse. A field that is empty after trimming
//! (`" -> B"`) also counts as malformed, so no node ever has an empty id.
//! Blank lines are ignored silently.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};
use memchr::memmem;

use crate::edge::EDGE_ID_SEPARATOR;
use crate::error::{PageRankError, Result};
use crate::graph::Graph;

/// A line that was not a valid edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the input.
    pub line_number: usize,
    pub content: String,
}

/// Split `from -> to` into its trimmed ids.
///
/// Returns `None` unless the line holds exactly one separator with a
/// non-empty id on each side.
pub fn parse_edge_line(line: &str) -> Option<(&str, &str)> {
    let separator = EDGE_ID_SEPARATOR.as_bytes();
    let mut hits = memmem::find_iter(line.as_bytes(), separator);
    let pos = hits.next()?;
    if hits.next().is_some() {
        return None;
    }

    let from = line[..pos].trim();
    let to = line[pos + separator.len()..].trim();
    if from.is_empty() || to.is_empty() {
        return None;
    }
    Some((from, to))
}

/// Incrementally builds a [`Graph`] from edge-list lines.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: Graph,
    skipped: Vec<SkippedLine>,
    lines_read: usize,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an empty graph sized for about `edge_hint` edges.
    pub fn with_capacity(edge_hint: usize) -> Self {
        Self {
            graph: Graph::with_capacity(edge_hint, edge_hint),
            ..Self::default()
        }
    }

    /// Parse a whole edge-list document.
    pub fn from_text(text: &str) -> Result<Self> {
        let line_count = memchr::memchr_iter(b'\n', text.as_bytes()).count() + 1;
        let mut builder = Self::with_capacity(line_count);
        for line in text.lines() {
            builder.push_line(line)?;
        }
        Ok(builder)
    }

    /// Parse edge-list lines from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut builder = Self::new();
        for line in reader.lines() {
            builder.push_line(&line?)?;
        }
        Ok(builder)
    }

    /// Parse an edge-list file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let io_error = |source: std::io::Error| PageRankError::Io {
            source,
            path: path.to_path_buf(),
        };

        let file = File::open(path).map_err(io_error)?;
        let mut builder = Self::new();
        for line in BufReader::new(file).lines() {
            builder.push_line(&line.map_err(io_error)?)?;
        }
        debug!(
            "Read {} lines from {}: {} nodes, {} edges",
            builder.lines_read,
            path.display(),
            builder.graph.node_count(),
            builder.graph.edge_count()
        );
        Ok(builder)
    }

    /// Add the edge on one input line, or record the line as skipped.
    pub fn push_line(&mut self, line: &str) -> Result<()> {
        self.lines_read += 1;
        if line.trim().is_empty() {
            return Ok(());
        }

        match parse_edge_line(line) {
            Some((from, to)) => {
                self.graph.connect(from, to)?;
            }
            None => {
                warn!("Skipping line {}: {}", self.lines_read, line);
                self.skipped.push(SkippedLine {
                    line_number: self.lines_read,
                    content: line.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Graph built so far.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Lines rejected so far.
    pub fn skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }

    /// Finish building and hand over the graph.
    pub fn build(self) -> Graph {
        self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_edge_line() {
        assert_eq!(parse_edge_line("A -> B"), Some(("A", "B")));
        assert_eq!(parse_edge_line("  page one->page two  "), Some(("page one", "page two")));
        assert_eq!(parse_edge_line("A B"), None);
        assert_eq!(parse_edge_line("A -> B -> C"), None);
        assert_eq!(parse_edge_line(" -> B"), None);
        assert_eq!(parse_edge_line("A ->   "), None);
    }

    #[test]
    fn test_cycle_from_text() {
        let builder = GraphBuilder::from_text("A -> B\nB -> C\nC -> A\n").unwrap();
        assert!(builder.skipped().is_empty());

        let graph = builder.build();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.get_edge("C->A").is_some());
    }

    #[test]
    fn test_malformed_line_skipped() {
        let builder = GraphBuilder::from_text("A -> B\nA B\nB -> C\n").unwrap();
        assert_eq!(
            builder.skipped(),
            &[SkippedLine {
                line_number: 2,
                content: "A B".to_string()
            }]
        );

        let graph = builder.build();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.get_edge("B->C").is_some());
    }

    #[test]
    fn test_blank_lines_ignored() {
        let builder = GraphBuilder::from_text("\nA -> B\n   \r\nB -> A").unwrap();
        assert!(builder.skipped().is_empty());
        assert_eq!(builder.graph().edge_count(), 2);
    }

    #[test]
    fn test_duplicate_lines() {
        let graph = GraphBuilder::from_text("A -> B\nA -> B\n A->B \n").unwrap().build();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.get_node("A").unwrap().out_degree(), 1);
        assert_eq!(graph.get_node("B").unwrap().in_degree(), 1);
    }

    #[test]
    fn test_with_capacity_starts_empty() {
        let mut builder = GraphBuilder::with_capacity(16);
        assert!(builder.graph().is_empty());
        builder.push_line("A -> B").unwrap();
        assert_eq!(builder.graph().edge_count(), 1);
    }

    #[test]
    fn test_from_reader() {
        let input: &[u8] = b"1 -> 2\n2 -> 3\n";
        let graph = GraphBuilder::from_reader(input).unwrap().build();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.nodes()[0].id(), "1");
    }

    #[test]
    fn test_missing_file() {
        let err = GraphBuilder::from_path("/nonexistent/edges.txt").unwrap_err();
        match err {
            PageRankError::Io { path, .. } => assert_eq!(path, Path::new("/nonexistent/edges.txt")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
