//! # EdgeList Files
//!
//! An edge-list file consists of one line `u v` per edge where `u` and `v`
//! are the 0-based ids of its endpoints.

use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind, Result},
    path::Path,
};

use super::*;

/// A reader for edge-list files.
///
/// The format carries no size information. The number of nodes is derived as
/// one plus the largest id seen, matching [`EdgeList::from_edges`].
///
/// ```
/// use tricount::{io::EdgeListReader, prelude::*};
///
/// let file = "# a triangle\n0 1\n1 2\n2 0\n";
/// let edges = EdgeListReader::new().try_read(file.as_bytes()).unwrap();
///
/// assert_eq!(edges.number_of_nodes(), 3);
/// assert_eq!(edges.number_of_edges(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            comment_identifier: "#".to_string(),
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> Self {
        self.comment_identifier = c.into();
        self
    }

    /// Reads an edge list from the given reader.
    ///
    /// Blank lines and comment lines are skipped. Every other line must
    /// start with two whitespace-separated vertex ids; further tokens on the
    /// same line are ignored.
    ///
    /// # Errors
    /// Returns an [`ErrorKind::InvalidData`] error for lines with fewer than
    /// two tokens or with tokens that do not parse as vertex ids.
    pub fn try_read<R: BufRead>(&self, reader: R) -> Result<EdgeList> {
        let mut edges = Vec::new();

        for line in reader.lines() {
            let line = line?;
            let line = line.trim_start();
            if line.is_empty() || line.starts_with(&self.comment_identifier) {
                continue;
            }

            let mut parts = line.split_ascii_whitespace();
            let u: Node = parse_next_value!(parts, "Source node");
            let v: Node = parse_next_value!(parts, "Target node");

            edges.push(Edge(u, v));
        }

        Ok(EdgeList::from_edges(edges))
    }

    /// Reads an edge list from the file at `path`
    pub fn try_read_file<P: AsRef<Path>>(&self, path: P) -> Result<EdgeList> {
        self.try_read(BufReader::new(File::open(path)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(input: &str) -> Result<EdgeList> {
        EdgeListReader::new().try_read(input.as_bytes())
    }

    #[test]
    fn reads_whitespace_separated_pairs() {
        let edges = read("0 1\n1\t2\n 2   0 \n").unwrap();

        assert_eq!(edges.number_of_nodes(), 3);
        assert_eq!(edges.edges(), &[Edge(0, 1), Edge(1, 2), Edge(2, 0)]);
    }

    #[test]
    fn derives_nodes_from_largest_id() {
        let edges = read("0 7\n").unwrap();

        assert_eq!(edges.number_of_nodes(), 8);
        assert_eq!(edges.number_of_edges(), 1);
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let edges = read("# nodes: 3\n\n0 1\n   \n# trailing\n1 2\n").unwrap();

        assert_eq!(edges.edges(), &[Edge(0, 1), Edge(1, 2)]);
    }

    #[test]
    fn custom_comment_identifier() {
        let edges = EdgeListReader::new()
            .comment_identifier("%")
            .try_read("% metis style\n0 1\n".as_bytes())
            .unwrap();

        assert_eq!(edges.edges(), &[Edge(0, 1)]);
    }

    #[test]
    fn ignores_extra_tokens() {
        let edges = read("0 1 0.5\n").unwrap();

        assert_eq!(edges.edges(), &[Edge(0, 1)]);
    }

    #[test]
    fn empty_input_yields_empty_list() {
        let edges = read("").unwrap();

        assert_eq!(edges.number_of_nodes(), 0);
        assert_eq!(edges.number_of_edges(), 0);
    }

    #[test]
    fn rejects_short_lines() {
        let err = read("0 1\n2\n").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn rejects_non_numeric_ids() {
        for input in ["a 1\n", "0 b\n", "-1 2\n"] {
            let err = read(input).unwrap_err();

            assert_eq!(err.kind(), ErrorKind::InvalidData);
        }
    }
}
