//! Plain-text edge-list reader.
//!
//! The format is line oriented. Blank lines and lines whose first
//! non-whitespace character is `#` are skipped. The first remaining line holds
//! the vertex count; every later line holds `source destination weight`
//! separated by whitespace. Trailing `#` comments are allowed on data lines.

use std::io::{self, BufRead};

use spanning_core::Edge;
use thiserror::Error;

/// Raw contents of an edge-list file, not yet validated as a graph.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeList {
    /// Vertex count as written; negative values survive parsing so graph
    /// validation can reject them.
    pub vertex_count: i64,
    /// Edges in file order.
    pub edges: Vec<Edge>,
}

/// Errors raised while reading an edge list. Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum EdgeListError {
    /// Reading from the underlying stream failed.
    #[error("failed to read line {line}: {source}")]
    Read {
        /// Line being read when the failure happened.
        line: usize,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The input held no vertex-count line.
    #[error("edge list is missing the vertex count line")]
    MissingVertexCount,
    /// The vertex-count line was not a single integer.
    #[error("line {line}: expected a vertex count, found `{found}`")]
    InvalidVertexCount {
        /// Offending line.
        line: usize,
        /// Text found on that line.
        found: String,
    },
    /// An edge line did not have exactly three fields.
    #[error("line {line}: expected `source destination weight`, found {fields} field(s)")]
    FieldCount {
        /// Offending line.
        line: usize,
        /// Number of fields present.
        fields: usize,
    },
    /// An endpoint was not a non-negative integer.
    #[error("line {line}: invalid vertex index `{found}`")]
    InvalidVertex {
        /// Offending line.
        line: usize,
        /// Text of the endpoint.
        found: String,
    },
    /// The weight was not a number.
    #[error("line {line}: invalid weight `{found}`")]
    InvalidWeight {
        /// Offending line.
        line: usize,
        /// Text of the weight.
        found: String,
    },
}

/// Parses an edge list from `reader`.
///
/// Only syntax is checked here. Range and finiteness checks belong to
/// [`spanning_core::Graph::new`], so `nan` and `inf` weights parse
/// successfully.
///
/// # Errors
/// Returns [`EdgeListError`] for unreadable input or malformed lines.
///
/// # Examples
/// ```
/// use spanning_cli::cli::parse_edge_list;
///
/// let list = parse_edge_list("# triangle\n3\n0 1 1.5\n1 2 2\n".as_bytes())?;
/// assert_eq!(list.vertex_count, 3);
/// assert_eq!(list.edges.len(), 2);
/// # Ok::<(), spanning_cli::cli::EdgeListError>(())
/// ```
pub fn parse_edge_list(reader: impl BufRead) -> Result<EdgeList, EdgeListError> {
    let mut vertex_count = None;
    let mut edges = Vec::new();

    for (index, raw) in reader.lines().enumerate() {
        let line = index + 1;
        let raw = raw.map_err(|source| EdgeListError::Read { line, source })?;
        let content = strip_comment(&raw);
        if content.is_empty() {
            continue;
        }
        match vertex_count {
            None => vertex_count = Some(parse_vertex_count(line, content)?),
            Some(_) => edges.push(parse_edge(line, content)?),
        }
    }

    let vertex_count = vertex_count.ok_or(EdgeListError::MissingVertexCount)?;
    Ok(EdgeList {
        vertex_count,
        edges,
    })
}

fn strip_comment(raw: &str) -> &str {
    raw.split_once('#').map_or(raw, |(data, _)| data).trim()
}

fn parse_vertex_count(line: usize, content: &str) -> Result<i64, EdgeListError> {
    content
        .parse()
        .map_err(|_| EdgeListError::InvalidVertexCount {
            line,
            found: content.to_owned(),
        })
}

fn parse_edge(line: usize, content: &str) -> Result<Edge, EdgeListError> {
    let fields: Vec<&str> = content.split_whitespace().collect();
    let [source, destination, weight] = fields.as_slice() else {
        return Err(EdgeListError::FieldCount {
            line,
            fields: fields.len(),
        });
    };
    let source = parse_vertex(line, source)?;
    let destination = parse_vertex(line, destination)?;
    let weight = weight
        .parse::<f64>()
        .map_err(|_| EdgeListError::InvalidWeight {
            line,
            found: (*weight).to_owned(),
        })?;
    Ok(Edge::new(source, destination, weight))
}

fn parse_vertex(line: usize, raw: &str) -> Result<usize, EdgeListError> {
    raw.parse().map_err(|_| EdgeListError::InvalidVertex {
        line,
        found: raw.to_owned(),
    })
}
