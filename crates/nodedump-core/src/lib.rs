//! nodedump core library for inspecting raw B+tree node descriptors.
//!
//! A node descriptor is a hex string snapshot of one tree node. This crate
//! slices it into labeled field groups according to the node kind (leaf or
//! internal) and the tree degree, then renders the result as a text table.
//! Decoding follows the same layered structure for both shapes:
//! - `layout`: field widths and region sizes (source of truth)
//! - `reader`: lenient character-range access into the descriptor
//! - `parser`: region-by-region slicing into a [`NodeLayout`]
//! - `error`: errors for caller-supplied kind/degree text
//!
//! Invariants:
//! - Decoding is a pure function of `(kind, degree, data)`.
//! - Offsets count characters; ranges past the end yield truncated or empty
//!   fields and never fail.
//! - Field values stay raw substrings, nothing is converted to integers.
//!
//! # Examples
//! ```
//! use nodedump_core::{Degree, NodeKind, decode, render_text};
//!
//! let layout = decode(NodeKind::Leaf, Degree::new(1), "02");
//! assert_eq!(layout.record_count(), 4);
//! assert!(render_text(&layout).contains("'0-2       '  02"));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

mod node;
mod render;

pub use node::error::{DegreeError, NodeKindError};
pub use node::layout;
pub use node::parser::{decode, decode_internal, decode_leaf};
pub use render::{LABEL_WIDTH, render_record, render_text};

/// Node shape selecting which layout applies.
///
/// # Examples
/// ```
/// use nodedump_core::NodeKind;
///
/// let kind: NodeKind = "internal".parse()?;
/// assert_eq!(kind, NodeKind::Internal);
/// assert_eq!(kind.to_string(), "internal");
/// # Ok::<(), nodedump_core::NodeKindError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Holds key/data-pointer entries and sibling links.
    Leaf,
    /// Holds separator keys interleaved with child pointers.
    Internal,
}

impl NodeKind {
    /// Interpret an answer to the `Leaf? y/n` prompt.
    ///
    /// Only `y`, `Y`, `n` and `N` are accepted; anything else is `None`.
    pub fn from_answer(answer: &str) -> Option<Self> {
        match answer {
            "y" | "Y" => Some(NodeKind::Leaf),
            "n" | "N" => Some(NodeKind::Internal),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Leaf => "leaf",
            NodeKind::Internal => "internal",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for NodeKind {
    type Err = NodeKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "leaf" => Ok(NodeKind::Leaf),
            "internal" => Ok(NodeKind::Internal),
            _ => Err(NodeKindError::Unknown {
                value: s.to_string(),
            }),
        }
    }
}

/// Tree degree: bounds how many key groups a node's fixed region encodes.
///
/// Values of one or less are accepted and produce no per-entry groups.
///
/// # Examples
/// ```
/// use nodedump_core::Degree;
///
/// let degree: Degree = " 4 ".parse()?;
/// assert_eq!(degree.entry_count(), 3);
/// assert_eq!(Degree::new(0).entry_count(), 0);
/// # Ok::<(), nodedump_core::DegreeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degree(i64);

impl Degree {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn get(self) -> i64 {
        self.0
    }

    /// Number of repeated entry groups, `degree - 1` clamped at zero.
    pub fn entry_count(self) -> usize {
        usize::try_from(self.0.saturating_sub(1)).unwrap_or(0)
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Degree {
    type Err = DegreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<i64>()
            .map(Degree)
            .map_err(|source| DegreeError::Invalid {
                value: trimmed.to_string(),
                source,
            })
    }
}

/// Character range covered by a record; the tail has no upper bound.
///
/// # Examples
/// ```
/// use nodedump_core::Span;
///
/// assert_eq!(Span::closed(2, 44).to_string(), "2-44");
/// assert_eq!(Span::open(96).to_string(), "96-...");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<usize>,
}

impl Span {
    pub fn closed(start: usize, end: usize) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    pub fn open(start: usize) -> Self {
        Self { start, end: None }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "{}-{}", self.start, end),
            None => write!(f, "{}-...", self.start),
        }
    }
}

/// What part of the node a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// Flags byte (leaf/internal/root bits).
    Header,
    /// Leaf entry: key followed by a data pointer.
    Entry,
    /// Internal separator key.
    Key,
    /// Internal child pointer.
    ChildPointer,
    /// Leaf previous/next sibling pointer.
    Sibling,
    /// Remaining characters, grouped by four.
    Tail,
}

/// One labeled group of raw substrings.
///
/// # Examples
/// ```
/// use nodedump_core::{FieldRecord, Region, Span};
///
/// let record = FieldRecord {
///     region: Region::Header,
///     span: Span::closed(0, 2),
///     fields: vec!["06".to_string()],
/// };
/// assert_eq!(record.width(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRecord {
    pub region: Region,
    pub span: Span,
    /// Raw substrings in layout order; may be shorter than nominal or empty.
    pub fields: Vec<String>,
}

impl FieldRecord {
    /// Number of characters actually captured by this record.
    pub fn width(&self) -> usize {
        self.fields.iter().map(|field| field.chars().count()).sum()
    }
}

/// Records rendered together; sections are separated by blank lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub records: Vec<FieldRecord>,
}

/// Inputs of one decode, as collected by a front-end or stored in a fixture.
///
/// # Examples
/// ```
/// use nodedump_core::{Degree, NodeKind, NodeRequest};
///
/// let request: NodeRequest =
///     serde_json::from_str(r#"{"kind":"internal","degree":2,"data":"01"}"#)?;
/// assert_eq!(request.kind, NodeKind::Internal);
/// assert_eq!(request.degree, Degree::new(2));
/// assert_eq!(request.decode().record_count(), 5);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRequest {
    pub kind: NodeKind,
    pub degree: Degree,
    pub data: String,
}

impl NodeRequest {
    pub fn decode(&self) -> NodeLayout {
        decode(self.kind, self.degree, &self.data)
    }
}

/// Structured result of decoding one node descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeLayout {
    pub kind: NodeKind,
    pub degree: Degree,
    pub sections: Vec<Section>,
}

impl NodeLayout {
    /// All records in emission order.
    pub fn records(&self) -> impl Iterator<Item = &FieldRecord> {
        self.sections.iter().flat_map(|section| section.records.iter())
    }

    pub fn record_count(&self) -> usize {
        self.sections.iter().map(|section| section.records.len()).sum()
    }

    /// Concatenation of every field in order.
    ///
    /// Equals the input whenever the input covers the fixed regions.
    pub fn concat_fields(&self) -> String {
        self.records()
            .flat_map(|record| record.fields.iter())
            .map(String::as_str)
            .collect()
    }
}
