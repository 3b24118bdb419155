//! Error types used in the library.
//!
//! - Every error aborts the operation which found it. All but [WriteError] are data-integrity faults between pipeline stages.
//! - Errors carry the offending line (counted from 1) or identifier, so the upstream output can be inspected.
//!
//! Names of the error enums overlap with the part of the pipeline they are found in.
//  As such, throughout the library err::{self} is used to prefix use of the types with `err::`.

use std::path::PathBuf;

use crate::structures::{
    axiom::{AxiomId, Origin},
    literal::Literal,
};

/// The top-level error of the library.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Unparsable tokens, a missing terminator, or an empty clause source.
    Parse(ParseError),

    /// A fault found while extracting a module.
    Extract(ExtractError),

    /// A fault found in an index map.
    Index(IndexError),

    /// Some artifact could not be written.
    Write(WriteError),
}

impl ErrorKind {
    /// A short name for the kind of fault, as used in reports.
    pub fn fault(&self) -> &'static str {
        match self {
            Self::Parse(_) => "MalformedInput",
            Self::Extract(ExtractError::FaultyReference(_)) => "FaultyReference",
            Self::Extract(ExtractError::AmbiguousDefinition { .. }) => "AmbiguousDefinition",
            Self::Index(IndexError::FaultyReference(_)) => "FaultyReference",
            Self::Index(_) => "MalformedInput",
            Self::Write(_) => "WriteFailure",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{}: {e}", self.fault()),
            Self::Extract(e) => write!(f, "{}: {e}", self.fault()),
            Self::Index(e) => write!(f, "{}: {e}", self.fault()),
            Self::Write(e) => write!(f, "{}: {e}", self.fault()),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The clause source holds no clauses.
    NoClauses,

    /// Some unspecific problem at a specific line, e.g. the line could not be read.
    Line(usize),

    /// A token at the given line is not an integer.
    Token { line: usize, token: String },

    /// A line does not end with the `0` terminator.
    MissingTerminator(usize),

    /// A `0` was found before the end of a line.
    MisplacedTerminator(usize),

    /// The literal `0` was given where a literal was required.
    ZeroLiteral,

    /// The literal cannot be negated without overflow.
    Unnegatable(Literal),

    /// A definition line with an identifier, but no axiom.
    IncompleteDefinition { origin: Origin, line: usize },

    /// A warning was found while encoding in strict mode.
    Strict(String),

    /// Some issue with the header of a WCNF input.
    ProblemSpecification,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoClauses => write!(f, "no clauses in the clause source"),
            Self::Line(line) => write!(f, "unable to read line {line}"),
            Self::Token { line, token } => write!(f, "unparsable token {token:?} at line {line}"),
            Self::MissingTerminator(line) => write!(f, "missing terminator at line {line}"),
            Self::MisplacedTerminator(line) => write!(f, "terminator before end of line {line}"),
            Self::ZeroLiteral => write!(f, "0 is not a literal"),
            Self::Unnegatable(literal) => write!(f, "the literal {literal} cannot be negated"),
            Self::IncompleteDefinition { origin, line } => {
                write!(f, "no axiom after the identifier at {origin} line {line}")
            }
            Self::Strict(warning) => write!(f, "{warning} (strict)"),
            Self::ProblemSpecification => write!(f, "missing or invalid problem line"),
        }
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Noted errors when extracting a module.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ExtractError {
    /// The module references an axiom with no definition.
    FaultyReference(AxiomId),

    /// The axiom has more definitions than can be collapsed into one axiom.
    AmbiguousDefinition {
        /// The axiom.
        id: AxiomId,
        /// The number of definitions found.
        count: usize,
    },
}

impl std::fmt::Display for ExtractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FaultyReference(id) => write!(f, "axiom {id} is referenced but not defined"),
            Self::AmbiguousDefinition { id, count } => {
                write!(f, "axiom {id} has {count} conflicting definitions")
            }
        }
    }
}

impl From<ExtractError> for ErrorKind {
    fn from(e: ExtractError) -> Self {
        ErrorKind::Extract(e)
    }
}

/// Errors when reading or querying an index map.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum IndexError {
    /// The sequence index at the given line breaks the run `1..=N`.
    Sequence { line: usize, found: usize },

    /// A line of the map is missing its index, identifier, or text.
    Entry(usize),

    /// No entry has the given value.
    FaultyReference(String),
}

impl std::fmt::Display for IndexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sequence { line, found } => {
                write!(f, "sequence index {found} at line {line} breaks the run from 1")
            }
            Self::Entry(line) => write!(f, "incomplete entry at line {line}"),
            Self::FaultyReference(value) => write!(f, "no entry for {value}"),
        }
    }
}

impl From<IndexError> for ErrorKind {
    fn from(e: IndexError) -> Self {
        ErrorKind::Index(e)
    }
}

/// Errors when writing the artifacts of an extraction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WriteError {
    /// The file which could not be written.
    pub path: PathBuf,

    pub kind: std::io::ErrorKind,
}

impl std::fmt::Display for WriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unable to write {:?} ({})", self.path, self.kind)
    }
}

impl From<WriteError> for ErrorKind {
    fn from(e: WriteError) -> Self {
        ErrorKind::Write(e)
    }
}
