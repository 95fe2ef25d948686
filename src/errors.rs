use thiserror::Error;


#[derive(Error, Debug)]
pub enum PathPlannerError {
    #[error("no START node in the maze")]
    NoStart, // Start node is missing, nothing was traversed
    #[error("no path found")]
    NoPathFound, // Frontier exhausted before the goal was reached
}

/// Failure while turning maze text into a graph.
/// Line numbers are 1-based and count the header.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("maze description is empty, expected a header line")]
    MissingHeader,
    #[error("line {line}: malformed header: {reason}")]
    MalformedHeader { line: usize, reason: String },
    #[error("line {line}: malformed record: {reason}")]
    MalformedRecord { line: usize, reason: String },
    #[error("line {line}: coordinate {value:?} is not an integer")]
    InvalidCoordinate { line: usize, value: String },
    #[error("line {line}: node name is empty")]
    EmptyName { line: usize },
    #[error("line {line}: node {name:?} is declared more than once")]
    DuplicateNode { line: usize, name: String },
}
