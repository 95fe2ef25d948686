use std::fmt;

use crate::collections::FxIndexSet;


/// A named vertex of the maze with its grid position and neighbors
///
/// Neighbors are kept in insertion order without duplicates. That order is
/// the tie-break when several shortest paths exist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    name: String,
    x: i32,
    y: i32,
    connections: FxIndexSet<String>,
}

impl Node {

    /// Create a node with no connections
    pub fn new(name: impl Into<String>, x: i32, y: i32) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            connections: FxIndexSet::default(),
        }
    }

    /// Append a neighbor unless it is already present or names this node
    /// Returns true if the neighbor was added
    pub fn add_connection(&mut self, name: &str) -> bool {
        if name == self.name || self.connections.contains(name) {
            return false;
        }
        self.connections.insert(name.to_string())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// Grid position as (x, y)
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Neighbor names in insertion order
    pub fn connections(&self) -> impl Iterator<Item = &str> {
        self.connections.iter().map(String::as_str)
    }

    pub fn is_connected_to(&self, name: &str) -> bool {
        self.connections.contains(name)
    }

    pub fn degree(&self) -> usize {
        self.connections.len()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at ({},{}) connects to: [", self.name, self.x, self.y)?;
        for (i, name) in self.connections.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(name)?;
        }
        f.write_str("]")
    }
}
