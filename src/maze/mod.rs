pub mod node;
pub mod record;
pub mod graph;
pub mod trace;
pub mod solver;

pub use node::Node;
pub use record::{Header, NodeRecord, Slot};
pub use graph::Graph;
pub use trace::{Path, Trace};
pub use solver::{PathFinder, SearchOutcome, Solution};

use std::{fs, path::PathBuf};
use log::info;

use crate::errors::LoadError;

/// Name of the node every search starts from
pub const START: &str = "START";
/// Name of the node every search is looking for
pub const EXIT: &str = "EXIT";


/// A loaded maze and the searches run against it
///
/// Loading replaces the graph only when the new description parses completely,
/// a failed load leaves the previous maze in place.
#[derive(Clone, Debug, Default)]
pub struct Maze {
    graph: Graph,
    source: Option<PathBuf>,
    finder: PathFinder,
}

impl Maze {

    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the maze with one built from raw text lines
    pub fn load_lines<I, S>(&mut self, lines: I) -> Result<(), LoadError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let graph = Graph::build(lines)?;
        self.commit(graph, None);
        Ok(())
    }

    /// Replace the maze with the one described by a file
    pub fn load_file(&mut self, path: impl Into<PathBuf>) -> Result<(), LoadError> {
        let path = path.into();
        let text = fs::read_to_string(&path)?;
        let graph = Graph::build(text.lines())?;
        self.commit(graph, Some(path));
        Ok(())
    }

    fn commit(&mut self, graph: Graph, source: Option<PathBuf>) {
        info!(
            "loaded {} nodes ({} declared, {}x{} grid)",
            graph.len(),
            graph.declared_node_count(),
            graph.columns(),
            graph.rows()
        );
        self.graph = graph;
        self.source = source;
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// File the current maze was loaded from, if any
    pub fn source(&self) -> Option<&std::path::Path> {
        self.source.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        !self.graph.is_empty()
    }

    pub fn find_path(&self) -> Path {
        self.finder.find_path(&self.graph)
    }

    pub fn animated_path(&self) -> Trace {
        self.finder.find_path_traced(&self.graph)
    }

    pub fn solve(&self) -> Solution {
        self.finder.solve(&self.graph)
    }
}
