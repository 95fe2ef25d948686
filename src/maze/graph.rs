use log::{debug, warn};

use crate::collections::FxIndexMap;
use crate::errors::LoadError;
use super::node::Node;
use super::record::{self, Header, NodeRecord};
use super::trace::Path;


/// The maze graph: every node by name, plus the header it was declared with
///
/// A `Graph` is immutable once built. Adjacency is symmetric for every pair of
/// existing nodes; names that resolve to no node stay as one-way entries and
/// are dead ends during traversal.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    header: Header,
    nodes: FxIndexMap<String, Node>,
}

impl Graph {

    /// Build a graph from raw maze text lines (header first)
    pub fn build<I, S>(lines: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (header, records) = record::parse_lines(lines)?;
        Self::from_records(header, &records)
    }

    /// Build a graph from parsed records
    /// Passes run strictly in order: vertices, declared edges, reverse edges
    pub fn from_records(header: Header, records: &[NodeRecord]) -> Result<Self, LoadError> {
        let mut nodes: FxIndexMap<String, Node> = FxIndexMap::default();
        nodes.reserve(records.len());

        // Vertex pass
        for record in records {
            if nodes.contains_key(&record.name) {
                return Err(LoadError::DuplicateNode {
                    line: record.line,
                    name: record.name.clone(),
                });
            }
            nodes.insert(record.name.clone(), Node::new(record.name.clone(), record.x, record.y));
        }
        debug!("vertex pass: {} nodes", nodes.len());

        // Directed edge pass, one direction as declared by the record
        let mut declared = 0;
        for record in records {
            if let Some(node) = nodes.get_mut(&record.name) {
                for target in record.targets() {
                    if node.add_connection(target) {
                        declared += 1;
                    }
                }
            }
        }
        debug!("edge pass: {declared} declared connections");

        // Symmetrization pass over the edges present after the declared pass
        let pairs: Vec<(String, String)> = nodes
            .values()
            .flat_map(|node| node.connections().map(move |target| (node.name().to_string(), target.to_string())))
            .collect();

        let mut reversed = 0;
        for (origin, target) in pairs {
            match nodes.get_mut(&target) {
                Some(node) => {
                    if node.add_connection(&origin) {
                        reversed += 1;
                    }
                }
                None => warn!("node {origin:?} connects to unknown node {target:?}"),
            }
        }
        debug!("symmetrization pass: {reversed} reverse connections added");

        let graph = Self { header, nodes };
        graph.check_header();
        Ok(graph)
    }

    /// Header values are informational, mismatches are only reported
    fn check_header(&self) {
        if self.header.node_count != self.nodes.len() {
            warn!(
                "header declares {} nodes but {} were read",
                self.header.node_count,
                self.nodes.len()
            );
        }
        for node in self.nodes.values() {
            if !self.header.contains(node.x(), node.y()) {
                warn!(
                    "node {:?} at ({},{}) lies outside the declared {}x{} grid",
                    node.name(),
                    node.x(),
                    node.y(),
                    self.header.columns,
                    self.header.rows
                );
            }
        }
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Node count declared by the header, not necessarily `len()`
    pub fn declared_node_count(&self) -> usize {
        self.header.node_count
    }

    pub fn columns(&self) -> usize {
        self.header.columns
    }

    pub fn rows(&self) -> usize {
        self.header.rows
    }

    /// Number of nodes actually read
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.get(name)
    }

    /// Nodes in the order they were declared
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Every connection between two existing nodes, once, in declaration order
    pub fn edges(&self) -> Vec<(&str, &str)> {
        let mut edges = Vec::new();
        for (index, node) in self.nodes.values().enumerate() {
            for target in node.connections() {
                if self.index_of(target).is_some_and(|t| t > index) {
                    edges.push((node.name(), target));
                }
            }
        }
        edges
    }

    pub(crate) fn index_of(&self, name: &str) -> Option<usize> {
        self.nodes.get_index_of(name)
    }

    pub(crate) fn node_at(&self, index: usize) -> Option<&Node> {
        self.nodes.get_index(index).map(|(_, node)| node)
    }

    /// Indices of the neighbors of the node at `index` that resolve to a node
    pub(crate) fn neighbor_indices(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.node_at(index)
            .into_iter()
            .flat_map(|node| node.connections())
            .filter_map(|name| self.index_of(name))
    }

    /// Map node indices back to names
    pub(crate) fn names(&self, indices: &[usize]) -> Path {
        indices
            .iter()
            .filter_map(|&index| self.node_at(index))
            .map(|node| node.name().to_string())
            .collect()
    }
}
