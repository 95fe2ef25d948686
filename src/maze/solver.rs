use log::{debug, info};

use crate::errors::PathPlannerError;
use crate::graph_algos::{bfs::build_bfs_graph, path_to, GraphNodeMap};
use super::graph::Graph;
use super::trace::{Path, Trace};
use super::{EXIT, START};


/// How a search ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// EXIT was dequeued, the path is complete
    Found,
    /// No START node, nothing was traversed
    NoStart,
    /// The frontier emptied before EXIT was reached
    Unreachable,
}

impl From<&PathPlannerError> for SearchOutcome {
    fn from(error: &PathPlannerError) -> Self {
        match error {
            PathPlannerError::NoStart => SearchOutcome::NoStart,
            PathPlannerError::NoPathFound => SearchOutcome::Unreachable,
        }
    }
}


/// Result of a traced search
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// START..EXIT, empty unless `outcome` is `Found`
    pub path: Path,
    pub trace: Trace,
    pub outcome: SearchOutcome,
}

impl Solution {

    pub fn is_found(&self) -> bool {
        self.outcome == SearchOutcome::Found
    }

    /// Number of edges on the path
    pub fn edge_count(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }

    /// Number of nodes removed from the frontier
    pub fn explored(&self) -> usize {
        self.trace.len()
    }
}


/// Breadth-first START to EXIT search over a `Graph`
///
/// Visited and parent state lives in a table owned by each call, so the graph
/// is never mutated and searches need no reset between runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct PathFinder {}

impl PathFinder {

    /// Shortest START..EXIT path, or an explanation of why there is none
    pub fn plan(&self, graph: &Graph) -> Result<Path, PathPlannerError> {
        let (node_map, goal_index) = self.search(graph, |_, _| {})?;
        self.goal_path(graph, &node_map, goal_index)
    }

    /// Shortest START..EXIT path, empty when START is missing or EXIT is unreachable
    pub fn find_path(&self, graph: &Graph) -> Path {
        match self.plan(graph) {
            Ok(path) => {
                info!("path found with {} nodes", path.len());
                path
            }
            Err(e) => {
                info!("{e}");
                Path::new()
            }
        }
    }

    /// Same search as `find_path`, returning one partial path per dequeued node
    pub fn find_path_traced(&self, graph: &Graph) -> Trace {
        self.solve(graph).trace
    }

    /// Path and trace from a single search
    pub fn solve(&self, graph: &Graph) -> Solution {
        let mut trace = Trace::new();
        let result = self.search(graph, |node_map, index| {
            trace.record(graph.names(&path_to(node_map, index)));
        });

        let path = result.and_then(|(node_map, goal_index)| self.goal_path(graph, &node_map, goal_index));
        let (path, outcome) = match path {
            Ok(path) => (path, SearchOutcome::Found),
            Err(e) => (Path::new(), SearchOutcome::from(&e)),
        };
        info!("search {:?} after {} steps", outcome, trace.len());

        Solution { path, trace, outcome }
    }

    /// Run the BFS from START, calling `on_dequeue` for every node leaving the frontier
    fn search<V>(&self, graph: &Graph, on_dequeue: V) -> Result<(GraphNodeMap<usize, usize>, Option<usize>), PathPlannerError>
    where
        V: FnMut(&GraphNodeMap<usize, usize>, usize),
    {
        let Some(start) = graph.index_of(START) else {
            debug!("no {START} node among {} nodes", graph.len());
            return Err(PathPlannerError::NoStart);
        };
        let exit = graph.index_of(EXIT);

        Ok(build_bfs_graph(
            start,
            |&index: &usize| graph.neighbor_indices(index),
            |&index: &usize| Some(index) == exit,
            on_dequeue,
        ))
    }

    fn goal_path(&self, graph: &Graph, node_map: &GraphNodeMap<usize, usize>, goal_index: Option<usize>) -> Result<Path, PathPlannerError> {
        goal_index
            .map(|goal_index| graph.names(&path_to(node_map, goal_index)))
            .ok_or(PathPlannerError::NoPathFound)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn build(lines: &[&str]) -> Graph {
        Graph::build(lines).unwrap()
    }

    fn path(names: &[&str]) -> Path {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_find_path_through_reverse_edge() {
        // A declares both of its edges, START only reaches A through the reverse edge
        let graph = build(&[
            "3,3,1",
            "START,0,0,A,B",
            "A,1,0,START,EXIT",
            "EXIT,2,0,A,W",
        ]);

        let finder = PathFinder::default();
        assert_eq!(finder.find_path(&graph), path(&["START", "A", "EXIT"]));
    }

    #[test]
    fn test_shortest_path_is_minimal() {
        // START - B - C - D - EXIT is longer than START - E - EXIT
        let graph = build(&[
            "6,3,3",
            "START,0,0,B,E",
            "B,1,0,C,A",
            "C,2,0,D,A",
            "D,2,1,W,A",
            "E,0,1,W,A",
            "EXIT,2,2,A,A",
        ]);

        let found = PathFinder::default().find_path(&graph);
        assert_eq!(found, path(&["START", "E", "EXIT"]));
    }

    #[test]
    fn test_tie_break_uses_adjacency_order() {
        let graph = build(&[
            "4,2,2",
            "START,0,0,C,B",
            "B,1,0,W,A",
            "C,0,1,W,A",
            "EXIT,1,1,A,A",
        ]);

        assert_eq!(PathFinder::default().find_path(&graph), path(&["START", "C", "EXIT"]));
    }

    #[test]
    fn test_missing_start() {
        let graph = build(&[
            "2,2,1",
            "B,0,0,W,A",
            "EXIT,1,0,A,A",
        ]);

        let finder = PathFinder::default();
        assert!(finder.find_path(&graph).is_empty());
        assert!(matches!(finder.plan(&graph), Err(PathPlannerError::NoStart)));

        let solution = finder.solve(&graph);
        assert_eq!(solution.outcome, SearchOutcome::NoStart);
        assert!(solution.trace.is_empty());
    }

    #[test]
    fn test_disconnected_exit_visits_component_once() {
        let graph = build(&[
            "5,3,2",
            "START,0,0,B,C",
            "B,1,0,C,A",
            "C,0,1,B,A",
            "D,2,0,A,W",
            "EXIT,2,1,A,A",
        ]);

        let finder = PathFinder::default();
        assert!(finder.find_path(&graph).is_empty());
        assert!(matches!(finder.plan(&graph), Err(PathPlannerError::NoPathFound)));

        let solution = finder.solve(&graph);
        assert_eq!(solution.outcome, SearchOutcome::Unreachable);
        assert_eq!(solution.trace.explored().collect::<Vec<_>>(), vec!["START", "B", "C"]);
    }

    #[test]
    fn test_dangling_neighbor_is_dead_end() {
        let graph = build(&[
            "2,2,1",
            "START,0,0,GHOST,W",
            "EXIT,1,0,A,A",
        ]);

        let solution = PathFinder::default().solve(&graph);
        assert_eq!(solution.path, path(&["START", "EXIT"]));
        assert_eq!(solution.explored(), 2);
    }

    #[test]
    fn test_one_trace_step_per_dequeued_node() {
        // EXIT is unreachable, so every node of START's component is dequeued
        let graph = build(&[
            "7,3,3",
            "START,0,0,B,C",
            "B,1,0,D,E",
            "C,0,1,E,A",
            "D,2,0,A,A",
            "E,1,1,D,A",
            "F,2,2,W,A",
            "EXIT,2,1,A,A",
        ]);

        let solution = PathFinder::default().solve(&graph);
        assert_eq!(solution.outcome, SearchOutcome::Unreachable);
        assert_eq!(solution.explored(), 5);
        assert_eq!(
            solution.trace.explored().collect::<Vec<_>>(),
            vec!["START", "B", "C", "D", "E"]
        );
        for step in solution.trace.iter() {
            assert_eq!(step.first().map(String::as_str), Some(START));
        }
    }

    #[test]
    fn test_trace_steps() {
        let graph = build(&[
            "4,2,2",
            "START,0,0,B,C",
            "B,1,0,A,A",
            "C,0,1,W,A",
            "EXIT,1,1,A,A",
        ]);

        let trace = PathFinder::default().find_path_traced(&graph);
        assert_eq!(
            trace.steps(),
            &[
                path(&["START"]),
                path(&["START", "B"]),
                path(&["START", "C"]),
                path(&["START", "C", "EXIT"]),
            ]
        );
    }

    #[test]
    fn test_trace_ends_with_plain_path() {
        let graph = build(&[
            "5,3,2",
            "START,0,0,B,C",
            "B,1,0,A,D",
            "C,0,1,D,A",
            "D,1,1,W,A",
            "EXIT,2,1,A,A",
        ]);

        let finder = PathFinder::default();
        let solution = finder.solve(&graph);
        assert!(solution.is_found());
        assert_eq!(solution.trace.last(), Some(&solution.path));
        assert_eq!(finder.find_path(&graph), solution.path);
        assert_eq!(solution.edge_count(), Some(3));
    }

    #[test]
    fn test_repeated_searches_agree() {
        let graph = build(&[
            "4,2,2",
            "START,0,0,B,A",
            "B,1,0,C,A",
            "C,1,1,W,A",
            "EXIT,0,1,A,A",
        ]);

        let finder = PathFinder::default();
        let first = finder.solve(&graph);
        let second = finder.solve(&graph);
        assert_eq!(first, second);
        assert_eq!(finder.find_path(&graph), finder.find_path(&graph));
    }

    #[test]
    fn test_isolated_start() {
        let graph = build(&["1,1,1", "START,0,0,A,A"]);
        let solution = PathFinder::default().solve(&graph);
        assert_eq!(solution.outcome, SearchOutcome::Unreachable);
        assert_eq!(solution.trace.steps(), &[path(&["START"])]);
        assert_eq!(solution.edge_count(), None);
    }
}
