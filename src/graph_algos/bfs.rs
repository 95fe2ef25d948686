use crate::errors::PathPlannerError;
use super::{path_to, GraphNodeMap, NO_PARENT};

use std::{collections::VecDeque, hash::Hash, fmt::Debug};
use indexmap::map::Entry::Vacant;
use log::trace;



/// Identify the shortest path (fewest edges) using Breadth-First Search
/// https://en.wikipedia.org/wiki/Breadth-first_search
/// From start Node, traverse through graph until node meets goal criteria
pub fn bfs<N, IT, NN, G>(start: N, neighbors: NN, goal: G) -> Result<Vec<N>, PathPlannerError>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors
    IT: IntoIterator<Item = N>,
    G: Fn(&N) -> bool, // node qualifier for goal
    {

    let (node_map, goal_index) = build_bfs_graph(start, neighbors, goal, |_, _| {});

    goal_index
        .map(|goal_index| path_to(&node_map, goal_index))
        .ok_or(PathPlannerError::NoPathFound)
}


/// Traverses the graph breadth first
/// Returns a map of discovered nodes (parent index, depth) along with the index of the goal node
///
/// `on_dequeue` sees the map and the index of each node as it leaves the frontier,
/// before the goal check, so the goal node itself is observed too.
/// Nodes are marked visited when enqueued, each node enters the frontier at most once.
/// Neighbor order decides which of several equally short paths wins.
pub fn build_bfs_graph<N, IT, NN, G, V>(start: N, neighbors: NN, goal_fn: G, mut on_dequeue: V) -> (GraphNodeMap<N, usize>, Option<usize>)
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT,
    IT: IntoIterator<Item = N>,
    G: Fn(&N) -> bool,
    V: FnMut(&GraphNodeMap<N, usize>, usize),
    {

    // visited nodes, keyed by node, holding (parent_index, depth)
    // presence in the map is the visited flag
    let mut node_map: GraphNodeMap<N, usize> = GraphNodeMap::default();

    // FIFO frontier of indices into node_map
    let mut frontier: VecDeque<usize> = VecDeque::new();

    let start_index = node_map.insert_full(start, (NO_PARENT, 0)).0;
    frontier.push_back(start_index);

    while let Some(index) = frontier.pop_front() {

        on_dequeue(&node_map, index);

        let Some((node, &(_, depth))) = node_map.get_index(index) else {
            continue;
        };
        trace!("dequeued {node:?} at depth {depth}");

        if goal_fn(node) {
            return (node_map, Some(index));
        }

        for neighbor in neighbors(node) {
            if let Vacant(e) = node_map.entry(neighbor) {
                trace!("  enqueue {:?}", e.key());
                frontier.push_back(e.index());
                e.insert((index, depth + 1));
            }
        }
    }

    (node_map, None)
}
