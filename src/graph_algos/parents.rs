use std::iter;

use super::{GraphNodeMap, NO_PARENT};

/// Nodes from the search root to the node at `index`, following parent indices
///
/// `index` must come from the search that filled `node_map`; every such index
/// has an unbroken parent chain back to the root, so the walk cannot fail.
pub fn path_to<N, C>(node_map: &GraphNodeMap<N, C>, index: usize) -> Vec<N>
where
    N: Clone,
{
    debug_assert!(index < node_map.len(), "index {index} is not part of this search");

    let parents = iter::successors(Some(index), |&current| {
        node_map
            .get_index(current)
            .map(|(_, &(parent, _))| parent)
            .filter(|&parent| parent != NO_PARENT)
    });

    let mut path: Vec<N> = parents
        .filter_map(|current| node_map.get_index(current).map(|(node, _)| node.clone()))
        .collect();
    path.reverse();
    path
}
