//! Maze navigation: load a START/EXIT node maze from its text description and
//! find the fewest-edge path between the two with breadth-first search.
//!
//! ```text
//! 3,3,1              totalNodes,columns,rows
//! START,0,0,A,B      name,x,y,slot1,slot2
//! A,1,0,START,EXIT   slot: node name, "A" (no edge) or "W" (edge to EXIT)
//! EXIT,2,0,A,W
//! ```

mod collections;
pub mod errors;
pub mod graph_algos;
pub mod maze;

pub use errors::{LoadError, PathPlannerError};
pub use maze::{
    Graph, Header, Maze, Node, NodeRecord, Path, PathFinder, SearchOutcome, Slot, Solution, Trace,
    EXIT, START,
};
