/// Ordered node names from START to some node, START..EXIT for a solved maze
pub type Path = Vec<String>;


/// Step-by-step record of a breadth-first search
///
/// Step `i` is the path from START to the node removed from the frontier at
/// dequeue `i`. Steps are owned copies, independent of the search state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Trace {
    steps: Vec<Path>,
}

impl Trace {

    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, step: Path) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[Path] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last(&self) -> Option<&Path> {
        self.steps.last()
    }

    /// Node names in the order they were dequeued
    pub fn explored(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().filter_map(|step| step.last()).map(String::as_str)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Path> {
        self.steps.iter()
    }
}
