use std::collections::HashSet;

use super::{ImportGraph, Target};

/// An ordered chain of package identifiers, source first.
pub type ImportPath = Vec<String>;

/// Counters collected during one enumeration, used for the verbose log.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnumerationStats {
    /// Nodes pushed onto the descent stack.
    pub visited: usize,
    /// Visits skipped because the node was already a known dead end.
    pub pruned: usize,
    /// Nodes marked as dead ends.
    pub dead_ends: usize,
}

/// Returns every simple path from `source` to a package matching `target`,
/// along with traversal counters.
///
/// Paths stop at the first matching package. Packages already on the current
/// chain are not re-entered, so cycles are cut rather than reported.
pub fn enumerate_paths(
    graph: &ImportGraph,
    source: &str,
    target: &Target,
) -> (Vec<ImportPath>, EnumerationStats) {
    let mut walk = Walk::new(graph, target);
    walk.visit(source);
    (walk.found, walk.stats)
}

/// Traversal state for a single enumeration.
///
/// The dead-end memo lives here rather than in any global so that separate
/// enumerations never share it.
struct Walk<'a> {
    graph: &'a ImportGraph,
    target: &'a Target,
    stack: Vec<&'a str>,
    on_stack: HashSet<&'a str>,
    // Packages from which no match was reachable. Sound only for acyclic
    // subgraphs: with a cycle, a node's result can depend on which ancestors
    // were excluded by `on_stack` when it was first explored.
    dead_ends: HashSet<&'a str>,
    found: Vec<ImportPath>,
    stats: EnumerationStats,
}

impl<'a> Walk<'a> {
    fn new(graph: &'a ImportGraph, target: &'a Target) -> Self {
        Self {
            graph,
            target,
            stack: Vec::new(),
            on_stack: HashSet::new(),
            dead_ends: HashSet::new(),
            found: Vec::new(),
            stats: EnumerationStats::default(),
        }
    }

    fn visit(&mut self, id: &'a str) {
        let graph = self.graph;
        if self.dead_ends.contains(id) {
            self.stats.pruned += 1;
            return;
        }
        let found_before = self.found.len();
        self.stack.push(id);
        self.on_stack.insert(id);
        self.stats.visited += 1;

        if self.target.matches(id) {
            self.found
                .push(self.stack.iter().map(|s| s.to_string()).collect());
        } else if let Some(imports) = graph.imports_of(id) {
            for next in imports {
                if !self.on_stack.contains(next.as_str()) {
                    self.visit(next);
                }
            }
        }
        // Unresolved packages fall through as leaves.

        self.stack.pop();
        self.on_stack.remove(id);
        if self.found.len() == found_before {
            self.dead_ends.insert(id);
            self.stats.dead_ends += 1;
        }
    }
}
