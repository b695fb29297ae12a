// graph module
// ──────────────────────────────────────────────────────────────────────────────
// The in-memory import graph: one entry per resolved package, each holding the
// set of packages it imports directly. Built once from the loader output by
// walking everything reachable from the root, then handed to the path
// enumerator read-only.
// ──────────────────────────────────────────────────────────────────────────────
mod paths;
mod target;

use std::collections::{BTreeSet, HashMap};

pub use paths::{enumerate_paths, ImportPath};
pub use target::Target;

/// A resolved package and its direct imports.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Package {
    pub id: String,
    pub imports: BTreeSet<String>,
}

impl Package {
    pub fn new<I, S>(id: impl Into<String>, imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            imports: imports.into_iter().map(Into::into).collect(),
        }
    }
}

/// Maps a package identifier to its node.
///
/// Identifiers that show up only as imports (packages the loader could not
/// resolve) have no entry; traversal treats them as leaves.
#[derive(Clone, Debug, Default)]
pub struct ImportGraph {
    nodes: HashMap<String, Package>,
}

impl ImportGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the graph reachable from `root`.
    ///
    /// `source_id` is the key the root is stored under. It is usually the
    /// identifier the user typed, which can differ from `root.id` when the
    /// loader resolved a relative pattern such as `.`.
    pub fn from_root(
        source_id: &str,
        root: &Package,
        resolved: &HashMap<String, Package>,
    ) -> Self {
        let mut graph = Self::new();
        // Worklist of identifiers still to copy in.
        let mut pending: Vec<&str> = root.imports.iter().map(String::as_str).collect();

        while let Some(id) = pending.pop() {
            if graph.nodes.contains_key(id) {
                continue;
            }
            if let Some(pkg) = resolved.get(id) {
                pending.extend(pkg.imports.iter().map(String::as_str));
                graph.nodes.insert(id.to_string(), pkg.clone());
            }
            // Unresolved imports stay out of the map.
        }

        graph.nodes.insert(
            source_id.to_string(),
            Package {
                id: source_id.to_string(),
                imports: root.imports.clone(),
            },
        );
        graph
    }

    /// Inserts or replaces a node.
    pub fn insert(&mut self, pkg: Package) {
        self.nodes.insert(pkg.id.clone(), pkg);
    }

    /// Returns the direct imports of `id`, or `None` if the package is not in
    /// the graph.
    pub fn imports_of(&self, id: &str) -> Option<&BTreeSet<String>> {
        self.nodes.get(id).map(|pkg| &pkg.imports)
    }

    /// Number of resolved packages.
    pub fn package_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of import edges, including edges to unresolved packages.
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|pkg| pkg.imports.len()).sum()
    }
}

impl FromIterator<Package> for ImportGraph {
    fn from_iter<T: IntoIterator<Item = Package>>(iter: T) -> Self {
        let mut graph = Self::new();
        for pkg in iter {
            graph.insert(pkg);
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(pkgs: &[(&str, &[&str])]) -> HashMap<String, Package> {
        pkgs.iter()
            .map(|(id, imports)| (id.to_string(), Package::new(*id, imports.iter().copied())))
            .collect()
    }

    #[test]
    fn from_root_keeps_only_reachable_packages() {
        let all = resolved(&[
            ("example.com/a", &["example.com/b"]),
            ("example.com/b", &["fmt"]),
            ("fmt", &[]),
            ("example.com/unrelated", &["fmt"]),
        ]);
        let graph = ImportGraph::from_root("example.com/a", &all["example.com/a"], &all);

        assert_eq!(graph.package_count(), 3);
        assert!(graph.imports_of("example.com/b").is_some());
        assert!(graph.imports_of("fmt").is_some());
        assert!(graph.imports_of("example.com/unrelated").is_none());
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn from_root_stores_root_under_source_id() {
        let all = resolved(&[("example.com/a", &["fmt"]), ("fmt", &[])]);
        let graph = ImportGraph::from_root(".", &all["example.com/a"], &all);

        assert!(graph.imports_of(".").is_some());
        assert!(graph.imports_of("example.com/a").is_none());
        let imports = graph.imports_of(".").expect("root present");
        assert!(imports.contains("fmt"));
    }

    #[test]
    fn from_root_skips_unresolved_imports() {
        let all = resolved(&[("a", &["b", "missing"]), ("b", &[])]);
        let graph = ImportGraph::from_root("a", &all["a"], &all);

        assert_eq!(graph.imports_of("missing"), None);
        // The edge itself is still recorded on the importer.
        assert!(graph.imports_of("a").is_some_and(|i| i.contains("missing")));
    }

    #[test]
    fn from_root_terminates_on_cycles() {
        let all = resolved(&[("a", &["b"]), ("b", &["a"])]);
        let graph = ImportGraph::from_root("a", &all["a"], &all);
        assert_eq!(graph.package_count(), 2);
    }
}
