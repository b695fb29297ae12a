// error module
pub mod error;
// backends
mod go_list;
mod graph_file;

use std::collections::HashMap;

use crate::graph::Package;

pub use error::LoaderError;
pub use go_list::GoListLoader;
pub use graph_file::GraphFileLoader;

//─────────────────────────────────────────────────────────────────────────────

/// Everything a loader resolved for one pattern.
#[derive(Clone, Debug, Default)]
pub struct LoadedPackages {
    /// Packages the pattern named directly. Exactly one is expected.
    pub roots: Vec<String>,
    /// Every resolved package, roots included, keyed by identifier.
    pub packages: HashMap<String, Package>,
    /// Non-fatal problems reported for dependencies.
    pub warnings: Vec<String>,
}

impl LoadedPackages {
    /// Returns the single root, or the number of roots found.
    pub fn single_root(&self) -> Result<&Package, usize> {
        match self.roots.as_slice() {
            [id] => self.packages.get(id).ok_or(0),
            other => Err(other.len()),
        }
    }
}

/// Resolves a package pattern into the package and its transitive imports.
///
/// This is the only capability the rest of the program needs from a package
/// resolution backend.
pub trait PackageLoader {
    fn load(&self, pattern: &str) -> Result<LoadedPackages, LoaderError>;

    /// Short description of where packages come from, for the log.
    fn describe(&self) -> String;
}
