//! The two working steps of a run: building the import graph through a
//! package loader, then enumerating paths over it.

use super::cli::Cli;
use super::error::AppError;
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.
use crate::graph::{self, ImportGraph, ImportPath, Target};
use crate::loader::{GoListLoader, GraphFileLoader, PackageLoader};

/// Picks the loader backend from the command line.
pub fn build_loader(cli: &Cli) -> Box<dyn PackageLoader> {
    match &cli.graph {
        Some(path) => Box::new(GraphFileLoader::new(path.clone())),
        None => Box::new(
            GoListLoader::new(cli.go.clone())
                .with_dir(cli.dir.clone())
                .with_tags(cli.tags.clone()),
        ),
    }
}

/// Resolves `src` and builds the import graph reachable from it.
///
/// # Errors
/// `AppError::Load` if the loader fails, `AppError::AmbiguousRoot` if the
/// pattern resolves to anything other than a single package.
pub fn load_graph(
    loader: &dyn PackageLoader,
    src: &str,
    quiet_mode: bool,
) -> Result<ImportGraph, AppError> {
    verbose_println!(quiet_mode, "[STEP 1] Loading {} via {}...", src, loader.describe());

    let loaded = loader.load(src).map_err(|source| AppError::Load {
        pkg: src.to_string(),
        source,
    })?;

    for warning in &loaded.warnings {
        verbose_eprintln!(quiet_mode, "   [WARNING] {}", warning);
    }

    let root = loaded
        .single_root()
        .map_err(|count| AppError::AmbiguousRoot {
            pkg: src.to_string(),
            count,
        })?;
    if root.id != src {
        verbose_println!(quiet_mode, "   => {} resolved to {}", src, root.id);
    }

    let graph = ImportGraph::from_root(src, root, &loaded.packages);
    verbose_println!(
        quiet_mode,
        "   => {} packages, {} imports reachable ({} loaded).",
        graph.package_count(),
        graph.edge_count(),
        loaded.packages.len()
    );
    Ok(graph)
}

/// Enumerates every path from `src` to packages matching `target`.
pub fn find_paths(
    graph: &ImportGraph,
    src: &str,
    target: &Target,
    quiet_mode: bool,
) -> Vec<ImportPath> {
    verbose_println!(quiet_mode, "[STEP 2] Searching paths {} -> {}...", src, target);

    let (paths, stats) = graph::enumerate_paths(graph, src, target);
    verbose_println!(
        quiet_mode,
        "   => {} paths; visited {}, pruned {}, dead ends {}.",
        paths.len(),
        stats.visited,
        stats.pruned,
        stats.dead_ends
    );
    paths
}
