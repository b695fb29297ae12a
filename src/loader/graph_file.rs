use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use super::error::LoaderError;
use super::{LoadedPackages, PackageLoader};
use crate::graph::Package;

//─────────────────────────────────────────────────────────────────────────────

/// Loads an import graph saved as JSON.
///
/// The file holds one object mapping each package to the array of packages
/// it imports:
///
/// ```json
/// { "example.com/app": ["example.com/app/db", "fmt"], "fmt": [] }
/// ```
///
/// The pattern must be one of the keys; there is no pattern expansion.
#[derive(Clone, Debug)]
pub struct GraphFileLoader {
    path: PathBuf,
}

impl GraphFileLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PackageLoader for GraphFileLoader {
    fn load(&self, pattern: &str) -> Result<LoadedPackages, LoaderError> {
        let display = self.path.display().to_string();
        let content =
            fs::read_to_string(&self.path).map_err(|e| LoaderError::ReadFile(display.clone(), e))?;
        parse_graph(&content, pattern).map_err(|e| LoaderError::ParseGraph(display, e))
    }

    fn describe(&self) -> String {
        format!("graph file {}", self.path.display())
    }
}

fn parse_graph(content: &str, pattern: &str) -> Result<LoadedPackages, serde_json::Error> {
    let adjacency: BTreeMap<String, Vec<String>> = serde_json::from_str(content)?;

    let roots = if adjacency.contains_key(pattern) {
        vec![pattern.to_string()]
    } else {
        Vec::new()
    };
    let packages = adjacency
        .into_iter()
        .map(|(id, imports)| (id.clone(), Package::new(id, imports)))
        .collect();

    Ok(LoadedPackages {
        roots,
        packages,
        warnings: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_adjacency_object() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"A": ["B", "C"], "B": ["D"], "C": ["D"], "D": []}}"#).unwrap();

        let loaded = GraphFileLoader::new(file.path()).load("A").unwrap();
        assert_eq!(loaded.roots, vec!["A".to_string()]);
        assert_eq!(loaded.packages.len(), 4);
        assert_eq!(loaded.single_root().unwrap().imports.len(), 2);
    }

    #[test]
    fn unknown_pattern_has_no_roots() {
        let loaded = parse_graph(r#"{"A": []}"#, "Z").unwrap();
        assert!(loaded.roots.is_empty());
        assert_eq!(loaded.single_root().err(), Some(0));
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = GraphFileLoader::new(dir.path().join("nope.json"))
            .load("A")
            .unwrap_err();
        assert!(matches!(err, LoaderError::ReadFile(..)));
    }

    #[test]
    fn wrong_shape_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"["A", "B"]"#).unwrap();

        let err = GraphFileLoader::new(file.path()).load("A").unwrap_err();
        assert!(matches!(err, LoaderError::ParseGraph(..)));
    }
}
