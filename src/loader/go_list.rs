use std::path::PathBuf;
use std::process::Command;

use serde::Deserialize;

use super::error::LoaderError;
use super::{LoadedPackages, PackageLoader};
use crate::graph::Package;

//─────────────────────────────────────────────────────────────────────────────

/// Loads Go packages by running `go list -e -deps -json`.
///
/// `-deps` makes the tool print every transitive dependency after the packages
/// named by the pattern, and `-e` keeps it going past broken packages so that
/// their errors arrive in the JSON rather than as a failed run.
#[derive(Clone, Debug)]
pub struct GoListLoader {
    go: String,
    dir: Option<PathBuf>,
    tags: Option<String>,
}

impl GoListLoader {
    pub fn new(go: impl Into<String>) -> Self {
        Self {
            go: go.into(),
            dir: None,
            tags: None,
        }
    }

    /// Runs `go list` from `dir` instead of the current directory.
    pub fn with_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.dir = dir;
        self
    }

    /// Forwards build tags to `go list -tags`.
    pub fn with_tags(mut self, tags: Option<String>) -> Self {
        self.tags = tags;
        self
    }

    fn command(&self, pattern: &str) -> Command {
        let mut cmd = Command::new(&self.go);
        cmd.args(["list", "-e", "-deps", "-json"]);
        if let Some(tags) = &self.tags {
            cmd.arg("-tags").arg(tags);
        }
        cmd.arg("--").arg(pattern);
        if let Some(dir) = &self.dir {
            cmd.current_dir(dir);
        }
        cmd
    }
}

impl PackageLoader for GoListLoader {
    fn load(&self, pattern: &str) -> Result<LoadedPackages, LoaderError> {
        let output = self
            .command(pattern)
            .output()
            .map_err(|source| LoaderError::Spawn {
                program: self.go.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(LoaderError::CommandFailed {
                program: self.go.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        parse_go_list_output(&output.stdout)
    }

    fn describe(&self) -> String {
        match &self.dir {
            Some(dir) => format!("{} list (in {})", self.go, dir.display()),
            None => format!("{} list", self.go),
        }
    }
}

/// The subset of `go list -json` package fields we read.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GoListPackage {
    import_path: String,
    #[serde(default)]
    imports: Vec<String>,
    #[serde(default)]
    dep_only: bool,
    error: Option<GoListError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GoListError {
    err: String,
}

/// Decodes the concatenated JSON objects printed by `go list -json`.
///
/// Packages not marked `DepOnly` are the roots. A broken root is a load
/// failure; a broken dependency only produces a warning.
fn parse_go_list_output(stdout: &[u8]) -> Result<LoadedPackages, LoaderError> {
    let mut loaded = LoadedPackages::default();

    let stream = serde_json::Deserializer::from_slice(stdout).into_iter::<GoListPackage>();
    for item in stream {
        let pkg = item.map_err(LoaderError::DecodeGoList)?;

        if let Some(error) = pkg.error {
            if !pkg.dep_only {
                return Err(LoaderError::Package {
                    id: pkg.import_path,
                    message: error.err,
                });
            }
            loaded
                .warnings
                .push(format!("{}: {}", pkg.import_path, error.err));
        }

        if !pkg.dep_only {
            loaded.roots.push(pkg.import_path.clone());
        }
        loaded.packages.insert(
            pkg.import_path.clone(),
            Package::new(pkg.import_path, pkg.imports),
        );
    }

    Ok(loaded)
}
