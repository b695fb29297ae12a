use clap::Parser;
use std::path::PathBuf;

/// Printed on standard output when the positional arguments are wrong.
pub const USAGE: &str = "Usage: deppath <src-pkg> <dst-pkg>

If dst-pkg starts with a slash, it is interpreted as a substring to
match rather than an exact package name.
";

#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Prints every import path from one Go package to another.",
    long_about = None,
    override_usage = "deppath [OPTIONS] <src-pkg> <dst-pkg>"
)]
pub struct Cli {
    /// Source package followed by destination package. A destination starting
    /// with '/' matches any package containing the rest as a substring.
    #[clap(value_name = "PKG")]
    pub packages: Vec<String>,

    /// Do not write the verbose log file.
    #[clap(short, long)]
    pub quiet: bool,

    /// Where the verbose log is written.
    #[clap(long, env = "DEPPATH_LOG", default_value = "deppath.log")]
    pub log_file: PathBuf,

    /// Read the import graph from a JSON file instead of running `go list`.
    #[clap(long, env = "DEPPATH_GRAPH")]
    pub graph: Option<PathBuf>,

    /// Go executable used to list packages.
    #[clap(long, env = "DEPPATH_GO", default_value = "go")]
    pub go: String,

    /// Run `go list` from this directory.
    #[clap(short = 'C', long)]
    pub dir: Option<PathBuf>,

    /// Build tags passed to `go list`.
    #[clap(long)]
    pub tags: Option<String>,

    /// Write paths to this file instead of standard output.
    #[clap(short, long)]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Returns `(src, dst)` when exactly two packages were given.
    pub fn endpoints(&self) -> Option<(&str, &str)> {
        match self.packages.as_slice() {
            [src, dst] => Some((src.as_str(), dst.as_str())),
            _ => None,
        }
    }
}
