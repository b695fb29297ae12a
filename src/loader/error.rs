use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for package loading.
/// Covers the ways a loader can fail to produce the package set for a
/// pattern, whichever backend is in use.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// The package tool could not be started.
    #[error("Failed to run '{program}': {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    /// The package tool ran but reported failure.
    #[error("'{program}' exited with {status}: {stderr}")]
    CommandFailed {
        program: String,
        status: String,
        stderr: String,
    },

    /// `go list -json` produced output that is not a package stream.
    #[error("Failed to decode go list output: {0}")]
    DecodeGoList(serde_json::Error),

    /// Error when reading a graph file.
    #[error("Failed to read graph file '{0}': {1}")]
    ReadFile(String, std::io::Error),

    /// Error when a graph file is not a JSON object of import arrays.
    #[error("Failed to parse graph file '{0}': {1}")]
    ParseGraph(String, serde_json::Error),

    /// The requested package itself could not be resolved.
    #[error("{id}: {message}")]
    Package { id: String, message: String },
}
