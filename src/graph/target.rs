use std::fmt;

/// Decides where a path ends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// The package identifier must match exactly.
    Exact(String),
    /// Any identifier containing this text matches.
    Contains(String),
}

impl Target {
    /// Parses a destination argument. A leading `/` selects substring mode
    /// using the text after the slash.
    pub fn parse(spec: &str) -> Self {
        match spec.strip_prefix('/') {
            Some(rest) => Target::Contains(rest.to_string()),
            None => Target::Exact(spec.to_string()),
        }
    }

    pub fn matches(&self, id: &str) -> bool {
        match self {
            Target::Exact(name) => id == name,
            Target::Contains(needle) => id.contains(needle.as_str()),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Exact(name) => write!(f, "{}", name),
            Target::Contains(needle) => write!(f, "*{}*", needle),
        }
    }
}
