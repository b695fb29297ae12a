//! Rendering and writing of found paths.
//!
//! Each path becomes one line: the package identifiers quoted, comma-separated
//! and bracketed. Lines are sorted on that rendered text, so ordering never
//! depends on traversal order.

use std::fs::OpenOptions;
use std::io::{BufWriter, Error as IoError, Write};
use std::path::Path;

use crate::graph::ImportPath;

/// Renders one path as `["a", "b", "c"]`.
pub fn render_path(path: &ImportPath) -> String {
    format!("{:?}", path)
}

/// Renders every path and sorts the lines lexicographically.
pub fn render_sorted(paths: &[ImportPath]) -> Vec<String> {
    let mut lines: Vec<String> = paths.iter().map(render_path).collect();
    lines.sort_unstable();
    lines
}

/// Writes one line per entry and flushes the writer.
pub fn write_lines<W: Write>(writer: &mut W, lines: &[String]) -> Result<(), IoError> {
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()
}

/// Writes the lines to `file_path`, creating or truncating it.
pub fn write_lines_to_file(file_path: &Path, lines: &[String]) -> Result<(), IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(file_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(&mut writer, lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(ids: &[&str]) -> ImportPath {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn renders_quoted_comma_separated_list() {
        assert_eq!(render_path(&path(&["A", "B", "D"])), r#"["A", "B", "D"]"#);
        assert_eq!(render_path(&path(&["fmt"])), r#"["fmt"]"#);
    }

    #[test]
    fn escapes_quotes_in_identifiers() {
        assert_eq!(render_path(&path(&[r#"a"b"#])), r#"["a\"b"]"#);
    }

    #[test]
    fn sorts_on_rendered_text_not_length() {
        let lines = render_sorted(&[
            path(&["A", "C", "D"]),
            path(&["A", "B", "X", "D"]),
            path(&["A", "B", "D"]),
        ]);
        assert_eq!(
            lines,
            vec![
                r#"["A", "B", "D"]"#.to_string(),
                r#"["A", "B", "X", "D"]"#.to_string(),
                r#"["A", "C", "D"]"#.to_string(),
            ]
        );
    }

    #[test]
    fn empty_result_writes_nothing() {
        let mut buf = Vec::new();
        write_lines(&mut buf, &render_sorted(&[])).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn writes_lines_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("paths.txt");
        std::fs::write(&out, "stale content that should disappear\n").unwrap();

        write_lines_to_file(&out, &["one".to_string(), "two".to_string()]).unwrap();
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "one\ntwo\n");
    }
}
