//! Main application orchestrator.
//!
//! Runs one invocation end to end:
//! 1. Initializes the verbose log unless `--quiet` is given.
//! 2. Checks that exactly a source and a destination package were given.
//! 3. Loads the import graph for the source through the selected loader.
//! 4. Enumerates every path to packages matching the destination.
//! 5. Renders, sorts and writes the paths to stdout or `--output`.
//!
//! Log initialisation and flush failures are reported on stderr and never
//! abort the run.

use super::cli::Cli;
use super::error::AppError;
use super::logger;
use super::output;
use super::processing;
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.
use crate::graph::Target;

/// Runs the application for parsed command-line arguments.
///
/// # Errors
/// `AppError::Usage` when the package count is wrong, loader errors when the
/// source cannot be resolved to a single package, and `AppError::Io` when the
/// result cannot be written.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;

    if !quiet_mode {
        if let Err(e) = logger::init_global_logger(&cli.log_file) {
            eprintln!(
                "Warning: Failed to initialize verbose logger ({}): {}. Verbose file logging will be unavailable.",
                cli.log_file.display(),
                e
            );
        } else {
            verbose_println!(
                quiet_mode,
                "Verbose logging initialized to {}",
                cli.log_file.display()
            );
        }
    }

    let result = run_search(&cli, quiet_mode);
    if let Err(e) = &result {
        verbose_eprintln!(quiet_mode, "{}", e);
    }

    if !quiet_mode {
        if let Err(e) = logger::flush_global_logger() {
            eprintln!(
                "[WARNING] Failed to perform final flush of {}: {}",
                cli.log_file.display(),
                e
            );
        }
    }
    result
}

fn run_search(cli: &Cli, quiet_mode: bool) -> Result<(), AppError> {
    let (src, dst) = cli.endpoints().ok_or(AppError::Usage)?;
    let target = Target::parse(dst);

    let loader = processing::build_loader(cli);
    let graph = processing::load_graph(loader.as_ref(), src, quiet_mode)?;
    if !quiet_mode {
        // Loading is the slow part; keep its log even if enumeration never returns.
        if let Err(e) = logger::flush_global_logger() {
            eprintln!("[WARNING] Failed to flush verbose log after loading: {}", e);
        }
    }

    let paths = processing::find_paths(&graph, src, &target, quiet_mode);
    let lines = output::render_sorted(&paths);

    verbose_println!(quiet_mode, "[STEP 3] Writing {} paths...", lines.len());
    match &cli.output {
        Some(path) => {
            output::write_lines_to_file(path, &lines)?;
            verbose_println!(quiet_mode, "   => Paths written to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = std::io::BufWriter::new(stdout.lock());
            output::write_lines(&mut writer, &lines)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    // Every test runs quiet so the process-wide logger stays untouched.
    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(["deppath", "--quiet"].into_iter().chain(args.iter().copied()))
            .unwrap()
    }

    fn graph_file(dir: &tempfile::TempDir, json: &str) -> String {
        let path = dir.path().join("graph.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(json.as_bytes()).unwrap();
        path.display().to_string()
    }

    #[test]
    fn wrong_argument_count_is_usage_error() {
        assert!(matches!(run_app(cli(&["only-one"])), Err(AppError::Usage)));
        assert!(matches!(run_app(cli(&["a", "b", "c"])), Err(AppError::Usage)));
    }

    #[test]
    fn writes_sorted_paths_to_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let graph = graph_file(&dir, r#"{"A": ["C", "B"], "B": ["D"], "C": ["D"], "D": []}"#);
        let out = dir.path().join("paths.txt");
        let out_str = out.display().to_string();

        run_app(cli(&["--graph", &graph, "-o", &out_str, "A", "D"])).unwrap();
        assert_eq!(
            std::fs::read_to_string(&out).unwrap(),
            "[\"A\", \"B\", \"D\"]\n[\"A\", \"C\", \"D\"]\n"
        );
    }

    #[test]
    fn unknown_source_reports_zero_packages() {
        let dir = tempfile::tempdir().unwrap();
        let graph = graph_file(&dir, r#"{"A": []}"#);

        let err = run_app(cli(&["--graph", &graph, "Z", "A"])).unwrap_err();
        assert!(matches!(err, AppError::AmbiguousRoot { count: 0, .. }));
    }
}
