use once_cell::sync::Lazy;
use std::fmt::Arguments;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Error as IoError, Write};
use std::path::Path;
use std::sync::Mutex;

// Global verbose log. `None` until initialised, and stays `None` in quiet mode.
static LOGGER: Lazy<Mutex<Option<BufWriter<File>>>> = Lazy::new(|| Mutex::new(None));

fn poisoned() -> IoError {
    IoError::other("logger mutex poisoned")
}

/// Points the global logger at `log_file_path`, truncating any previous log.
pub fn init_global_logger(log_file_path: &Path) -> Result<(), IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_file_path)?;
    let mut logger_guard = LOGGER.lock().map_err(|_| poisoned())?;
    *logger_guard = Some(BufWriter::new(file));
    Ok(())
}

/// Flushes buffered log lines to disk.
pub fn flush_global_logger() -> Result<(), IoError> {
    let mut logger_guard = LOGGER.lock().map_err(|_| poisoned())?;
    match logger_guard.as_mut() {
        Some(writer) => writer.flush(),
        None => Ok(()),
    }
}

/// Writes a verbose message to the global logger.
pub fn log_verbose_message_args(args: Arguments<'_>) {
    write_line("", args);
}

/// Writes a verbose error message to the global logger.
pub fn log_verbose_error_args(args: Arguments<'_>) {
    write_line("ERROR: ", args);
}

fn write_line(prefix: &str, args: Arguments<'_>) {
    match LOGGER.lock() {
        Ok(mut logger_guard) => {
            if let Some(writer) = logger_guard.as_mut() {
                if writeln!(writer, "{}{}", prefix, args).is_err() {
                    // Fallback to stderr if log writing fails
                    eprintln!("Fallback (log write failed): {}{}", prefix, args);
                }
            }
            // Not initialised: verbose output is dropped.
        }
        Err(_) => eprintln!("Fallback (logger mutex error): {}{}", prefix, args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The only test touching the global logger, so no cross-test interference.
    #[test]
    fn writes_messages_after_init() {
        log_verbose_message_args(format_args!("dropped before init"));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deppath.log");
        init_global_logger(&path).unwrap();

        log_verbose_message_args(format_args!("graph has {} packages", 3));
        log_verbose_error_args(format_args!("boom"));
        flush_global_logger().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "graph has 3 packages\nERROR: boom\n");
    }
}
