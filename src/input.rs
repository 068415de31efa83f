//! Process file loading.
//!
//! # Format
//!
//! One process per line, three whitespace-separated integers:
//!
//! ```text
//! process_id arrival_time burst_time
//! ```
//!
//! Parsing is all-or-nothing: any bad line rejects the whole file, so a
//! partial batch is never returned. Value ranges (negative arrival,
//! non-positive burst) are checked later by [`crate::validation`].

use std::fs;
use std::io;
use std::path::Path;

use log::warn;

use crate::error::{ErrorKind, SimResult, SimulationError};
use crate::models::Process;

/// Reads and parses a process file.
///
/// # Errors
/// - `InputFileMissing` if the file does not exist or cannot be read.
/// - `InputFormatError` if the content is not valid UTF-8 or any line is
///   not exactly three integers.
pub fn read_processes(path: impl AsRef<Path>) -> SimResult<Vec<Process>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        let err = match e.kind() {
            io::ErrorKind::NotFound => SimulationError::new(
                ErrorKind::InputFileMissing,
                format!("File '{}' not found.", path.display()),
            ),
            io::ErrorKind::InvalidData => SimulationError::new(
                ErrorKind::InputFormatError,
                format!("File '{}' is not valid UTF-8 text.", path.display()),
            ),
            _ => SimulationError::new(
                ErrorKind::InputFileMissing,
                format!("File '{}' could not be read: {e}", path.display()),
            ),
        };
        warn!("{err}");
        err
    })?;

    parse_processes(&content)
}

/// Parses process definitions from text.
///
/// An empty input yields an empty batch.
///
/// # Example
/// ```
/// use u_cpusched::input::parse_processes;
///
/// let batch = parse_processes("1 0 5\n2 0 3\n").unwrap();
/// assert_eq!(batch.len(), 2);
/// assert_eq!(batch[1].burst_time, 3);
///
/// assert!(parse_processes("1 0 five").is_err());
/// ```
pub fn parse_processes(content: &str) -> SimResult<Vec<Process>> {
    content
        .lines()
        .enumerate()
        .map(|(idx, line)| {
            parse_line(line).map_err(|reason| {
                let err = SimulationError::new(
                    ErrorKind::InputFormatError,
                    format!(
                        "Invalid file format at line {}: {reason}. Ensure each line contains three integers.",
                        idx + 1
                    ),
                );
                warn!("{err}");
                err
            })
        })
        .collect()
}

fn parse_line(line: &str) -> Result<Process, String> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(format!("expected 3 fields, found {}", fields.len()));
    }

    let mut values = [0i64; 3];
    for (value, field) in values.iter_mut().zip(&fields) {
        *value = field
            .parse()
            .map_err(|_| format!("'{field}' is not an integer"))?;
    }

    let [id, arrival, burst] = values;
    Ok(Process::new(id, arrival, burst))
}

/// Formats a batch in the loader's line format.
pub fn format_processes(processes: &[Process]) -> String {
    processes
        .iter()
        .map(|p| format!("{} {} {}\n", p.id, p.arrival_time, p.burst_time))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_valid() {
        let batch = parse_processes("1 0 5\n2  3\t4\n").unwrap();
        assert_eq!(batch, vec![Process::new(1, 0, 5), Process::new(2, 3, 4)]);
        assert!(batch.iter().all(Process::is_fresh));
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_processes("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_wrong_field_count() {
        let err = parse_processes("1 0 5\n2 3\n").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InputFormatError);
        assert!(err.message.contains("line 2"));
        assert!(err.message.contains("found 2"));
    }

    #[test]
    fn test_parse_non_integer() {
        let err = parse_processes("1 0 5.5\n").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InputFormatError);
        assert!(err.message.contains("'5.5'"));
    }

    #[test]
    fn test_parse_blank_line_rejected() {
        let err = parse_processes("1 0 5\n\n2 0 3\n").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InputFormatError);
        assert!(err.message.contains("line 2"));
    }

    #[test]
    fn test_format_round_trip() {
        let batch = vec![Process::new(1, 0, 5), Process::new(2, 4, 1)];
        let text = format_processes(&batch);
        assert_eq!(text, "1 0 5\n2 4 1\n");
        assert_eq!(parse_processes(&text).unwrap(), batch);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_processes(dir.path().join("absent.txt")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InputFileMissing);
        assert!(err.message.contains("absent.txt"));
    }

    #[test]
    fn test_read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1 0 8").unwrap();
        writeln!(file, "2 1 4").unwrap();
        let batch = read_processes(file.path()).unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[1].arrival_time, 1);
    }

    #[test]
    fn test_read_malformed_file_yields_no_partial_batch() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1 0 8").unwrap();
        writeln!(file, "oops").unwrap();
        let err = read_processes(file.path()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InputFormatError);
    }
}
