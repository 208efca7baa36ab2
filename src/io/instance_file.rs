//! Plain-text instance format.
//!
//! ```text
//! # comment lines start with '#', blank lines are ignored
//! 2 2            <- numJobs numMachines
//! 0 3 1 2        <- job 0: (machine duration) pairs, in processing order
//! 1 2 0 4        <- job 1
//! ```
//!
//! Every parsed instance goes through
//! [`validate_instance`](crate::validation::validate_instance).

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Instance, Operation};
use crate::validation::validate_instance;

/// Parses and validates an instance from its text form.
///
/// Errors carry the 1-based line number of the offending line.
pub fn parse_instance(name: &str, text: &str) -> Result<Instance> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

    let (header_line, header) = lines
        .next()
        .ok_or_else(|| Error::parse(1, "missing \"numJobs numMachines\" header"))?;
    let header = parse_numbers(header_line, header)?;
    let &[num_jobs, num_machines] = header.as_slice() else {
        return Err(Error::parse(
            header_line,
            format!("expected 2 numbers in header, found {}", header.len()),
        ));
    };
    let num_jobs = to_usize(header_line, num_jobs)?;
    let num_machines = to_usize(header_line, num_machines)?;

    // The header is untrusted: job lines are counted, never preallocated.
    let mut jobs = Vec::new();
    for job in 0..num_jobs {
        let (line_no, line) = lines
            .next()
            .ok_or_else(|| Error::parse(header_line, format!("missing line for job {job}")))?;
        let values = parse_numbers(line_no, line)?;
        if values.len() % 2 != 0 || values.len() / 2 != num_machines {
            return Err(Error::parse(
                line_no,
                format!(
                    "job {job}: expected {num_machines} pairs, found {} numbers",
                    values.len()
                ),
            ));
        }
        let ops = values
            .chunks_exact(2)
            .map(|pair| Ok(Operation::new(to_usize(line_no, pair[0])?, pair[1])))
            .collect::<Result<Vec<_>>>()?;
        jobs.push(ops);
    }

    if let Some((line_no, _)) = lines.next() {
        return Err(Error::parse(line_no, "unexpected data after the last job"));
    }

    let instance = Instance::new(name, num_machines, jobs);
    validate_instance(&instance)?;
    Ok(instance)
}

/// Reads, parses and validates an instance file.
///
/// The instance is named after the file name.
pub fn load_instance(path: impl AsRef<Path>) -> Result<Instance> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let instance = parse_instance(&name, &text)?;
    debug!(
        event = "instance_loaded",
        instance = %instance.name,
        jobs = instance.num_jobs,
        machines = instance.num_machines,
    );
    Ok(instance)
}

/// Renders an instance in the text format read by [`parse_instance`].
pub fn format_instance(instance: &Instance) -> String {
    let mut out = format!(
        "# {}\n{} {}\n",
        instance.name, instance.num_jobs, instance.num_machines
    );
    for ops in &instance.jobs {
        let line: Vec<String> = ops
            .iter()
            .map(|o| format!("{} {}", o.machine, o.duration))
            .collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

fn parse_numbers(line_no: usize, line: &str) -> Result<Vec<i64>> {
    line.split_whitespace()
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|e| Error::parse(line_no, format!("invalid number \"{token}\": {e}")))
        })
        .collect()
}

fn to_usize(line_no: usize, value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| Error::parse(line_no, format!("negative value {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{ft06, two_by_two};
    use std::io::Write;

    const TWO_BY_TWO: &str = "\
# two jobs, two machines
2 2

0 3 1 2
1 2 0 4
";

    #[test]
    fn test_parse_two_by_two() {
        let inst = parse_instance("2x2", TWO_BY_TWO).unwrap();
        assert_eq!(inst, two_by_two());
    }

    #[test]
    fn test_missing_header() {
        let err = parse_instance("empty", "# nothing\n\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
    }

    #[test]
    fn test_bad_token_line_number() {
        let err = parse_instance("bad", "# c\n2 2\n0 3 1 2\n1 x 0 4\n").unwrap_err();
        match err {
            Error::Parse { line, message } => {
                assert_eq!(line, 4);
                assert!(message.contains("\"x\""));
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn test_short_job_line() {
        let err = parse_instance("short", "2 2\n0 3 1 2\n1 2\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 3, .. }));
    }

    #[test]
    fn test_missing_job_line() {
        let err = parse_instance("missing", "2 2\n0 3 1 2\n").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_oversized_header_is_a_parse_error() {
        let err = parse_instance("big", "18446744073709551 2\n0 1 1 1\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));

        let err = parse_instance("wide", "1 9223372036854775807\n0 1\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }));
    }

    #[test]
    fn test_trailing_data() {
        let err = parse_instance("extra", "1 1\n0 5\n0 5\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 3, .. }));
    }

    #[test]
    fn test_validation_is_applied() {
        let err = parse_instance("dup", "1 2\n0 3 0 2\n").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(err.to_string().contains("machine 0 twice"));
    }

    #[test]
    fn test_format_is_parseable() {
        let inst = ft06();
        let text = format_instance(&inst);
        assert!(text.starts_with("# ft06\n6 6\n2 1 0 3 1 6"));
        assert_eq!(parse_instance("ft06", &text).unwrap(), inst);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("demo");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(TWO_BY_TWO.as_bytes()).unwrap();

        let inst = load_instance(&path).unwrap();
        assert_eq!(inst.name, "demo");
        assert_eq!(inst.num_jobs, 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_instance(dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
