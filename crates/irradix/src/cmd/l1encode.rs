use std::io::Read;

use tracing::{debug, info};

use crate::cmd::L1encodeArgs;
use crate::exit::{frame_error, io_error, CliError, CliResult, SUCCESS, USAGE};
use crate::output::{print_raw, print_stats, OutputFormat};
use crate::stats::SizeStats;

pub fn run(args: L1encodeArgs, format: OutputFormat) -> CliResult<i32> {
    let text = match args.input {
        Some(text) => text,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|err| io_error("failed to read stdin", err))?;
            text
        }
    };

    let nums = parse_csv(&text)?;
    let bytes = args
        .framing
        .encode(&nums)
        .map_err(|err| frame_error("encode failed", err))?;
    debug!(
        framing = ?args.framing,
        elements = nums.len(),
        bytes = bytes.len(),
        "encoded sequence"
    );

    print_raw(&bytes).map_err(|err| io_error("failed to write stdout", err))?;

    if args.verbose >= 2 {
        let stats = SizeStats::compute(&nums, bytes.len());
        info!(
            baseline = stats.baseline_bytes,
            theoretical = stats.theoretical_bytes,
            encoded = stats.encoded_bytes,
            "size statistics"
        );
        print_stats(&stats, format);
    }

    Ok(SUCCESS)
}

/// Parse comma-separated integers. Whitespace (including line breaks) is
/// ignored and empty fields are skipped, so trailing commas are accepted.
pub fn parse_csv(text: &str) -> CliResult<Vec<u64>> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    compact
        .split(',')
        .filter(|field| !field.is_empty())
        .map(|field| {
            field.parse::<u64>().map_err(|err| {
                CliError::new(USAGE, format!("invalid integer {field:?}: {err}"))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_list() {
        assert_eq!(parse_csv("5,130000").unwrap(), vec![5, 130_000]);
    }

    #[test]
    fn ignores_whitespace_and_line_breaks() {
        assert_eq!(parse_csv(" 1, 2,\n3\n").unwrap(), vec![1, 2, 3]);
        assert_eq!(parse_csv("12\n34,5").unwrap(), vec![1234, 5]);
    }

    #[test]
    fn empty_input_is_empty_sequence() {
        assert!(parse_csv("").unwrap().is_empty());
        assert!(parse_csv("\n").unwrap().is_empty());
        assert_eq!(parse_csv("7,").unwrap(), vec![7]);
    }

    #[test]
    fn rejects_non_integers() {
        let err = parse_csv("1,x,3").unwrap_err();
        assert_eq!(err.code, USAGE);
        assert!(err.message.contains("\"x\""));

        assert_eq!(parse_csv("-1").unwrap_err().code, USAGE);
        assert_eq!(parse_csv("18446744073709551616").unwrap_err().code, USAGE);
    }
}
