use std::io::Read;

use tracing::debug;

use crate::cmd::L1decodeArgs;
use crate::exit::{frame_error, io_error, CliResult, SUCCESS};
use crate::output::{print_values, OutputFormat};

pub fn run(args: L1decodeArgs, format: OutputFormat) -> CliResult<i32> {
    let bytes = match &args.file {
        Some(path) => std::fs::read(path)
            .map_err(|err| io_error(&format!("failed to read {}", path.display()), err))?,
        None => {
            let mut bytes = Vec::new();
            std::io::stdin()
                .read_to_end(&mut bytes)
                .map_err(|err| io_error("failed to read stdin", err))?;
            bytes
        }
    };

    let values = args
        .framing
        .decode(&bytes)
        .map_err(|err| frame_error("decode failed", err))?;
    debug!(
        framing = ?args.framing,
        bytes = bytes.len(),
        elements = values.len(),
        "decoded sequence"
    );

    print_values(&values, format);
    Ok(SUCCESS)
}
