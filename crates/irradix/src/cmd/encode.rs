use tracing::debug;

use crate::cmd::EncodeArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_conversion, OutputFormat};

pub fn run(args: EncodeArgs, format: OutputFormat) -> CliResult<i32> {
    let digits = irradix_radix::to_digits(args.value);
    debug!(value = args.value, len = digits.len(), "converted to base phi");
    print_conversion(args.value, digits.as_str(), format);
    Ok(SUCCESS)
}
