use crate::cmd::DecodeArgs;
use crate::exit::{radix_error, CliResult, SUCCESS};
use crate::output::{print_value, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let digits = args.digits.trim();
    let value = irradix_radix::from_digits(digits)
        .map_err(|err| radix_error("invalid digit string", err))?;
    print_value(digits, value, format);
    Ok(SUCCESS)
}
