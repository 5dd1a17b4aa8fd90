use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};

pub fn run(args: VersionArgs) -> CliResult<i32> {
    if !args.extended {
        println!("irradix {}", env!("CARGO_PKG_VERSION"));
        return Ok(SUCCESS);
    }

    println!("name: irradix");
    println!("version: {}", env!("CARGO_PKG_VERSION"));
    println!(
        "target: {}",
        option_env!("IRRADIX_BUILD_TARGET").unwrap_or("unknown")
    );
    println!(
        "profile: {}",
        option_env!("IRRADIX_BUILD_PROFILE").unwrap_or("unknown")
    );
    println!(
        "exact_limit: 2^{}",
        irradix_radix::MAX_EXACT_VALUE.trailing_zeros()
    );
    println!(
        "float_safe_limit: 2^{}",
        irradix_radix::FLOAT_SAFE_LIMIT.trailing_zeros()
    );
    println!("framings: prefixed, delimited");

    Ok(SUCCESS)
}
