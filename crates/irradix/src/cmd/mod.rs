use clap::{ArgAction, Args, Subcommand, ValueEnum};
use std::path::PathBuf;

use irradix_frame::{DelimitedCodec, PrefixedCodec};

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod decode;
pub mod encode;
pub mod l1decode;
pub mod l1encode;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the base-phi digits of an integer.
    Encode(EncodeArgs),
    /// Print the integer for a base-phi digit string.
    Decode(DecodeArgs),
    /// Encode comma-separated integers into bytes on stdout.
    L1encode(L1encodeArgs),
    /// Decode bytes from a file or stdin into integers.
    L1decode(L1decodeArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Encode(args) => encode::run(args, format),
        Command::Decode(args) => decode::run(args, format),
        Command::L1encode(args) => l1encode::run(args, format),
        Command::L1decode(args) => l1decode::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

/// Byte layout used for sequences.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Framing {
    /// Length table, frame delimiter, then raw digits.
    #[default]
    Prefixed,
    /// Escaped digit strings joined by `101`.
    Delimited,
}

impl Framing {
    pub fn encode(self, nums: &[u64]) -> irradix_frame::Result<Vec<u8>> {
        let bytes = match self {
            Self::Prefixed => PrefixedCodec::new().encode(nums)?,
            Self::Delimited => DelimitedCodec::new().encode(nums)?,
        };
        Ok(bytes.to_vec())
    }

    pub fn decode(self, bytes: &[u8]) -> irradix_frame::Result<Vec<u64>> {
        match self {
            Self::Prefixed => PrefixedCodec::new().decode(bytes),
            Self::Delimited => DelimitedCodec::new().decode(bytes),
        }
    }
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Non-negative integer to convert.
    pub value: u64,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Base-phi digit string, most significant first (e.g. 10010).
    pub digits: String,
}

#[derive(Args, Debug)]
pub struct L1encodeArgs {
    /// Comma-separated integers. Read from stdin when omitted.
    pub input: Option<String>,
    /// Sequence framing.
    #[arg(long, value_enum, default_value_t = Framing::Prefixed)]
    pub framing: Framing,
    /// Verbosity; -vv reports size statistics on stderr.
    #[arg(short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Args, Debug)]
pub struct L1decodeArgs {
    /// File holding encoded bytes. Read from stdin when omitted.
    pub file: Option<PathBuf>,
    /// Sequence framing.
    #[arg(long, value_enum, default_value_t = Framing::Prefixed)]
    pub framing: Framing,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
