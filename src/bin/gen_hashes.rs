use clap::{ArgAction, Parser};
use hexflip::cli::{finish, gen_hashes_stdout, init_logging, parse_bit_width, parse_hash_count, GenOptions};
use hexflip::BitWidth;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "gen_hashes")]
#[command(version = hexflip::cli::VERSION, about = "Generate random hashes as uppercase hex lines", long_about = None)]
struct Cli {
    /// Bits per hash (positive multiple of 8)
    #[arg(value_parser = parse_bit_width)]
    bit_width: BitWidth,

    /// Number of hashes to write
    #[arg(value_parser = parse_hash_count)]
    count: u64,

    /// Seed for a reproducible stream (default: OS entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = GenOptions {
        width: cli.bit_width,
        count: cli.count,
        seed: cli.seed,
    };
    finish(gen_hashes_stdout(&options))
}
