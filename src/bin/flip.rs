use clap::{ArgAction, Parser};
use hexflip::cli::{finish, flip_stdio, init_logging, parse_flip_count, FlipOptions};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "flip")]
#[command(version = hexflip::cli::VERSION, about = "Flip random bits in hex hashes read from stdin", long_about = None)]
struct Cli {
    /// Random bit flips per line (with replacement, so flips can cancel)
    #[arg(value_parser = parse_flip_count)]
    flip_count: u64,

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

    let options = FlipOptions {
        flips: cli.flip_count,
        seed: cli.seed,
    };
    finish(flip_stdio(&options))
}
