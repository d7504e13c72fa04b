use clap::{ArgAction, Parser};
use hexflip::cli::{finish, hamming_stdout, init_logging, HammingOptions};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "hamming")]
#[command(version = hexflip::cli::VERSION, about = "Print the bit distance between matching lines of two hex files", long_about = None)]
struct Cli {
    /// First hex file (`-` for stdin)
    left: PathBuf,

    /// Second hex file (`-` for stdin)
    right: PathBuf,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = HammingOptions {
        left: cli.left,
        right: cli.right,
    };
    finish(hamming_stdout(&options))
}
