//! Lexiclass CLI binary.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;

use lexiclass::cli::args::*;
use lexiclass::cli::commands::*;

fn main() {
    let args = LexiclassArgs::parse();

    // `RUST_LOG` wins over -v/-q, e.g. `RUST_LOG=lexiclass::classifier=debug`.
    Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
