//! # discord_cli
//!
//! The binary is intentionally thin: the CLI lives in `src/discord_cli/cli/`,
//! and this file only invokes `cli::run()` and turns errors into an exit
//! status. See the library docs for the layering.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
