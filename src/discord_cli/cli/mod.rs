//! # CLI Layer
//!
//! This is the only place that knows about terminal I/O, exit codes and the
//! async runtime. Everything under the library crate takes Rust values and
//! returns Rust values.
//!
//! ## Invocation Flow
//!
//! 1. Parse arguments (`setup`).
//! 2. Install logging (`logging`).
//! 3. Resolve the configuration; announce the config file on stderr.
//! 4. Plan: `config` commands run locally, everything else goes through the
//!    setup steps once and gets an `AppContext`.
//! 5. Dispatch on a current-thread runtime and print the result (`print`).
//!
//! ## Module Structure
//!
//! - `commands`: Planning and dispatch
//! - `logging`: `tracing` subscriber setup
//! - `print`: Output formatting
//! - `setup`: Argument parsing via clap

mod commands;
mod logging;
mod print;
pub mod setup;

pub use commands::run;
