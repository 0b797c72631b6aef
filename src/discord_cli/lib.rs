//! # discord_cli Architecture
//!
//! `discord_cli` is a thin command-line client over Discord's REST API. The REST
//! transport belongs to [`twilight_http`]; this crate owns the parts around it:
//! where configuration comes from, when a client may be built, and how results
//! are handed back to the terminal.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders results, sets exit codes       │
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Context (context.rs)                                       │
//! │  - Runs the setup steps once per invocation                 │
//! │  - Owns the resolved Configuration and the client handle    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per operation, returns CmdResult            │
//! │  - Talks to Discord only through the DiscordApi trait       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Facade (api.rs)                                        │
//! │  - DiscordApi trait, implemented for twilight_http::Client  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration Precedence
//!
//! Flags beat environment variables, which beat the `.discord_cli` YAML file,
//! which beats the compiled defaults. See [`config`].
//!
//! ## No Globals
//!
//! There is no process-wide configuration or client. The CLI resolves a
//! [`config::Configuration`] once, turns it into a [`context::AppContext`] and
//! passes that by reference into every handler.
//!
//! ## Module Overview
//!
//! - [`config`]: Configuration resolution and the config file
//! - [`context`]: Setup steps and the per-invocation context
//! - [`api`]: The Discord API facade
//! - [`commands`]: Operations behind each subcommand
//! - [`snowflake`]: Discord ID validity
//! - [`error`]: Error types
//! - `cli`: Argument parsing, logging setup and printing for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod snowflake;
