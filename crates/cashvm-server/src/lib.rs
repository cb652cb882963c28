//! # cashvm-server
//!
//! HTTP front end for the CashVM opcode browser.
//!
//! This crate provides:
//! - The entry document at `/opcodes` (deployed `index.html` or a built-in grid)
//! - A JSON API over the opcode table
//! - Static asset serving from an ordered list of directories

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
mod handlers;
pub mod page;
mod server;

pub use config::{ServerConfig, DEFAULT_PORT, DEFAULT_STATIC_DIRS};
pub use error::{ApiError, ServerError, ServerResult};
pub use handlers::ENTRY_PATH;
pub use server::{OpcodeServer, ServerState};
