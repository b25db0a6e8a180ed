//! # Addrbook Architecture
//!
//! Addrbook is a single-user contact manager: every contact lives in memory for the
//! session, and the whole book is read from and written to one plain-text file.
//! The core is a library; the numbered-menu terminal program is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu REPL, prompts, one-shot subcommands, rendering      │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the store                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Turns store outcomes into CmdResult + user messages      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store (book.rs) over a Backend (store/)                    │
//! │  - Contacts, id counter, search, labels, reports            │
//! │  - FileBackend (production), MemBackend (testing)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits the process.
//! Diagnostics go through the `log` facade; the binary decides where they end up.
//!
//! ## Testing Strategy
//!
//! 1. **Store and model**: thorough unit tests over `MemBackend`.
//! 2. **Commands**: message and result shape, built on `store::memory::fixtures`.
//! 3. **API**: dispatch only.
//! 4. **CLI**: prompt and menu behaviour against in-memory readers/writers, plus
//!    `tests/` driving the real binary through stdin.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`book`]: The in-memory store and its operations
//! - [`commands`]: Result and message shaping per concern
//! - [`store`]: Backend trait, file and memory backends, line codec
//! - [`model`]: `Contact`, `ContactType`, `Labels`, field and patch types
//! - [`config`]: `addrbook.json` configuration
//! - [`error`]: Error types
//! - `cli`: Argument parsing, menus, prompts and rendering for the binary (not part of the lib API)

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
