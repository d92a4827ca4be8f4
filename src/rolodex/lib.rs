//! # Rolodex Architecture
//!
//! Rolodex is a **UI-agnostic contact-book library**. The core is not a CLI
//! application that grew some library code; it is a library that happens to
//! ship a terminal menu and a web page as clients.
//!
//! ## The Layered Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  UI Layer (menu.rs + main.rs, web/)                         │
//! │  - Prompts, forms, HTML, terminal output                    │
//! │  - The ONLY place that knows about stdout/HTTP/exit codes   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - One method per operation                                 │
//! │  - Normalizes inputs (display names → normalized keys)      │
//! │  - Hands back CmdResult + messages                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic: validate, then mutate               │
//! │  - Plain types in, plain types out                          │
//! │  - Never touches stdout or HTTP                             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract ContactStore trait                              │
//! │  - JsonStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Below the API
//!
//! From `api.rs` inward (API, commands, storage) code takes plain Rust
//! arguments and returns `Result<CmdResult>`. Nothing below the API writes
//! to stdout or exits the process, and nothing assumes a terminal or an HTTP
//! request. That is what lets the numbered menu and the axum handlers drive
//! the same code.
//!
//! ## The Contact Book on Disk
//!
//! The whole book is one pretty-printed JSON document: a map from the
//! normalized name key (lowercased, trimmed) to the contact record. Every
//! mutation loads the map, changes it, and writes it back through a temp
//! file + rename so a crash can never leave a half-written book.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): Thorough unit tests of business logic
//!    against `InMemoryStore`. This is where the lion's share of testing
//!    lives.
//! 2. **Store** (`tests/store_fs.rs`): The file-backed store against real
//!    temp directories.
//! 3. **UI** (`tests/cli_menu.rs`, `tests/web_handlers.rs`): The compiled
//!    binary driven over stdin, and the axum handlers called as plain
//!    functions.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, the entry point for every operation
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Contact`, `Stats`)
//! - [`validate`]: Phone and email format checks
//! - [`config`]: Configuration management
//! - [`web`]: axum router, handlers, and HTML rendering
//! - [`logging`]: tracing subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod store;
pub mod validate;
pub mod web;
