//! # Articles Architecture
//!
//! Articles is a small inventory manager: records with an id, a name, a price and a list
//! of barcode-like codes, kept in memory for the lifetime of one interactive session.
//!
//! The library knows nothing about menus or terminals. The binary wraps it in a
//! menu-driven read-eval-print loop, but the same core could sit behind any other UI.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu state machine, prompts, table output                │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes raw input (price strings, search values)      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic for create/list/update/search/delete      │
//! │  - Operates on Rust types, returns `Result<CmdResult>`      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - `ArticleStore` trait, uniqueness by id                   │
//! │  - `InMemoryStore` ordered by id                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O in Core
//!
//! From `api.rs` inward, code never reads stdin, never writes stdout and never exits
//! the process. Errors come back as [`error::ArticleError`] and the caller decides how
//! to show them.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and the in-memory implementation
//! - [`model`]: Core data types (`Article`, `SearchQuery`, `ArticleUpdate`)
//! - [`validation`]: Pure predicates and parsers for raw input lines
//! - [`config`]: Startup configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod validation;
