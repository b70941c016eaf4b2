//! # Strand Architecture
//!
//! Strand is a **UI-agnostic todo lifecycle library**. The interactive
//! prompt and the one-shot CLI are thin clients over the same engine, and
//! that distinction drives the layout.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs the prompt loop, renders markup   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Holds session state (store handle, marker)               │
//! │  - Normalizes inputs (date expressions, tag spelling)       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure lifecycle logic, no I/O assumptions                 │
//! │  - Each mutation is one load → mutate → save cycle          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The index system
//!
//! Todos are addressed by their position in storage order. Positions are
//! reassigned on every load and are only valid within one
//! load/mutate/save cycle; a stale index from a previous listing may
//! point at a different todo after any mutation. The engine treats an
//! out-of-range index as a recoverable "not found".
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain arguments, returns
//! `Result<CmdResult>`, never writes to stdout/stderr, and never calls
//! `std::process::exit`. The same core could drive any other front end.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Lifecycle logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Todo`, `Category`)
//! - [`marker`]: The today-view marker and its correction arithmetic
//! - [`dates`]: Free-form date expression resolution
//! - [`markup`]: Inline markup to ANSI color rendering
//! - [`config`]: Store location resolution
//! - [`error`]: Error types
//! - `cli` (binary only): argument parsing, the prompt loop, printing

pub mod api;
pub mod commands;
pub mod config;
pub mod dates;
pub mod error;
pub mod marker;
pub mod markup;
pub mod model;
pub mod store;
