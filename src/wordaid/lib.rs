//! # Wordaid Architecture
//!
//! Wordaid is a **UI-agnostic vocabulary library**: the word book logic is a
//! library, and the bundled CLI is just its first client.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per user operation                            │
//! │  - Resolves listing positions, builds user-facing messages  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core State (collection.rs)                                 │
//! │  - WordCollection: the one owner of the in-memory word book │
//! │  - Validates, assigns ids/timestamps, write-through persists│
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract WordStore trait over one serialized slot        │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns regular
//! `Result` types, never writes to stdout/stderr, never calls
//! `std::process::exit`, and never assumes a terminal. The same core
//! could back a TUI or a GUI shell unchanged.
//!
//! ## State and Persistence
//!
//! [`collection::WordCollection`] holds the authoritative in-memory state
//! and is the exclusive mutation gateway. Every successful mutation
//! persists the entire collection synchronously before returning, so
//! there is never a flush step and a crash can at worst lose the
//! operation in flight. `clear` removes the stored slot outright, which
//! makes the next start re-seed the demonstration words.
//!
//! Everything is single-threaded and synchronous. If the collection ever
//! needs sharing across threads, one mutex around the mutate-then-persist
//! sequence is sufficient; nothing in the core suspends or blocks.
//!
//! ## Time
//!
//! Timestamps come from the [`clock::Clock`] trait rather than
//! `Utc::now()` calls scattered through the logic, so tests drive time
//! deterministically (see `clock::fixtures`).
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per command, plus the message/result types
//! - [`collection`]: The in-memory word book and its lifecycle
//! - [`filter`]: Pure search filtering
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Word`, `WordForm`)
//! - [`config`]: Configuration management
//! - [`clock`]: Injectable time source
//! - [`speech`]: Best-effort OS text-to-speech output
//! - [`error`]: Error types

pub mod api;
pub mod clock;
pub mod collection;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod speech;
pub mod store;
