//! # Notez Architecture
//!
//! Notez is an in-memory note registry with create, read, update, delete and
//! title search. Nothing is persisted: a store lives as long as the process.
//! The `notez` binary is a thin client that replays a demo session against
//! the library.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints results, owns exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, returns CmdResult             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One operation per file, builds messages for the UI       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - NoteStore: id counter, validation, search                │
//! │  - DataStore trait + InMemoryStore backend                  │
//! │  - SharedNoteStore: one lock around a NoteStore             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Code from `api.rs` inward never writes to stdout/stderr and never exits
//! the process. Errors are [`error::NotezError`] values.
//!
//! ## Identity
//!
//! A [`model::Note`] is equal to another note exactly when their ids are
//! equal. Ids are minted by the store starting at 1 and are never reused,
//! except that [`store::NoteStore::clear`] restarts the sequence.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`store`]: Storage abstraction and the note registry
//! - [`model`]: `Note` and `NoteId`
//! - [`config`]: Configuration for the binary
//! - [`logging`]: Tracing subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod store;

pub use error::{NotezError, Result};
pub use model::{Note, NoteId};
pub use store::{NoteStore, SharedNoteStore};
