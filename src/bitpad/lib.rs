//! # Bitpad Architecture
//!
//! Bitpad is a **UI-agnostic snippet playground library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! A "bit" is one saved unit of HTML+CSS+JS source plus metadata. Bits are
//! kept in a durable key-value store, accounts are a local simulation, and
//! the preview renderer turns a bit into a self-contained sandboxed HTML
//! document on a rendering surface.
//!
//! ## The Layered Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                     │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (display indexes → UUIDs → Bits)       │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Stores (store.rs, accounts.rs)                             │
//! │  - Own the hydrated bit/account collections                 │
//! │  - Flush the full collection after every mutation           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (storage/)                                   │
//! │  - Abstract StorageBackend key-value trait                  │
//! │  - FileStorage (production), MemoryStorage (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The preview renderer (`preview/`) sits beside the stores: it consumes a
//! bit's three source fields and owns the rendering surface, nothing else.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, stores, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! This means the same core could serve a TUI, a web UI, or any other
//! client. Everything user-facing that a command wants to say travels in
//! the returned `CmdResult` messages.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: The bit collection and its persistence
//! - [`accounts`]: The simulated account system and session
//! - [`storage`]: Key-value storage abstraction and implementations
//! - [`preview`]: Document composition and rendering surfaces
//! - [`model`]: Core data types (`Bit`, `User`, `Theme`)
//! - [`index`]: Display indexing (1, 2, e1 notation)
//! - [`routes`]: Editor/detail addresses for a bit
//! - [`config`]: Configuration management
//! - [`editor`]: External editor integration
//! - [`error`]: Error types

pub mod accounts;
pub mod api;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod index;
pub mod model;
pub mod preview;
pub mod routes;
pub mod storage;
pub mod store;
