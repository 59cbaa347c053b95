//! # Postbox Architecture
//!
//! Postbox is a **UI-agnostic client library** for a remote "posts" REST
//! collection. This is not a CLI application that happens to have some
//! library code—it's a library that happens to have a CLI client.
//!
//! ## The Two-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store Layer (store.rs)                                     │
//! │  - Owns the in-memory ordered post collection               │
//! │  - One remote call per operation, local mutation on success │
//! │  - Returns structured Result types, never panics            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Remote Layer (remote/)                                     │
//! │  - Abstract RemoteBackend trait                             │
//! │  - HttpBackend (production), InMemoryBackend (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From [`store`] inward, code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<()>`)
//! - **Never** writes to stdout/stderr (failures go to the `tracing` sink)
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! This means the same core could serve a TUI, a web frontend, or any
//! other UI. User-visible notifications go through the [`notify::Notifier`]
//! seam, so each client decides how a "post deleted" toast looks.
//!
//! ## Testing Strategy
//!
//! The [`remote::RemoteBackend`] trait is the test seam: unit tests run the
//! store against [`remote::memory::InMemoryBackend`] with seeded data and
//! injected failures, so no test ever touches the network.
//!
//! ## Module Overview
//!
//! - [`store`]: The post collection store—entry point for all operations
//! - [`remote`]: Remote backend abstraction and implementations
//! - [`model`]: Core data types (`Post`, `PostDraft`)
//! - [`notify`]: Notification collaborator seam
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod config;
pub mod error;
pub mod model;
pub mod notify;
pub mod remote;
pub mod store;
