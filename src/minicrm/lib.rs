//! # Minicrm Architecture
//!
//! Minicrm is a small in-memory customer record manager. The text menu is only the
//! outermost ring: everything it does goes through a UI-agnostic core.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Binary (main.rs, cli/)                                     │
//! │  - Parses flags, installs logging, wires stdin/stdout       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session (session.rs, menu.rs, render.rs)                   │
//! │  - Menu state machine over an injected line source / sink   │
//! │  - Parses menu choices, renders records and messages        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the store and id counter │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic, returns `CmdResult`                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - `DataStore` trait, `InMemoryStore`, `IdSequence`         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Terminal Assumptions in Core
//!
//! From `api.rs` inward, code never touches stdout or stdin. The session writes to
//! whatever `Write` it is handed and reads from whatever `BufRead` it is handed, so
//! the whole menu grammar is testable with a `Cursor` and a `Vec<u8>`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each menu action
//! - [`store`]: Storage abstraction and the in-memory implementation
//! - [`model`]: Core data types (`Customer`, `CustomerId`)
//! - [`seed`]: Demo customers loaded at startup
//! - [`menu`]: Menu text and choice parsing
//! - [`render`]: Display formatting for records and messages
//! - [`session`]: The interactive menu loop
//! - [`config`]: Runtime settings
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod menu;
pub mod model;
pub mod render;
pub mod seed;
pub mod session;
pub mod store;
