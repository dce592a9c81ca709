//! # Ideabook Architecture
//!
//! Ideabook is a **UI-agnostic blog-idea list**. The library owns the
//! records, the operations on them, and the presentation state; the CLI
//! binary is just one shell over it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Shell (main.rs + args.rs)                                  │
//! │  - Parses arguments, prints output, maps errors to exit     │
//! │    codes. The ONLY place that knows about stdout/stderr.    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Presenters (presenter/)                                    │
//! │  - Hold draft input and the rendered listing                │
//! │  - Issue operations, route failures to an ErrorPrompt       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Service (service.rs)                                       │
//! │  - Thin facade over the store                               │
//! │  - Normalizes failures to NotFound / Persistence            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - Abstract IdeaStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From the presenters inward, code takes regular arguments, returns regular
//! types, and **never** writes to stdout/stderr or assumes a terminal. The
//! same core could sit behind a TUI or a web handler unchanged.
//!
//! ## Module Overview
//!
//! - [`model`]: The `Idea` record
//! - [`store`]: Storage abstraction and implementations
//! - [`service`]: The facade presenters talk to
//! - [`presenter`]: List and edit presentation state
//! - [`notifier`]: Failure → acknowledgement prompt mapping
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod config;
pub mod error;
pub mod model;
pub mod notifier;
pub mod presenter;
pub mod service;
pub mod store;
