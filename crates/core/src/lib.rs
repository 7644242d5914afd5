//! Rungs Core Library
//!
//! This crate provides the core functionality for rungs, an interactive menu
//! launcher that reads a sectioned configuration file and steps a user through
//! keyed prompt/command entries one keystroke at a time.
//!
//! # Key Features
//!
//! - **Ordered Config Parsing**: An ini dialect with case-sensitive keys,
//!   multi-line command blocks, and no value interpolation
//! - **Durable Loading**: A backup copy of the last good config file is kept
//!   and parsed instead when the primary file is corrupt
//! - **Menu Resolution**: Exact, case-insensitive, and word-boundary
//!   substring matching of user-typed menu names
//! - **Command Execution**: Shell execution with tracing, an optional
//!   precommand, and a dry-run mode that prints instead of running
//! - **Error Handling**: One error type for all failure modes
//!
//! # Examples
//!
//! Loading the menu configuration:
//!
//! ```no_run
//! use rungs_core::config::{ConfigPaths, ConfigStore};
//!
//! let store = ConfigStore::new(ConfigPaths::resolve(None)?);
//! let menus = store.load()?;
//! for name in menus.names() {
//!     println!("menu: {name}");
//! }
//! # Ok::<(), rungs_core::error::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod execution;
pub mod ini;
pub mod menus;
pub mod resolver;
