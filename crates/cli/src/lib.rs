//! Rungs CLI Library
//!
//! This crate provides the command-line interface for rungs, an interactive
//! menu launcher. It owns the keystroke-at-a-time menu loop: presenting a
//! menu, dispatching the chosen entry's command, and walking the default
//! selection forward so accepting the default steps through a menu one
//! entry per round.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`menu_ui`]: The inline single-keystroke menu widget and the trait the
//!   engine consumes, so tests can drive the loop with a scripted fake
//! - [`engine`]: The interactive state machine over a loaded menu set
//!
//! # Examples
//!
//! The binary (`rungs`) can be used in several ways:
//!
//! ```bash
//! # Open a menu of all configured sections
//! rungs
//!
//! # Open one menu by name, fuzzily matched
//! rungs build
//!
//! # Open the config-editing menu
//! rungs --edit
//!
//! # Show commands instead of running them
//! rungs --dry-run build
//! ```

pub mod cli_args;
pub mod engine;
pub mod menu_ui;
