// Cattle Health Assessment 🐄 AGPL-3.0 License

//! Command-line interface: argument parsing, logging and the `analyze`
//! command implementation.

/// CLI arguments.
pub mod args;

/// Analysis command logic.
pub mod analyze;

/// Logging macros and verbosity state.
pub mod logging;
